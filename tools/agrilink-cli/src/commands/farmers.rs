//! Farmer directory commands.

use agrilink_market::catalog::{Catalog, FarmerDirectory};
use agrilink_market::ids::FarmerId;
use anyhow::{bail, Result};

use super::{FarmersArgs, FarmersCommand};
use crate::context::Context;
use crate::output::{availability_badge, format_rating, verified_badge};

/// Run the farmers command.
pub fn run(args: FarmersArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    match args.command {
        FarmersCommand::List { verified } => list_farmers(&catalog, verified, ctx),
        FarmersCommand::Show { id } => show_farmer(&catalog, id.map(FarmerId::new), ctx),
    }
}

fn list_farmers(catalog: &Catalog, verified_only: bool, ctx: &Context) -> Result<()> {
    let farmers: Vec<_> = FarmerDirectory::new(catalog)
        .farmers()
        .iter()
        .filter(|f| !verified_only || f.verified)
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&farmers);
        return Ok(());
    }

    ctx.output.header("Our Farmers");
    let rows: Vec<Vec<String>> = farmers
        .iter()
        .map(|farmer| {
            vec![
                farmer.id.to_string(),
                farmer.name.clone(),
                farmer.farm_name.clone(),
                farmer.location.clone(),
                format_rating(farmer.rating),
                verified_badge(farmer.verified),
            ]
        })
        .collect();
    ctx.output
        .table(&["ID", "FARMER", "FARM", "LOCATION", "RATING", "STATUS"], &rows);
    Ok(())
}

fn show_farmer(catalog: &Catalog, id: Option<FarmerId>, ctx: &Context) -> Result<()> {
    let directory = FarmerDirectory::new(catalog);
    let Some(profile) = directory.profile(id.as_ref()) else {
        bail!("The catalog has no farmers");
    };

    if let Some(ref requested) = id {
        if &profile.farmer.id != requested {
            ctx.output
                .warn(&format!("No farmer with id {}, showing {}", requested, profile.farmer.id));
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&profile);
        return Ok(());
    }

    let farmer = profile.farmer;
    ctx.output.header(&format!(
        "{} ({}/{})",
        farmer.farm_name,
        profile.position + 1,
        profile.total
    ));
    ctx.output.kv("Farmer", &farmer.name);
    ctx.output.kv("Location", &farmer.location);
    ctx.output.kv("Status", &verified_badge(farmer.verified));
    ctx.output.kv("Rating", &format_rating(farmer.rating));
    if !farmer.farm_size.is_empty() {
        ctx.output.kv("Farm size", &farmer.farm_size);
    }
    if !farmer.certifications.is_empty() {
        ctx.output.kv("Certifications", &farmer.certifications.join(", "));
    }
    if !farmer.farming_methods.is_empty() {
        ctx.output.kv("Methods", &farmer.farming_methods.join(", "));
    }
    if !farmer.specialties.is_empty() {
        ctx.output.kv("Specialties", &farmer.specialties.join(", "));
    }
    if !farmer.description.is_empty() {
        println!("\n  {}", farmer.description);
    }

    ctx.output.header(&format!("Products ({})", profile.products.len()));
    for product in &profile.products {
        ctx.output.list_item(&format!(
            "{} {} {}",
            product.name,
            product.price_label(),
            availability_badge(product.availability)
        ));
    }

    let previous = directory.previous(&farmer.id);
    let next = directory.next(&farmer.id);
    if let (Some(previous), Some(next)) = (previous, next) {
        println!();
        ctx.output.info(&format!(
            "Previous: {} ({}) · Next: {} ({})",
            previous.name, previous.id, next.name, next.id
        ));
    }

    Ok(())
}
