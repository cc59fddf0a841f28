//! Farmer and buyer dashboards.

use agrilink_market::cart::Cart;
use agrilink_market::catalog::{sample, Catalog};
use agrilink_market::dashboard::{BuyerOverview, FarmerOverview, ListingDraft};
use agrilink_market::favorites::Favorites;
use agrilink_market::ids::{FarmerId, ProductId};
use anyhow::{anyhow, Result};

use super::{DashboardArgs, DashboardCommand};
use crate::context::Context;
use crate::output::{availability_badge, format_rating};

/// Run the dashboard command.
pub fn run(args: DashboardArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    match args.command {
        DashboardCommand::Farmer { id } => farmer_dashboard(&catalog, &FarmerId::new(id), ctx),
        DashboardCommand::AddListing {
            farmer,
            name,
            category,
            price,
            quantity,
            description,
        } => {
            let draft = ListingDraft {
                name,
                category,
                price,
                quantity,
                description,
            };
            add_listing(&catalog, &FarmerId::new(farmer), &draft, ctx)
        }
        DashboardCommand::Buyer { seeded, favorites } => {
            buyer_dashboard(&catalog, seeded, &favorites, ctx)
        }
    }
}

fn farmer_dashboard(catalog: &Catalog, id: &FarmerId, ctx: &Context) -> Result<()> {
    let overview = FarmerOverview::for_farmer(catalog, id)
        .ok_or_else(|| anyhow!("No farmer with id {}", id))?;

    if ctx.output.is_json() {
        ctx.output.json(&overview);
        return Ok(());
    }

    ctx.output.header(&format!("{} Dashboard", overview.farm_name));
    ctx.output.kv("Products", &overview.product_count.to_string());
    ctx.output.kv("In stock", &overview.in_stock_count.to_string());
    ctx.output.kv("Average rating", &format_rating(overview.average_rating));
    ctx.output.kv("Inventory value", &overview.inventory_value.display());

    ctx.output.header("Listings");
    for product in catalog.products_by(id) {
        ctx.output.list_item(&format!(
            "{} · {} · {} {} · {}",
            product.name,
            product.price_label(),
            product.quantity,
            product.unit,
            availability_badge(product.availability)
        ));
    }
    Ok(())
}

fn add_listing(
    catalog: &Catalog,
    farmer_id: &FarmerId,
    draft: &ListingDraft,
    ctx: &Context,
) -> Result<()> {
    let farmer = catalog
        .farmer(farmer_id)
        .ok_or_else(|| anyhow!("No farmer with id {}", farmer_id))?;

    let listing = draft.validate(ctx.config.currency()?)?;
    let product = listing.into_product(farmer, chrono::Local::now().date_naive());

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output
        .success(&format!("Listing for {} is valid", product.name));
    ctx.output.kv("Farm", &farmer.farm_name);
    ctx.output.kv("Category", product.category.as_str());
    ctx.output.kv("Price", &product.price_label());
    ctx.output.kv("Quantity", &product.quantity.to_string());
    ctx.output.info("Listings are not saved; add the product to your catalog file to publish it.");
    Ok(())
}

fn buyer_dashboard(
    catalog: &Catalog,
    seeded: bool,
    favorite_ids: &[String],
    ctx: &Context,
) -> Result<()> {
    let currency = ctx.config.currency()?;
    let cart = if seeded {
        sample::seeded_cart_in(catalog, currency)
    } else {
        Cart::with_currency(currency)
    };

    let mut favorites = Favorites::new();
    for id in favorite_ids {
        let id = ProductId::new(id.as_str());
        if catalog.product(&id).is_none() {
            ctx.output.warn(&format!("No product with id {}", id));
            continue;
        }
        favorites.toggle(&id);
    }

    let overview = BuyerOverview::new(&cart, &favorites);

    if ctx.output.is_json() {
        ctx.output.json(&overview);
        return Ok(());
    }

    ctx.output.header("Buyer Dashboard");
    ctx.output.kv("Cart items", &overview.cart_items.to_string());
    ctx.output.kv("Cart subtotal", &overview.cart_subtotal.display());
    ctx.output.kv("Favorites", &overview.favorite_count.to_string());

    for id in favorites.iter() {
        if let Some(product) = catalog.product(id) {
            ctx.output
                .list_item(&format!("{} {}", product.name, product.price_label()));
        }
    }
    Ok(())
}
