//! Catalog browsing.

use agrilink_market::catalog::{Availability, ProductCategory, QualityGrade};
use agrilink_market::search::{Criterion, FilterState, PriceRange, SearchResults, SortOption};
use anyhow::{anyhow, Result};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{availability_badge, format_rating};

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let filters = build_filters(&args)?;

    let sort = SortOption::parse(&args.sort);
    if sort.as_str() != args.sort.trim() {
        ctx.output
            .warn(&format!("Unknown sort '{}', showing featured order", args.sort));
    }

    let results = SearchResults::run(&catalog, &filters, sort);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    match results.query {
        Some(ref query) => ctx.output.header(&format!("Results for \"{}\"", query)),
        None => ctx.output.header("Fresh Produce Marketplace"),
    }
    ctx.output.info(&format!(
        "{} of {} · sorted by {}",
        results.summary_line(),
        results.catalog_size,
        results.sort.display_name()
    ));
    if results.can_clear_filters() {
        ctx.output
            .info(&format!("{} filter(s) active", results.active_filters));
    }

    if results.is_empty() {
        ctx.output.warn("No products found. Try adjusting your filters.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = results
        .items
        .iter()
        .map(|product| {
            let farm = catalog
                .farmer_of(product)
                .map_or("-", |f| f.farm_name.as_str());
            vec![
                product.id.to_string(),
                product.name.clone(),
                product.category.to_string(),
                product.price_label(),
                format_rating(product.rating),
                farm.to_string(),
                availability_badge(product.availability),
            ]
        })
        .collect();
    println!();
    ctx.output.table(
        &["ID", "PRODUCT", "CATEGORY", "PRICE", "RATING", "FARM", "STATUS"],
        &rows,
    );

    Ok(())
}

fn build_filters(args: &BrowseArgs) -> Result<FilterState> {
    let category = parse_criterion(args.category.as_deref(), "category", ProductCategory::from_str)?;
    let quality = parse_criterion(args.quality.as_deref(), "quality", QualityGrade::from_str)?;
    let availability = parse_criterion(
        args.availability.as_deref(),
        "availability",
        Availability::from_str,
    )?;

    let full = PriceRange::full();
    let low = args.min_price.map_or(full.low().amount_cents, to_cents);
    let high = args.max_price.map_or(full.high().amount_cents, to_cents);

    Ok(FilterState {
        search: args.search.clone().unwrap_or_default(),
        category,
        quality,
        location: args.location.clone().unwrap_or_default(),
        price_range: PriceRange::clamped(low, high),
        availability,
        organic_only: args.organic,
        verified_only: args.verified,
    })
}

fn parse_criterion<T>(
    value: Option<&str>,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Criterion<T>> {
    match value {
        None => Ok(Criterion::Inactive),
        Some(raw) if raw.eq_ignore_ascii_case("all") => Ok(Criterion::Inactive),
        Some(raw) => parse(raw)
            .map(Criterion::Active)
            .ok_or_else(|| anyhow!("Unknown {}: {}", name, raw)),
    }
}

fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
