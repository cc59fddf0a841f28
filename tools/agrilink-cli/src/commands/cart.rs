//! Cart session and order summary.

use agrilink_market::cart::{Cart, OrderSummary};
use agrilink_market::catalog::{sample, Catalog};
use agrilink_market::ids::ProductId;
use anyhow::{bail, Context as _, Result};

use super::CartArgs;
use crate::context::Context;

/// Run the cart command.
///
/// Intents apply in a fixed order: seed, adds, quantities, removals.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let policy = ctx.config.pricing_policy()?;
    let currency = ctx.config.currency()?;
    let mut cart = if args.seeded {
        let cart = sample::seeded_cart_in(&catalog, currency);
        if cart.is_empty() {
            ctx.output
                .warn(&format!("No sample products are priced in {}", currency));
        }
        cart
    } else {
        Cart::with_currency(currency)
    };

    for id in &args.add {
        add_product(&mut cart, &catalog, id, ctx);
    }

    for entry in &args.quantities {
        let (id, quantity) = parse_quantity(entry)?;
        if !cart.set_quantity(&id, quantity) {
            ctx.output
                .warn(&format!("Quantity for {} left unchanged", id));
        }
    }

    for id in &args.remove {
        if !cart.remove(&ProductId::new(id.as_str())) {
            ctx.output.debug(&format!("{} was not in the cart", id));
        }
    }

    let summary = OrderSummary::calculate(&cart, args.promo.as_deref(), &policy);

    if let Some(ref code) = args.promo {
        if summary.promo.is_none() {
            ctx.output.warn(&format!("Promo code {} is not valid", code));
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    print_summary(&cart, &summary, ctx);
    Ok(())
}

fn add_product(cart: &mut Cart, catalog: &Catalog, id: &str, ctx: &Context) {
    let id = ProductId::new(id);
    let Some(product) = catalog.product(&id) else {
        ctx.output.warn(&format!("No product with id {}", id));
        return;
    };
    if !product.is_available() {
        ctx.output.warn(&format!(
            "{} is {}",
            product.name,
            product.availability.as_str().to_lowercase()
        ));
    }
    if cart.add_from(catalog, &id) {
        ctx.output.debug(&format!("Added {}", product.name));
    } else {
        ctx.output.warn(&format!(
            "{} is priced in {}, cart is in {}",
            product.name,
            product.currency(),
            cart.currency()
        ));
    }
}

/// Parse `ID=QTY`.
fn parse_quantity(entry: &str) -> Result<(ProductId, i64)> {
    let Some((id, qty)) = entry.split_once('=') else {
        bail!("Expected PRODUCT_ID=QTY, got '{}'", entry);
    };
    let qty: i64 = qty
        .trim()
        .parse()
        .with_context(|| format!("Invalid quantity in '{}'", entry))?;
    Ok((ProductId::new(id.trim()), qty))
}

fn print_summary(cart: &Cart, summary: &OrderSummary, ctx: &Context) {
    ctx.output.header(&format!("Shopping Cart ({} items)", summary.item_count));

    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    let rows: Vec<Vec<String>> = cart
        .items()
        .iter()
        .zip(&summary.lines)
        .map(|(item, line)| {
            vec![
                item.product_name.clone(),
                item.farm_name.clone(),
                format!("{}/{}", item.unit_price, item.unit),
                format!("x{}", line.quantity),
                line.total.display(),
            ]
        })
        .collect();
    ctx.output
        .table(&["PRODUCT", "FARM", "PRICE", "QTY", "TOTAL"], &rows);

    ctx.output.header("Order Summary");
    ctx.output.kv("Subtotal", &summary.subtotal.display());
    if let Some(label) = summary.discount_label() {
        ctx.output
            .kv(&label, &format!("-{}", summary.discount.display()));
    }
    ctx.output.kv("Shipping", &summary.shipping.display());
    ctx.output.kv("Tax", &summary.tax.display());
    ctx.output.kv("Total", &summary.total.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        let (id, qty) = parse_quantity("3=4").unwrap();
        assert_eq!(id.as_str(), "3");
        assert_eq!(qty, 4);

        assert_eq!(parse_quantity(" 2 = -1 ").unwrap().1, -1);
        assert!(parse_quantity("3").is_err());
        assert!(parse_quantity("3=lots").is_err());
    }
}
