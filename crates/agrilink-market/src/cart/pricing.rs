//! Order summary calculations.

use crate::cart::{Cart, PromoCode};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Shipping and tax settings for the order summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Flat fee charged on any non-empty order.
    pub shipping_fee: Money,
    /// Tax on the discounted subtotal (0.08 for 8%).
    pub tax_rate: f64,
}

impl PricingPolicy {
    pub const DEFAULT_SHIPPING_CENTS: i64 = 599;
    pub const DEFAULT_TAX_RATE: f64 = 0.08;
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            shipping_fee: Money::usd(Self::DEFAULT_SHIPPING_CENTS),
            tax_rate: Self::DEFAULT_TAX_RATE,
        }
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Per-item line totals, in cart order.
    pub lines: Vec<LineTotal>,
    /// Sum of quantities.
    pub item_count: u64,
    /// Subtotal before discounts.
    pub subtotal: Money,
    /// Recognized promo code, if any.
    pub promo: Option<PromoCode>,
    /// Discount amount.
    pub discount: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Tax amount.
    pub tax: Money,
    /// Final total (subtotal - discount + shipping + tax).
    pub total: Money,
}

/// Line total for one cart item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub total: Money,
}

impl OrderSummary {
    /// Price a cart. An unrecognized `promo` gives no discount.
    pub fn calculate(cart: &Cart, promo: Option<&str>, policy: &PricingPolicy) -> Self {
        let currency = cart.currency();
        let promo = promo.and_then(PromoCode::parse);

        let lines: Vec<LineTotal> = cart
            .items()
            .iter()
            .map(|item| LineTotal {
                product_id: item.product_id.clone(),
                product_name: item.product_name.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                total: item.line_total(),
            })
            .collect();

        let subtotal = cart.subtotal();
        let discount = promo.map_or(Money::zero(currency), |p| subtotal.apply_rate(p.rate()));
        let taxable = subtotal.amount_cents - discount.amount_cents;
        let tax = Money::new(taxable, currency).apply_rate(policy.tax_rate);
        let shipping = if cart.is_empty() {
            Money::zero(currency)
        } else {
            Money::new(policy.shipping_fee.amount_cents, currency)
        };
        let total = Money::new(
            taxable + shipping.amount_cents + tax.amount_cents,
            currency,
        );

        tracing::debug!(
            items = cart.item_count(),
            subtotal = subtotal.amount_cents,
            discount = discount.amount_cents,
            total = total.amount_cents,
            "order summary calculated"
        );

        Self {
            lines,
            item_count: cart.item_count(),
            subtotal,
            promo,
            discount,
            shipping,
            tax,
            total,
        }
    }

    /// Summary of an empty cart.
    pub fn empty(currency: Currency) -> Self {
        Self::calculate(&Cart::with_currency(currency), None, &PricingPolicy::default())
    }

    /// Check if a discount was applied.
    pub fn has_discount(&self) -> bool {
        self.discount.amount_cents > 0
    }

    /// Discount label, e.g. "Discount (10%)".
    pub fn discount_label(&self) -> Option<String> {
        self.promo
            .filter(|_| self.has_discount())
            .map(|p| format!("Discount ({}%)", p.percent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    #[test]
    fn test_empty_cart_has_no_shipping() {
        let summary = OrderSummary::empty(Currency::USD);
        assert!(summary.subtotal.is_zero());
        assert!(summary.shipping.is_zero());
        assert!(summary.tax.is_zero());
        assert!(summary.total.is_zero());
        assert!(summary.lines.is_empty());
    }

    #[test]
    fn test_reference_scenario_with_fresh10() {
        let catalog = sample::catalog();
        let cart = sample::seeded_cart(&catalog);
        let summary = OrderSummary::calculate(&cart, Some("FRESH10"), &PricingPolicy::default());

        assert_eq!(summary.subtotal.amount_cents, 1430);
        assert_eq!(summary.discount.amount_cents, 143);
        assert_eq!(summary.shipping.amount_cents, 599);
        // 8% of 12.87 is 1.0296
        assert_eq!(summary.tax.amount_cents, 103);
        // 19.8896 at cent precision
        assert_eq!(summary.total.amount_cents, 1989);
        assert_eq!(summary.discount_label().as_deref(), Some("Discount (10%)"));
    }

    #[test]
    fn test_harvest20_and_unknown_codes() {
        let catalog = sample::catalog();
        let cart = sample::seeded_cart(&catalog);
        let policy = PricingPolicy::default();

        let summary = OrderSummary::calculate(&cart, Some("harvest20"), &policy);
        assert_eq!(summary.discount.amount_cents, 286);

        let summary = OrderSummary::calculate(&cart, Some("BOGUS"), &policy);
        assert!(summary.promo.is_none());
        assert!(summary.discount.is_zero());
        assert!(summary.discount_label().is_none());
        // 14.30 + 5.99 + 1.144 tax
        assert_eq!(summary.tax.amount_cents, 114);
        assert_eq!(summary.total.amount_cents, 1430 + 599 + 114);
    }

    #[test]
    fn test_line_totals() {
        let catalog = sample::catalog();
        let cart = sample::seeded_cart(&catalog);
        let summary = OrderSummary::calculate(&cart, None, &PricingPolicy::default());

        let totals: Vec<i64> = summary.lines.iter().map(|l| l.total.amount_cents).collect();
        assert_eq!(totals, vec![750, 360, 320]);
        assert_eq!(summary.item_count, 6);
    }

    #[test]
    fn test_custom_policy() {
        let catalog = sample::catalog();
        let cart = sample::seeded_cart(&catalog);
        let policy = PricingPolicy {
            shipping_fee: Money::usd(0),
            tax_rate: 0.0,
        };
        let summary = OrderSummary::calculate(&cart, None, &policy);
        assert_eq!(summary.total, summary.subtotal);
    }
}
