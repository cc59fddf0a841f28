//! Shopping cart module.
//!
//! Contains the cart, promo codes, and the order summary.

mod cart;
mod discount;
mod pricing;

pub use cart::{Cart, CartItem};
pub use discount::{discount_rate, PromoCode};
pub use pricing::{LineTotal, OrderSummary, PricingPolicy};
