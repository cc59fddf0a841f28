//! Buyer dashboard figures.

use crate::cart::Cart;
use crate::favorites::Favorites;
use crate::money::Money;
use serde::Serialize;

/// Buyer dashboard figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuyerOverview {
    pub cart_items: u64,
    pub cart_subtotal: Money,
    pub favorite_count: usize,
}

impl BuyerOverview {
    pub fn new(cart: &Cart, favorites: &Favorites) -> Self {
        Self {
            cart_items: cart.item_count(),
            cart_subtotal: cart.subtotal(),
            favorite_count: favorites.len(),
        }
    }
}
