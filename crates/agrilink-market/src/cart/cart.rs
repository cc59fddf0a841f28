//! Cart and cart item types.

use crate::catalog::{Catalog, Farmer, Product};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart, owned by the session that fills it.
///
/// Items are kept in insertion order and keyed by product id. Every
/// operation is total: inputs that make no sense are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty USD cart.
    pub fn new() -> Self {
        Self::with_currency(Currency::USD)
    }

    /// Create an empty cart in a given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of `product`.
    ///
    /// An existing item gets its quantity bumped and keeps the price it was
    /// first added at. A new item snapshots the current price. Products priced
    /// in another currency are ignored; returns whether the cart changed.
    pub fn add(&mut self, product: &Product) -> bool {
        self.add_snapshot(product, None)
    }

    /// Add one unit of the catalog product `id`, recording its farm name.
    ///
    /// Unknown ids are ignored.
    pub fn add_from(&mut self, catalog: &Catalog, id: &ProductId) -> bool {
        match catalog.product(id) {
            Some(product) => self.add_snapshot(product, catalog.farmer_of(product)),
            None => {
                tracing::debug!(product_id = %id, "ignoring unknown product");
                false
            }
        }
    }

    fn add_snapshot(&mut self, product: &Product, farmer: Option<&Farmer>) -> bool {
        if product.currency() != self.currency {
            tracing::debug!(
                product_id = %product.id,
                product_currency = %product.currency(),
                cart_currency = %self.currency,
                "ignoring product priced in another currency"
            );
            return false;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return true;
        }

        self.items.push(CartItem::snapshot(product, farmer));
        true
    }

    /// Remove an item. Removing something that is not there is fine.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Replace an item's quantity.
    ///
    /// Quantities below 1 are rejected; use [`Cart::remove`] to drop an item.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity < 1 {
            tracing::debug!(%product_id, quantity, "ignoring non-positive quantity");
            return false;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        match self.items.iter_mut().find(|i| &i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of snapshot price times quantity.
    pub fn subtotal(&self) -> Money {
        let cents = self
            .items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.line_total().amount_cents));
        Money::new(cents, self.currency)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A product in the cart, with the details captured when it was added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    pub unit: String,
    /// Empty when added without a catalog.
    #[serde(default)]
    pub farm_name: String,
    pub location: String,
    /// Price at the moment the product was first added.
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartItem {
    fn snapshot(product: &Product, farmer: Option<&Farmer>) -> Self {
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            unit: product.unit.clone(),
            farm_name: farmer.map(|f| f.farm_name.clone()).unwrap_or_default(),
            location: product.location.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}
