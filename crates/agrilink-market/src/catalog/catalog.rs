//! The in-memory catalog of products and farmers.

use std::collections::HashSet;

use crate::catalog::{Farmer, Product};
use crate::error::MarketError;
use crate::ids::{FarmerId, ProductId};
use serde::{Deserialize, Serialize};

/// Immutable set of products and the farmers who sell them.
///
/// Every product's `farmer_id` resolves to a farmer in the same catalog;
/// this is checked once at construction so lookups never have to fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData", into = "CatalogData")]
pub struct Catalog {
    farmers: Vec<Farmer>,
    products: Vec<Product>,
}

/// Serialized form of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub farmers: Vec<Farmer>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating ids, farmer references, prices and ratings.
    pub fn new(farmers: Vec<Farmer>, products: Vec<Product>) -> Result<Self, MarketError> {
        let mut farmer_ids = HashSet::new();
        for farmer in &farmers {
            if !farmer_ids.insert(&farmer.id) {
                return Err(MarketError::DuplicateFarmer(farmer.id.to_string()));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &products {
            if !product_ids.insert(&product.id) {
                return Err(MarketError::DuplicateProduct(product.id.to_string()));
            }
            if !farmer_ids.contains(&product.farmer_id) {
                return Err(MarketError::UnknownFarmer {
                    product_id: product.id.to_string(),
                    farmer_id: product.farmer_id.to_string(),
                });
            }
            if product.price.is_negative() {
                return Err(MarketError::NegativePrice(product.id.to_string()));
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(MarketError::InvalidRating {
                    product_id: product.id.to_string(),
                    rating: product.rating,
                });
            }
        }

        tracing::info!(
            farmers = farmers.len(),
            products = products.len(),
            "catalog loaded"
        );

        Ok(Self { farmers, products })
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json(json: &str) -> Result<Self, MarketError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::try_from(data)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, MarketError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Built-in data that is known to be consistent.
    pub(crate) fn from_trusted(farmers: Vec<Farmer>, products: Vec<Product>) -> Self {
        Self { farmers, products }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All farmers, in catalog order.
    pub fn farmers(&self) -> &[Farmer] {
        &self.farmers
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn farmer(&self, id: &FarmerId) -> Option<&Farmer> {
        self.farmers.iter().find(|f| &f.id == id)
    }

    /// The farmer selling a product.
    pub fn farmer_of(&self, product: &Product) -> Option<&Farmer> {
        self.farmer(&product.farmer_id)
    }

    /// Products sold by one farmer, in catalog order.
    pub fn products_by<'a>(&'a self, farmer_id: &'a FarmerId) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| &p.farmer_id == farmer_id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = MarketError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Catalog::new(data.farmers, data.products)
    }
}

impl From<Catalog> for CatalogData {
    fn from(catalog: Catalog) -> Self {
        CatalogData {
            farmers: catalog.farmers,
            products: catalog.products,
        }
    }
}
