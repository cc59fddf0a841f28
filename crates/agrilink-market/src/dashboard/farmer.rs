//! Farmer dashboard: stock figures and the add-listing form.

use crate::catalog::{Availability, Catalog, Farmer, Product, ProductCategory, QualityGrade};
use crate::error::MarketError;
use crate::ids::{FarmerId, ProductId};
use crate::money::{Currency, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Farmer dashboard figures, derived from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmerOverview {
    pub farmer_id: FarmerId,
    pub farm_name: String,
    pub product_count: usize,
    pub in_stock_count: usize,
    /// Mean product rating, 0.0 with no products.
    pub average_rating: f64,
    /// Sum of price times available quantity.
    pub inventory_value: Money,
}

impl FarmerOverview {
    /// Returns `None` for an unknown farmer.
    pub fn for_farmer(catalog: &Catalog, farmer_id: &FarmerId) -> Option<Self> {
        let farmer = catalog.farmer(farmer_id)?;
        let products: Vec<&Product> = catalog.products_by(farmer_id).collect();

        let currency = products
            .first()
            .map_or(Currency::default(), |p| p.currency());
        let values: Vec<Money> = products.iter().map(|p| p.stock_value()).collect();
        let average_rating = if products.is_empty() {
            0.0
        } else {
            products.iter().map(|p| p.rating).sum::<f64>() / products.len() as f64
        };

        Some(Self {
            farmer_id: farmer.id.clone(),
            farm_name: farmer.farm_name.clone(),
            product_count: products.len(),
            in_stock_count: products.iter().filter(|p| p.is_available()).count(),
            average_rating,
            inventory_value: Money::sum(values.iter(), currency),
        })
    }
}

/// The "add product" form as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    #[serde(default)]
    pub description: String,
}

/// A listing that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    pub category: ProductCategory,
    pub price: Money,
    pub quantity: u32,
    pub description: String,
}

impl ListingDraft {
    /// Parse the raw fields. Prices are decimal amounts in `currency`.
    pub fn validate(&self, currency: Currency) -> Result<Listing, MarketError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MarketError::InvalidListing("name is required".to_string()));
        }

        let category = ProductCategory::from_str(self.category.trim()).ok_or_else(|| {
            MarketError::InvalidListing(format!("unknown category '{}'", self.category.trim()))
        })?;

        let price: f64 = self
            .price
            .trim()
            .trim_start_matches('$')
            .parse()
            .map_err(|_| MarketError::InvalidListing(format!("invalid price '{}'", self.price)))?;
        if !price.is_finite() || price <= 0.0 {
            return Err(MarketError::InvalidListing(
                "price must be greater than zero".to_string(),
            ));
        }

        let quantity: u32 = self.quantity.trim().parse().map_err(|_| {
            MarketError::InvalidListing(format!("invalid quantity '{}'", self.quantity))
        })?;

        Ok(Listing {
            name: name.to_string(),
            category,
            price: Money::from_decimal(price, currency),
            quantity,
            description: self.description.trim().to_string(),
        })
    }
}

impl Listing {
    /// Turn the listing into a catalog product for `farmer`, harvested on `harvest_date`.
    pub fn into_product(self, farmer: &Farmer, harvest_date: NaiveDate) -> Product {
        let availability = if self.quantity > 0 {
            Availability::InStock
        } else {
            Availability::OutOfStock
        };
        Product {
            id: ProductId::generate(),
            name: self.name,
            category: self.category,
            description: self.description,
            price: self.price,
            unit: "kg".to_string(),
            quantity: self.quantity,
            images: Vec::new(),
            farmer_id: farmer.id.clone(),
            quality: QualityGrade::Standard,
            harvest_date,
            expiry_date: harvest_date,
            availability,
            seasonal: false,
            location: farmer.location.clone(),
            rating: 0.0,
            reviews: 0,
        }
    }
}
