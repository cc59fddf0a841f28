//! Product types.

use crate::ids::{FarmerId, ProductId};
use crate::money::{Currency, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Produce category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Vegetables,
    Fruits,
    Grains,
    Herbs,
    Dairy,
    Legumes,
}

impl ProductCategory {
    /// All categories, in menu order.
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Vegetables,
        ProductCategory::Fruits,
        ProductCategory::Grains,
        ProductCategory::Herbs,
        ProductCategory::Dairy,
        ProductCategory::Legumes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Vegetables => "Vegetables",
            ProductCategory::Fruits => "Fruits",
            ProductCategory::Grains => "Grains",
            ProductCategory::Herbs => "Herbs",
            ProductCategory::Dairy => "Dairy",
            ProductCategory::Legumes => "Legumes",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality grade assigned by the farmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityGrade {
    Premium,
    Standard,
    Organic,
}

impl QualityGrade {
    pub const ALL: [QualityGrade; 3] = [
        QualityGrade::Premium,
        QualityGrade::Standard,
        QualityGrade::Organic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityGrade::Premium => "Premium",
            QualityGrade::Standard => "Standard",
            QualityGrade::Organic => "Organic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a product can currently be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    Seasonal,
}

impl Availability {
    pub const ALL: [Availability; 3] = [
        Availability::InStock,
        Availability::OutOfStock,
        Availability::Seasonal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::InStock => "In Stock",
            Availability::OutOfStock => "Out of Stock",
            Availability::Seasonal => "Seasonal",
        }
    }

    /// Accepts the display form ("In Stock") or a slug ("in-stock").
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().replace(&['-', '_'][..], " ");
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(&normalized))
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product listed by a farmer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Produce category.
    pub category: ProductCategory,
    /// Full description.
    pub description: String,
    /// Price per unit.
    pub price: Money,
    /// Unit label (e.g., "kg", "dozen").
    pub unit: String,
    /// Quantity available, in units.
    pub quantity: u32,
    /// Image references.
    #[serde(default)]
    pub images: Vec<String>,
    /// Owning farmer.
    pub farmer_id: FarmerId,
    /// Quality grade.
    pub quality: QualityGrade,
    /// Harvest date.
    pub harvest_date: NaiveDate,
    /// Best-before date.
    pub expiry_date: NaiveDate,
    /// Availability status.
    pub availability: Availability,
    /// Only sold during part of the year.
    #[serde(default)]
    pub seasonal: bool,
    /// Where the produce is grown.
    pub location: String,
    /// Average review rating (0-5).
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
}

impl Product {
    /// Currency the product is priced in.
    pub fn currency(&self) -> Currency {
        self.price.currency
    }

    /// Check if the product can be ordered right now.
    pub fn is_available(&self) -> bool {
        self.availability == Availability::InStock && self.quantity > 0
    }

    pub fn is_organic(&self) -> bool {
        self.quality == QualityGrade::Organic
    }

    /// Value of the remaining stock at list price.
    pub fn stock_value(&self) -> Money {
        self.price.times(self.quantity)
    }

    /// Price with unit, e.g. "$2.50/kg".
    pub fn price_label(&self) -> String {
        format!("{}/{}", self.price.display(), self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Organic Tomatoes".to_string(),
            category: ProductCategory::Vegetables,
            description: "Vine-ripened".to_string(),
            price: Money::usd(250),
            unit: "kg".to_string(),
            quantity: 200,
            images: Vec::new(),
            farmer_id: FarmerId::new("f1"),
            quality: QualityGrade::Organic,
            harvest_date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 1, 24).unwrap(),
            availability: Availability::InStock,
            seasonal: false,
            location: "California, USA".to_string(),
            rating: 4.8,
            reviews: 124,
        }
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(ProductCategory::from_str("fruits"), Some(ProductCategory::Fruits));
        assert_eq!(ProductCategory::from_str("All Categories"), None);
        assert_eq!(QualityGrade::from_str("ORGANIC"), Some(QualityGrade::Organic));
        assert_eq!(Availability::from_str("out-of-stock"), Some(Availability::OutOfStock));
        assert_eq!(Availability::from_str("In Stock"), Some(Availability::InStock));
    }

    #[test]
    fn test_availability_serde_uses_display_names() {
        let json = serde_json::to_string(&Availability::OutOfStock).unwrap();
        assert_eq!(json, "\"Out of Stock\"");
    }

    #[test]
    fn test_product_helpers() {
        let mut p = product();
        assert!(p.is_available());
        assert!(p.is_organic());
        assert_eq!(p.stock_value().amount_cents, 50_000);
        assert_eq!(p.price_label(), "$2.50/kg");

        p.quantity = 0;
        assert!(!p.is_available());
    }
}
