//! Product catalog module.
//!
//! Contains types for products, farmers, the catalog store and sample data.

mod catalog;
mod directory;
mod farmer;
mod product;
pub mod sample;

pub use catalog::{Catalog, CatalogData};
pub use directory::{FarmerDirectory, FarmerProfile};
pub use farmer::Farmer;
pub use product::{Availability, Product, ProductCategory, QualityGrade};
