//! Farmer directory: profiles and previous/next navigation.

use crate::catalog::{Catalog, Farmer, Product};
use crate::ids::FarmerId;
use serde::Serialize;

/// Read-only view over the farmers in a catalog.
#[derive(Debug, Clone, Copy)]
pub struct FarmerDirectory<'a> {
    catalog: &'a Catalog,
}

/// A farmer together with their listings and position in the directory.
#[derive(Debug, Clone, Serialize)]
pub struct FarmerProfile<'a> {
    pub farmer: &'a Farmer,
    /// Zero-based index in the directory.
    pub position: usize,
    /// Number of farmers in the directory.
    pub total: usize,
    pub products: Vec<&'a Product>,
}

impl<'a> FarmerDirectory<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// All farmers, in catalog order.
    pub fn farmers(&self) -> &'a [Farmer] {
        self.catalog.farmers()
    }

    /// Profile for `id`, falling back to the first farmer when `id` is
    /// absent or unknown. `None` only when the directory is empty.
    pub fn profile(&self, id: Option<&FarmerId>) -> Option<FarmerProfile<'a>> {
        let position = self.position(id);
        let farmer = self.farmers().get(position)?;
        Some(FarmerProfile {
            farmer,
            position,
            total: self.farmers().len(),
            products: self.catalog.products_by(&farmer.id).collect(),
        })
    }

    /// The farmer after `id`, wrapping to the first.
    pub fn next(&self, id: &FarmerId) -> Option<&'a Farmer> {
        let farmers = self.farmers();
        if farmers.is_empty() {
            return None;
        }
        let position = self.position(Some(id));
        farmers.get((position + 1) % farmers.len())
    }

    /// The farmer before `id`, wrapping to the last.
    pub fn previous(&self, id: &FarmerId) -> Option<&'a Farmer> {
        let farmers = self.farmers();
        if farmers.is_empty() {
            return None;
        }
        let position = self.position(Some(id));
        let previous = if position == 0 {
            farmers.len() - 1
        } else {
            position - 1
        };
        farmers.get(previous)
    }

    fn position(&self, id: Option<&FarmerId>) -> usize {
        id.and_then(|id| self.farmers().iter().position(|f| &f.id == id))
            .unwrap_or(0)
    }
}
