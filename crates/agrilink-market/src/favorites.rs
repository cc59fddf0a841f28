//! Buyer favorites.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of favorited product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: BTreeSet<ProductId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership; returns whether the product is now a favorite.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ProductId> for Favorites {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut favorites = Favorites::new();
        let id = ProductId::new("5");

        assert!(favorites.toggle(&id));
        assert!(favorites.contains(&id));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle(&id));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut favorites: Favorites = ["1", "3"].into_iter().map(ProductId::new).collect();
        let before = favorites.clone();
        let id = ProductId::new("3");

        favorites.toggle(&id);
        favorites.toggle(&id);
        assert_eq!(favorites, before);
    }
}
