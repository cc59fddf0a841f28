//! Search results for the marketplace listing.

use crate::catalog::{Catalog, Product};
use crate::search::{FilterState, SortOption};
use serde::Serialize;

/// Filtered and sorted products, plus what the listing header shows.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    /// The matching products, in display order.
    pub items: Vec<&'a Product>,
    /// Size of the unfiltered catalog.
    pub catalog_size: usize,
    /// Badge count for the filter sidebar.
    pub active_filters: usize,
    /// Sort applied to `items`.
    pub sort: SortOption,
    /// Search text to echo back ("Results for ..."), if any.
    pub query: Option<String>,
}

impl<'a> SearchResults<'a> {
    /// Filter the catalog, then sort what is left.
    pub fn run(catalog: &'a Catalog, filters: &FilterState, sort: SortOption) -> Self {
        let filtered = filters.apply(catalog);
        let items = sort.sort(&filtered);
        let query = (!filters.search.is_empty()).then(|| filters.search.clone());

        Self {
            items,
            catalog_size: catalog.len(),
            active_filters: filters.active_count(),
            sort,
            query,
        }
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of matching products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the "Clear all filters" action applies.
    pub fn can_clear_filters(&self) -> bool {
        self.active_filters > 0
    }

    /// Header line, e.g. "3 products".
    pub fn summary_line(&self) -> String {
        match self.len() {
            1 => "1 product".to_string(),
            n => format!("{} products", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample, ProductCategory};
    use crate::search::Criterion;

    #[test]
    fn test_run_filters_then_sorts() {
        let catalog = sample::catalog();
        let filters = FilterState {
            category: Criterion::Active(ProductCategory::Vegetables),
            ..Default::default()
        };
        let results = SearchResults::run(&catalog, &filters, SortOption::PriceHigh);

        let ids: Vec<&str> = results.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4", "1", "2"]);
        assert_eq!(results.catalog_size, 8);
        assert_eq!(results.active_filters, 1);
        assert!(results.query.is_none());
        assert_eq!(results.summary_line(), "4 products");
    }

    #[test]
    fn test_empty_results_offer_reset() {
        let catalog = sample::catalog();
        let filters = FilterState {
            search: "durian".to_string(),
            ..Default::default()
        };
        let results = SearchResults::run(&catalog, &filters, SortOption::Featured);
        assert!(results.is_empty());
        assert!(results.can_clear_filters());
        assert_eq!(results.query.as_deref(), Some("durian"));
        assert_eq!(results.summary_line(), "0 products");
    }
}
