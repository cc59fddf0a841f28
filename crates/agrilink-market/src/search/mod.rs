//! Search module.
//!
//! Contains the filter state, the filter engine, and stable sorting.

mod filter;
mod query;
mod results;

pub use filter::{Criterion, FilterState, PriceBounds, PriceRange};
pub use query::{collate, sort_stable, SortOption};
pub use results::SearchResults;
