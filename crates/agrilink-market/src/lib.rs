//! Produce marketplace domain types and logic for Agrilink.
//!
//! This crate holds everything the marketplace views consume, minus the views:
//!
//! - **Catalog**: Products, farmers, the built-in sample data
//! - **Search**: Filter state, the filter engine, stable sorting
//! - **Cart**: Shopping cart with price snapshots, promo codes, order summary
//! - **Account**: Role-keyed registration forms
//! - **Dashboard**: Farmer and buyer overviews, product listing drafts
//!
//! # Example
//!
//! ```rust
//! use agrilink_market::prelude::*;
//!
//! let catalog = agrilink_market::catalog::sample::catalog();
//!
//! // Narrow the catalog and order it
//! let mut filters = FilterState::default();
//! filters.organic_only = true;
//! let results = SearchResults::run(&catalog, &filters, SortOption::PriceLow);
//! assert!(results.items.iter().all(|p| p.quality == QualityGrade::Organic));
//!
//! // Fill a cart and price it
//! let mut cart = Cart::new();
//! for product in &results.items {
//!     cart.add(product);
//! }
//! let summary = OrderSummary::calculate(&cart, Some("FRESH10"), &PricingPolicy::default());
//! assert!(summary.total.amount_cents >= summary.subtotal.amount_cents - summary.discount.amount_cents);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod account;
pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod favorites;
pub mod search;

pub use error::{MarketError, RegistrationError, RegistrationIssue};
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{MarketError, RegistrationError, RegistrationIssue};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Availability, Catalog, Farmer, FarmerDirectory, Product, ProductCategory, QualityGrade,
    };

    // Search
    pub use crate::search::{Criterion, FilterState, PriceRange, SearchResults, SortOption};

    // Cart
    pub use crate::cart::{Cart, CartItem, OrderSummary, PricingPolicy, PromoCode};

    // Account
    pub use crate::account::{Account, BuyerRegistration, FarmerRegistration, Registration, Role};

    // Dashboard
    pub use crate::dashboard::{BuyerOverview, FarmerOverview, Listing, ListingDraft};

    pub use crate::favorites::Favorites;
}
