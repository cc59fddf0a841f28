//! Dashboard summaries for farmers and buyers.

mod buyer;
mod farmer;

pub use buyer::BuyerOverview;
pub use farmer::{FarmerOverview, Listing, ListingDraft};
