//! Sort options and the sort engine.

use std::cmp::Ordering;

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Sort by highest rated.
    Rating,
    /// Sort by most recent harvest.
    Newest,
    /// Sort by name A-Z.
    Name,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Featured,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Rating,
        SortOption::Newest,
        SortOption::Name,
    ];

    /// Key used in URLs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
            SortOption::Newest => "newest",
            SortOption::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Newest => "Newest First",
            SortOption::Name => "Name: A-Z",
        }
    }

    /// Parse a sort key. Unknown keys fall back to `Featured`.
    pub fn parse(key: &str) -> Self {
        match Self::ALL.into_iter().find(|o| o.as_str() == key.trim()) {
            Some(option) => option,
            None => {
                tracing::debug!(key, "unknown sort key, using featured order");
                SortOption::Featured
            }
        }
    }

    /// Comparator for this option. `Featured` treats everything as equal.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => Ordering::Equal,
            SortOption::PriceLow => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortOption::PriceHigh => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortOption::Rating => b.rating.total_cmp(&a.rating),
            SortOption::Newest => b.harvest_date.cmp(&a.harvest_date),
            SortOption::Name => collate(&a.name, &b.name),
        }
    }

    /// Return a newly ordered list; the input is left untouched.
    pub fn sort<'a>(&self, products: &[&'a Product]) -> Vec<&'a Product> {
        sort_stable(products, |a, b| self.compare(a, b))
    }
}

impl From<&str> for SortOption {
    fn from(key: &str) -> Self {
        SortOption::parse(key)
    }
}

/// Stable sort into a new vector: equal elements keep their input order.
pub fn sort_stable<'a, F>(products: &[&'a Product], mut compare: F) -> Vec<&'a Product>
where
    F: FnMut(&Product, &Product) -> Ordering,
{
    let mut sorted = products.to_vec();
    // `sort_by` is a stable merge sort
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}

/// Name ordering for display.
///
/// Letters compare without accents or case first, the way a locale-aware
/// collator treats them. Ties are broken by accents (unaccented first), then
/// by case (lowercase first), then by code point.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}
