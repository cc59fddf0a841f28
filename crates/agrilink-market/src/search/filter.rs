//! Filter state and the filter engine.

use crate::catalog::{Availability, Catalog, Product, ProductCategory, QualityGrade};
use crate::error::MarketError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One filter dimension: either switched off or matching a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion<T> {
    Inactive,
    Active(T),
}

impl<T: PartialEq> Criterion<T> {
    pub fn is_active(&self) -> bool {
        matches!(self, Criterion::Active(_))
    }

    /// Inactive criteria accept everything.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Criterion::Inactive => true,
            Criterion::Active(expected) => expected == value,
        }
    }
}

impl<T> Default for Criterion<T> {
    fn default() -> Self {
        Criterion::Inactive
    }
}

impl<T> From<Option<T>> for Criterion<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Criterion::Active(v),
            None => Criterion::Inactive,
        }
    }
}

/// Inclusive price bounds inside the slider domain of $0 to $100.
///
/// Deserialization goes through [`PriceRange::new`], so an inverted range
/// never gets into a [`FilterState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PriceBounds", into = "PriceBounds")]
pub struct PriceRange {
    low: Money,
    high: Money,
}

impl PriceRange {
    /// Lower end of the domain, in cents.
    pub const DOMAIN_MIN_CENTS: i64 = 0;
    /// Upper end of the domain, in cents.
    pub const DOMAIN_MAX_CENTS: i64 = 10_000;

    /// The whole domain; filtering by it is skipped.
    pub fn full() -> Self {
        Self {
            low: Money::usd(Self::DOMAIN_MIN_CENTS),
            high: Money::usd(Self::DOMAIN_MAX_CENTS),
        }
    }

    /// Build a range, rejecting an inverted one.
    ///
    /// Bounds outside the domain are kept as given; use [`PriceRange::clamped`]
    /// to pull raw user input into the domain.
    pub fn new(low: Money, high: Money) -> Result<Self, MarketError> {
        if low.amount_cents > high.amount_cents {
            return Err(MarketError::InvalidPriceRange {
                low: low.amount_cents,
                high: high.amount_cents,
            });
        }
        Ok(Self { low, high })
    }

    /// Clamp both bounds into the domain and order them.
    pub fn clamped(low_cents: i64, high_cents: i64) -> Self {
        let clamp = |c: i64| c.clamp(Self::DOMAIN_MIN_CENTS, Self::DOMAIN_MAX_CENTS);
        let (low, high) = (clamp(low_cents), clamp(high_cents));
        Self {
            low: Money::usd(low.min(high)),
            high: Money::usd(low.max(high)),
        }
    }

    pub fn low(&self) -> Money {
        self.low
    }

    pub fn high(&self) -> Money {
        self.high
    }

    /// Whether either bound differs from the domain.
    pub fn is_active(&self) -> bool {
        self.low.amount_cents != Self::DOMAIN_MIN_CENTS
            || self.high.amount_cents != Self::DOMAIN_MAX_CENTS
    }

    /// Inclusive on both ends. Compares amounts only.
    pub fn contains(&self, price: &Money) -> bool {
        price.amount_cents >= self.low.amount_cents && price.amount_cents <= self.high.amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Serialized form of a [`PriceRange`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceBounds {
    pub low: Money,
    pub high: Money,
}

impl TryFrom<PriceBounds> for PriceRange {
    type Error = MarketError;

    fn try_from(bounds: PriceBounds) -> Result<Self, Self::Error> {
        PriceRange::new(bounds.low, bounds.high)
    }
}

impl From<PriceRange> for PriceBounds {
    fn from(range: PriceRange) -> Self {
        PriceBounds {
            low: range.low,
            high: range.high,
        }
    }
}

/// Everything the buyer has selected in the filter sidebar.
///
/// The default value filters nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterState {
    /// Matched against product name, description, farmer name and farm name.
    pub search: String,
    pub category: Criterion<ProductCategory>,
    pub quality: Criterion<QualityGrade>,
    /// Substring of the product location.
    pub location: String,
    pub price_range: PriceRange,
    pub availability: Criterion<Availability>,
    pub organic_only: bool,
    pub verified_only: bool,
}

impl FilterState {
    /// Clear every filter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of dimensions that deviate from the default.
    pub fn active_count(&self) -> usize {
        [
            !self.search.is_empty(),
            self.category.is_active(),
            self.quality.is_active(),
            !self.location.is_empty(),
            self.price_range.is_active(),
            self.availability.is_active(),
            self.organic_only,
            self.verified_only,
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    pub fn is_default(&self) -> bool {
        self.active_count() == 0
    }

    /// Whether `product` passes every active predicate.
    pub fn matches(&self, catalog: &Catalog, product: &Product) -> bool {
        self.matches_search(catalog, product)
            && self.category.accepts(&product.category)
            && self.quality.accepts(&product.quality)
            && self.matches_location(product)
            && (!self.price_range.is_active() || self.price_range.contains(&product.price))
            && self.availability.accepts(&product.availability)
            && (!self.organic_only || product.is_organic())
            && (!self.verified_only || catalog.farmer_of(product).is_some_and(|f| f.verified))
    }

    /// Products passing every active predicate, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let matched: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|p| self.matches(catalog, p))
            .collect();

        tracing::debug!(
            active_filters = self.active_count(),
            matched = matched.len(),
            total = catalog.len(),
            "filters applied"
        );

        matched
    }

    fn matches_search(&self, catalog: &Catalog, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(&product.name)
            || contains(&product.description)
            || catalog
                .farmer_of(product)
                .is_some_and(|f| contains(&f.name) || contains(&f.farm_name))
    }

    fn matches_location(&self, product: &Product) -> bool {
        self.location.is_empty()
            || product
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_default_state_returns_full_catalog() {
        let catalog = sample::catalog();
        let filters = FilterState::default();
        let result = filters.apply(&catalog);
        assert_eq!(result.len(), catalog.len());
        for (filtered, original) in result.iter().zip(catalog.products()) {
            assert_eq!(filtered.id, original.id);
        }
        assert!(filters.is_default());
    }

    #[test]
    fn test_search_matches_product_fields_case_insensitively() {
        let catalog = sample::catalog();
        let filters = FilterState {
            search: "TOMATO".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filters.apply(&catalog)), vec!["Organic Tomatoes"]);

        // Description only
        let filters = FilterState {
            search: "honeycrisp".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filters.apply(&catalog)), vec!["Fresh Apples"]);
    }

    #[test]
    fn test_search_matches_farmer_and_farm_name() {
        let catalog = sample::catalog();
        let by_farm = FilterState {
            search: "sunrise".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&by_farm.apply(&catalog)), vec!["Fresh Carrots", "Fresh Apples"]);

        let by_farmer = FilterState {
            search: "aiko".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&by_farmer.apply(&catalog)), vec!["Crisp Lettuce", "Fresh Basil"]);
    }

    #[test]
    fn test_category_quality_availability_criteria() {
        let catalog = sample::catalog();
        let filters = FilterState {
            category: Criterion::Active(ProductCategory::Fruits),
            ..Default::default()
        };
        assert_eq!(
            names(&filters.apply(&catalog)),
            vec!["Fresh Apples", "Organic Strawberries"]
        );

        let filters = FilterState {
            quality: Criterion::Active(QualityGrade::Premium),
            availability: Criterion::Active(Availability::InStock),
            ..Default::default()
        };
        assert_eq!(names(&filters.apply(&catalog)), vec!["Crisp Lettuce", "Fresh Apples"]);

        let filters = FilterState {
            availability: Criterion::Active(Availability::Seasonal),
            ..Default::default()
        };
        assert_eq!(names(&filters.apply(&catalog)), vec!["Sweet Corn"]);
    }

    #[test]
    fn test_location_substring() {
        let catalog = sample::catalog();
        let filters = FilterState {
            location: "texas".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filters.apply(&catalog)), vec!["Sweet Corn", "Whole Wheat Grain"]);
    }

    #[test]
    fn test_price_range_inclusive_and_one_sided() {
        let catalog = sample::catalog();

        // Narrowing only the lower bound still filters
        let filters = FilterState {
            price_range: PriceRange::clamped(320, 10_000),
            ..Default::default()
        };
        assert_eq!(
            names(&filters.apply(&catalog)),
            vec!["Crisp Lettuce", "Organic Strawberries", "Fresh Basil"]
        );

        // Both bounds inclusive
        let filters = FilterState {
            price_range: PriceRange::new(Money::usd(180), Money::usd(250)).unwrap(),
            ..Default::default()
        };
        assert_eq!(
            names(&filters.apply(&catalog)),
            vec!["Organic Tomatoes", "Fresh Carrots", "Fresh Apples"]
        );
    }

    #[test]
    fn test_full_range_is_skipped() {
        let catalog = sample::catalog();
        let mut products = catalog.products().to_vec();
        products[0].price = Money::usd(15_000);
        let pricey = Catalog::new(catalog.farmers().to_vec(), products).unwrap();

        // A product above the domain still shows while the range is untouched
        let filters = FilterState::default();
        assert_eq!(filters.apply(&pricey).len(), pricey.len());

        let filters = FilterState {
            price_range: PriceRange::clamped(0, 9_999),
            ..Default::default()
        };
        assert_eq!(filters.apply(&pricey).len(), pricey.len() - 1);
    }

    #[test]
    fn test_organic_and_verified_flags() {
        let catalog = sample::catalog();
        let filters = FilterState {
            organic_only: true,
            ..Default::default()
        };
        assert_eq!(
            names(&filters.apply(&catalog)),
            vec!["Organic Tomatoes", "Organic Strawberries", "Fresh Basil"]
        );

        let filters = FilterState {
            verified_only: true,
            ..Default::default()
        };
        let result = filters.apply(&catalog);
        assert_eq!(result.len(), 6);
        assert!(result.iter().all(|p| p.farmer_id.as_str() != "f4"));
    }

    #[test]
    fn test_conjunction_property() {
        let catalog = sample::catalog();
        let filters = FilterState {
            search: "fresh".to_string(),
            category: Criterion::Active(ProductCategory::Vegetables),
            verified_only: true,
            ..Default::default()
        };
        let included = filters.apply(&catalog);
        // Crisp Lettuce matches through its farm name, Farm Fresh Co.
        assert_eq!(names(&included), vec!["Fresh Carrots", "Crisp Lettuce"]);

        for product in catalog.products() {
            let passes_all = product.name.to_lowercase().contains("fresh")
                || product.description.to_lowercase().contains("fresh")
                || catalog
                    .farmer_of(product)
                    .is_some_and(|f| f.farm_name.to_lowercase().contains("fresh"));
            let passes_all = passes_all
                && product.category == ProductCategory::Vegetables
                && catalog.farmer_of(product).is_some_and(|f| f.verified);
            let is_included = included.iter().any(|p| p.id == product.id);
            assert_eq!(passes_all, is_included, "{}", product.name);
        }
    }

    #[test]
    fn test_no_results_is_not_an_error() {
        let catalog = sample::catalog();
        let filters = FilterState {
            search: "durian".to_string(),
            ..Default::default()
        };
        assert!(filters.apply(&catalog).is_empty());
    }

    #[test]
    fn test_active_count_and_reset() {
        let mut filters = FilterState {
            search: "corn".to_string(),
            quality: Criterion::Active(QualityGrade::Standard),
            price_range: PriceRange::clamped(0, 5_000),
            organic_only: true,
            ..Default::default()
        };
        assert_eq!(filters.active_count(), 4);

        filters.reset();
        assert_eq!(filters.active_count(), 0);
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_price_range_construction() {
        assert!(PriceRange::new(Money::usd(500), Money::usd(100)).is_err());

        let range = PriceRange::clamped(12_000, -5);
        assert_eq!(range.low().amount_cents, 0);
        assert_eq!(range.high().amount_cents, 10_000);
        assert!(!range.is_active());
    }

    #[test]
    fn test_inverted_range_fails_to_deserialize() {
        let json = r#"{"low":{"amount_cents":5000,"currency":"USD"},"high":{"amount_cents":100,"currency":"USD"}}"#;
        assert!(serde_json::from_str::<PriceRange>(json).is_err());

        let mut state = serde_json::to_value(FilterState::default()).unwrap();
        state["price_range"]["low"]["amount_cents"] = serde_json::json!(5000);
        state["price_range"]["high"]["amount_cents"] = serde_json::json!(100);
        let err = serde_json::from_value::<FilterState>(state).unwrap_err();
        assert!(err.to_string().contains("lower bound 5000"));
    }

    #[test]
    fn test_price_range_json_keeps_bounds() {
        let range = PriceRange::new(Money::usd(180), Money::usd(250)).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        let back: PriceRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
        assert!(back.is_active());
    }

    #[test]
    fn test_criterion_from_option() {
        let c: Criterion<QualityGrade> = None.into();
        assert!(!c.is_active());
        let c: Criterion<QualityGrade> = Some(QualityGrade::Organic).into();
        assert!(c.accepts(&QualityGrade::Organic));
        assert!(!c.accepts(&QualityGrade::Premium));
    }
}
