//! Built-in sample data used when no catalog file is configured.

use chrono::NaiveDate;

use crate::cart::Cart;
use crate::catalog::{Availability, Catalog, Farmer, Product, ProductCategory, QualityGrade};
use crate::ids::{FarmerId, ProductId};
use crate::money::{Currency, Money};

/// The sample catalog: four farmers and eight products.
pub fn catalog() -> Catalog {
    Catalog::from_trusted(farmers(), products())
}

/// A USD cart holding three tomatoes, two carrots and one lettuce.
///
/// Products missing from `catalog` are skipped.
pub fn seeded_cart(catalog: &Catalog) -> Cart {
    seeded_cart_in(catalog, Currency::default())
}

/// The seeded cart priced in `currency`.
///
/// Seed products priced in another currency are skipped, as with any add.
pub fn seeded_cart_in(catalog: &Catalog, currency: Currency) -> Cart {
    let mut cart = Cart::with_currency(currency);
    for (id, quantity) in [("1", 3), ("2", 2), ("3", 1)] {
        let id = ProductId::new(id);
        if cart.add_from(catalog, &id) {
            cart.set_quantity(&id, quantity);
        }
    }
    cart
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn farmers() -> Vec<Farmer> {
    vec![
        Farmer {
            id: FarmerId::new("f1"),
            name: "Maria Santos".to_string(),
            farm_name: "Green Valley Farm".to_string(),
            farm_size: "50 acres".to_string(),
            location: "California, USA".to_string(),
            verified: true,
            rating: 4.8,
            certifications: strings(&["USDA Organic", "Non-GMO"]),
            farming_methods: strings(&["Organic", "Drip Irrigation"]),
            specialties: strings(&["Tomatoes", "Berries"]),
            description: "Family-run organic farm growing vine-ripened vegetables and berries."
                .to_string(),
        },
        Farmer {
            id: FarmerId::new("f2"),
            name: "James Carter".to_string(),
            farm_name: "Sunrise Organic".to_string(),
            farm_size: "120 acres".to_string(),
            location: "Oregon, USA".to_string(),
            verified: true,
            rating: 4.9,
            certifications: strings(&["USDA Organic"]),
            farming_methods: strings(&["Crop Rotation", "Cover Cropping"]),
            specialties: strings(&["Root Vegetables", "Apples"]),
            description: "Orchards and root crops in the Willamette Valley.".to_string(),
        },
        Farmer {
            id: FarmerId::new("f3"),
            name: "Aiko Tanaka".to_string(),
            farm_name: "Farm Fresh Co.".to_string(),
            farm_size: "30 acres".to_string(),
            location: "Washington, USA".to_string(),
            verified: true,
            rating: 4.7,
            certifications: strings(&["GAP Certified"]),
            farming_methods: strings(&["Hydroponics"]),
            specialties: strings(&["Leafy Greens", "Herbs"]),
            description: "Greenhouse greens and herbs harvested to order.".to_string(),
        },
        Farmer {
            id: FarmerId::new("f4"),
            name: "Robert Hill".to_string(),
            farm_name: "Harvest Hills".to_string(),
            farm_size: "400 acres".to_string(),
            location: "Texas, USA".to_string(),
            verified: false,
            rating: 4.5,
            certifications: Vec::new(),
            farming_methods: strings(&["Conventional", "No-Till"]),
            specialties: strings(&["Corn", "Grains"]),
            description: "Row crops and grains from the Texas Hill Country.".to_string(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: ProductCategory,
    description: &str,
    price_cents: i64,
    unit: &str,
    quantity: u32,
    farmer_id: &str,
    quality: QualityGrade,
    harvest_date: NaiveDate,
    shelf_life_days: u64,
    availability: Availability,
    location: &str,
    rating: f64,
    reviews: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category,
        description: description.to_string(),
        price: Money::usd(price_cents),
        unit: unit.to_string(),
        quantity,
        images: vec![format!("/assets/products/{}.jpg", id)],
        farmer_id: FarmerId::new(farmer_id),
        quality,
        harvest_date,
        expiry_date: harvest_date + chrono::Days::new(shelf_life_days),
        availability,
        seasonal: availability == Availability::Seasonal,
        location: location.to_string(),
        rating,
        reviews,
    }
}

fn products() -> Vec<Product> {
    use Availability::*;
    use ProductCategory::*;
    use QualityGrade::*;

    vec![
        product(
            "1",
            "Organic Tomatoes",
            Vegetables,
            "Vine-ripened heirloom tomatoes, picked at peak flavor.",
            250,
            "kg",
            200,
            "f1",
            Organic,
            date(2024, 1, 14),
            10,
            InStock,
            "California, USA",
            4.8,
            124,
        ),
        product(
            "2",
            "Fresh Carrots",
            Vegetables,
            "Sweet, crunchy carrots pulled from cool Oregon soil.",
            180,
            "kg",
            150,
            "f2",
            Standard,
            date(2024, 1, 12),
            21,
            InStock,
            "Oregon, USA",
            4.6,
            89,
        ),
        product(
            "3",
            "Crisp Lettuce",
            Vegetables,
            "Hydroponic butterhead lettuce, washed and ready.",
            320,
            "kg",
            80,
            "f3",
            Premium,
            date(2024, 1, 15),
            7,
            InStock,
            "Washington, USA",
            4.7,
            56,
        ),
        product(
            "4",
            "Sweet Corn",
            Vegetables,
            "Bicolor sweet corn, best grilled the day it arrives.",
            300,
            "dozen",
            150,
            "f4",
            Standard,
            date(2024, 1, 10),
            5,
            Seasonal,
            "Texas, USA",
            4.5,
            42,
        ),
        product(
            "5",
            "Fresh Apples",
            Fruits,
            "Crisp Honeycrisp apples from a high-elevation orchard.",
            240,
            "kg",
            300,
            "f2",
            Premium,
            date(2024, 1, 8),
            60,
            InStock,
            "Oregon, USA",
            4.9,
            210,
        ),
        product(
            "6",
            "Organic Strawberries",
            Fruits,
            "Small-batch strawberries grown without synthetic pesticides.",
            450,
            "kg",
            0,
            "f1",
            Organic,
            date(2024, 1, 13),
            4,
            OutOfStock,
            "California, USA",
            4.8,
            98,
        ),
        product(
            "7",
            "Whole Wheat Grain",
            Grains,
            "Stone-ready hard red winter wheat berries.",
            120,
            "kg",
            1000,
            "f4",
            Standard,
            date(2023, 12, 20),
            180,
            InStock,
            "Texas, USA",
            4.3,
            31,
        ),
        product(
            "8",
            "Fresh Basil",
            Herbs,
            "Fragrant Genovese basil cut the morning it ships.",
            600,
            "kg",
            25,
            "f3",
            Organic,
            date(2024, 1, 15),
            5,
            InStock,
            "Washington, USA",
            4.7,
            27,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sizes() {
        let catalog = catalog();
        assert_eq!(catalog.farmers().len(), 4);
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_expiry_follows_harvest() {
        for product in catalog().products() {
            assert!(product.expiry_date > product.harvest_date, "{}", product.name);
        }
    }

    #[test]
    fn test_seeded_cart_matches_reference_scenario() {
        let catalog = catalog();
        let cart = seeded_cart(&catalog);
        assert_eq!(cart.item_count(), 6);
        assert_eq!(cart.subtotal().amount_cents, 1430);
    }

    #[test]
    fn test_seeded_cart_follows_requested_currency() {
        let catalog = catalog();
        let cart = seeded_cart_in(&catalog, Currency::EUR);
        assert_eq!(cart.currency(), Currency::EUR);
        // Sample prices are USD
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero(Currency::EUR));

        let mut products = catalog.products().to_vec();
        for product in &mut products {
            product.price.currency = Currency::EUR;
        }
        let euro = Catalog::new(catalog.farmers().to_vec(), products).unwrap();
        let cart = seeded_cart_in(&euro, Currency::EUR);
        assert_eq!(cart.item_count(), 6);
        assert_eq!(cart.subtotal(), Money::new(1430, Currency::EUR));
    }
}
