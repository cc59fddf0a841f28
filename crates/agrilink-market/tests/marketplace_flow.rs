//! End-to-end marketplace flows over the sample catalog.

use agrilink_market::catalog::sample;
use agrilink_market::prelude::*;

#[test]
fn browse_then_checkout() {
    let catalog = sample::catalog();

    let filters = FilterState {
        category: Criterion::Active(ProductCategory::Vegetables),
        availability: Criterion::Active(Availability::InStock),
        ..Default::default()
    };
    let results = SearchResults::run(&catalog, &filters, SortOption::PriceLow);
    let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Fresh Carrots", "Organic Tomatoes", "Crisp Lettuce"]);

    let mut cart = Cart::new();
    for product in &results.items {
        cart.add(product);
    }
    cart.set_quantity(&ProductId::new("1"), 3);
    cart.set_quantity(&ProductId::new("2"), 2);

    let summary = OrderSummary::calculate(&cart, Some("FRESH10"), &PricingPolicy::default());
    assert_eq!(summary.subtotal.display(), "$14.30");
    assert_eq!(summary.discount.display(), "$1.43");
    assert_eq!(summary.shipping.display(), "$5.99");
    assert_eq!(summary.tax.display(), "$1.03");
    assert_eq!(summary.total.display(), "$19.89");
}

#[test]
fn filtering_never_adds_products() {
    let catalog = sample::catalog();
    let searches = ["", "fresh", "organic", "valley", "zzz"];

    for search in searches {
        let filters = FilterState {
            search: search.to_string(),
            ..Default::default()
        };
        let all = filters.apply(&catalog);
        assert!(all.len() <= catalog.len());

        // Adding a criterion can only narrow
        let narrower = FilterState {
            organic_only: true,
            ..filters.clone()
        };
        let narrowed = narrower.apply(&catalog);
        assert!(narrowed.iter().all(|p| all.iter().any(|q| q.id == p.id)));
    }
}

#[test]
fn sorting_is_a_permutation() {
    let catalog = sample::catalog();
    let all: Vec<&Product> = catalog.products().iter().collect();

    for sort in SortOption::ALL {
        let sorted = sort.sort(&all);
        let mut before: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        let mut after: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after, "{} dropped or duplicated products", sort.as_str());
    }
}

#[test]
fn unknown_sort_key_keeps_catalog_order() {
    let catalog = sample::catalog();
    let results = SearchResults::run(&catalog, &FilterState::default(), SortOption::parse("bogus"));
    let ids: Vec<&str> = results.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
}

#[test]
fn reset_restores_full_listing() {
    let catalog = sample::catalog();
    let mut filters = FilterState {
        search: "basil".to_string(),
        verified_only: true,
        price_range: PriceRange::clamped(100, 700),
        ..Default::default()
    };
    assert_eq!(filters.active_count(), 3);
    assert_eq!(filters.apply(&catalog).len(), 1);

    filters.reset();
    assert!(filters.is_default());
    assert_eq!(filters.apply(&catalog).len(), catalog.len());
}

#[test]
fn cart_survives_catalog_reload() {
    let catalog = sample::catalog();
    let cart = sample::seeded_cart(&catalog);

    let json = catalog.to_json_pretty().unwrap();
    let reloaded = Catalog::from_json(&json).unwrap();
    assert_eq!(reloaded, catalog);

    // The cart owns its snapshots and does not borrow the catalog
    drop(catalog);
    assert_eq!(cart.subtotal().amount_cents, 1430);
}

#[test]
fn buyer_and_farmer_dashboards() {
    let catalog = sample::catalog();
    let cart = sample::seeded_cart(&catalog);

    let mut favorites = Favorites::new();
    for id in ["5", "8", "5"] {
        favorites.toggle(&ProductId::new(id));
    }
    let buyer = BuyerOverview::new(&cart, &favorites);
    assert_eq!(buyer.cart_items, 6);
    assert_eq!(buyer.favorite_count, 1);

    let directory = FarmerDirectory::new(&catalog);
    for farmer in directory.farmers() {
        let overview = FarmerOverview::for_farmer(&catalog, &farmer.id).unwrap();
        assert_eq!(overview.product_count, catalog.products_by(&farmer.id).count());
        assert!(overview.in_stock_count <= overview.product_count);
    }
}

#[test]
fn registration_round_trip_through_json() {
    let json = r#"{
        "role": "farmer",
        "first_name": "Aiko",
        "last_name": "Tanaka",
        "email": "aiko@farmfresh.example",
        "phone": "555-0123",
        "location": "Washington, USA",
        "farm_name": "Farm Fresh Co.",
        "primary_crops": "Greens",
        "password": "pw",
        "confirm_password": "pw",
        "accepted_terms": true
    }"#;
    let form: Registration = serde_json::from_str(json).unwrap();
    assert_eq!(form.role(), Role::Farmer);

    let account = form.validate().unwrap();
    assert_eq!(account.display_name, "Farm Fresh Co.");
}
