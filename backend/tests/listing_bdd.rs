//! Behavioural tests for the catalogue listing pipeline.
//!
//! Scenarios run searches, filters, sorts, and pagination over the bundled
//! catalogue snapshot the way storefront list screens do.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::path::Path;

use pagination::{Page, PageRequest};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use storefront::CatalogueSnapshot;
use storefront::domain::catalogue::Product;
use storefront::domain::listing::{
    Filter, FlagField, ListingQuery, NumericField, SortKey, filter_and_sort, list_page,
};

/// Test world holding the snapshot and the latest listing outcome.
#[derive(Default, ScenarioState)]
struct World {
    snapshot: Slot<CatalogueSnapshot>,
    slugs: Slot<Vec<String>>,
    page: Slot<Page<String>>,
}

impl World {
    fn snapshot(&self) -> CatalogueSnapshot {
        self.snapshot.get().expect("snapshot should be loaded")
    }

    fn slugs(&self) -> Vec<String> {
        self.slugs.get().expect("a listing should have run")
    }

    fn page(&self) -> Page<String> {
        self.page.get().expect("a page should have been requested")
    }

    fn run(&self, query: &ListingQuery) {
        let snapshot = self.snapshot();
        let slugs = filter_and_sort(snapshot.products(), query)
            .into_iter()
            .map(slug_of)
            .collect();
        self.slugs.set(slugs);
    }
}

fn slug_of(product: &Product) -> String {
    product.slug().to_string()
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the bundled catalogue snapshot")]
fn the_bundled_catalogue_snapshot(world: &World) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalogue.json");
    let snapshot = CatalogueSnapshot::load(&path).expect("bundled snapshot should load");
    world.snapshot.set(snapshot);
}

// ============================================================================
// When steps
// ============================================================================

#[when("shoppers search for {text}")]
fn shoppers_search_for(world: &World, text: String) {
    world.run(&ListingQuery::default().with_search(text));
}

#[when("shoppers list in-stock products by ascending price")]
fn shoppers_list_in_stock_products_by_price(world: &World) {
    let query = ListingQuery::default()
        .with_filter(Filter::flag(FlagField::InStock))
        .sorted_by(SortKey::PriceAscending);
    world.run(&query);
}

#[when("shoppers list products priced from {min:i64} to {max:i64} by name")]
fn shoppers_list_products_in_price_range(world: &World, min: i64, max: i64) {
    let query = ListingQuery::default()
        .with_filter(Filter::range(NumericField::Price, Some(min), Some(max)))
        .sorted_by(SortKey::NameAscending);
    world.run(&query);
}

#[when("shoppers list all products by name")]
fn shoppers_list_all_products_by_name(world: &World) {
    world.run(&ListingQuery::default().sorted_by(SortKey::NameAscending));
}

#[when("shoppers open page {page:u32} with {per_page:u32} products per page")]
fn shoppers_open_page(world: &World, page: u32, per_page: u32) {
    let snapshot = world.snapshot();
    let request = PageRequest::new(page, per_page).expect("valid page request");
    let listed = list_page(snapshot.products(), &ListingQuery::default(), request).map(slug_of);
    world.page.set(listed);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the listing holds {count:usize} products")]
fn the_listing_holds(world: &World, count: usize) {
    assert_eq!(world.slugs().len(), count);
}

#[then("the slugs in order are {expected}")]
fn the_slugs_in_order_are(world: &World, expected: String) {
    let expected: Vec<String> = expected.split(", ").map(str::to_owned).collect();
    assert_eq!(world.slugs(), expected);
}

#[then("the page holds {count:usize} products out of {total:usize}")]
fn the_page_holds(world: &World, count: usize, total: usize) {
    let page = world.page();
    assert_eq!(page.items().len(), count);
    assert_eq!(page.total_items(), total);
}

#[then("the page has a previous page but no next page")]
fn the_page_has_previous_but_no_next(world: &World) {
    let page = world.page();
    assert!(page.has_previous());
    assert!(!page.has_next());
}

#[then("the snapshot still starts with {slug}")]
fn the_snapshot_still_starts_with(world: &World, slug: String) {
    let snapshot = world.snapshot();
    let first = snapshot.products().first().expect("snapshot has products");
    assert_eq!(first.slug().as_str(), slug);
}

// ============================================================================
// Scenarios
// ============================================================================

#[scenario(
    path = "tests/features/listing.feature",
    name = "Search folds Turkish capitals"
)]
fn search_folds_turkish_capitals(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/listing.feature",
    name = "Search matches any configured text field"
)]
fn search_matches_any_configured_text_field(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/listing.feature",
    name = "In-stock products sorted by price"
)]
fn in_stock_products_sorted_by_price(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/listing.feature",
    name = "Price range with Turkish name order"
)]
fn price_range_with_turkish_name_order(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/listing.feature",
    name = "Inverted price range matches nothing"
)]
fn inverted_price_range_matches_nothing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/listing.feature",
    name = "Names sort with the Turkish alphabet"
)]
fn names_sort_with_the_turkish_alphabet(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/listing.feature",
    name = "Later pages hold the remaining products"
)]
fn later_pages_hold_the_remaining_products(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/listing.feature",
    name = "Listing leaves the snapshot order untouched"
)]
fn listing_leaves_the_snapshot_order_untouched(world: World) {
    let _ = world;
}
