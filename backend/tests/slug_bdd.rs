//! Behavioural tests for the slug field used by admin record forms.
//!
//! These scenarios cover automatic derivation from the name, manual
//! overrides, resets, and persisted slugs.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use storefront::domain::{Slug, SlugField};

/// Test world holding the slug field under edit.
#[derive(Default, ScenarioState)]
struct World {
    field: Slot<SlugField>,
}

impl World {
    fn field(&self) -> SlugField {
        self.field.get().expect("slug field should be set")
    }

    fn update(&self, change: impl FnOnce(&mut SlugField)) {
        let mut field = self.field();
        change(&mut field);
        self.field.set(field);
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a new record form")]
fn a_new_record_form(world: &World) {
    world.field.set(SlugField::for_name(""));
}

#[given("an existing record with the slug {slug}")]
fn an_existing_record_with_the_slug(world: &World, slug: String) {
    let slug = Slug::new(slug).expect("fixture slug is valid");
    world.field.set(SlugField::persisted(&slug));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the admin types the name {name}")]
fn the_admin_types_the_name(world: &World, name: String) {
    world.update(|field| field.sync_with_name(&name));
}

#[when("the admin edits the slug to {slug}")]
fn the_admin_edits_the_slug(world: &World, slug: String) {
    world.update(|field| field.edit(&slug));
}

#[when("the admin resets the slug")]
fn the_admin_resets_the_slug(world: &World) {
    world.update(SlugField::reset);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the slug reads {expected}")]
fn the_slug_reads(world: &World, expected: String) {
    assert_eq!(world.field().value(), expected);
}

#[then("the slug is blank")]
fn the_slug_is_blank(world: &World) {
    assert!(world.field().value().is_empty());
}

#[then("the slug follows the name")]
fn the_slug_follows_the_name(world: &World) {
    assert!(!world.field().is_manual());
}

#[then("the slug is marked as manual")]
fn the_slug_is_marked_as_manual(world: &World) {
    assert!(world.field().is_manual());
}

#[then("the slug cannot be saved")]
fn the_slug_cannot_be_saved(world: &World) {
    assert!(world.field().to_slug().is_err());
}

// ============================================================================
// Scenarios
// ============================================================================

#[scenario(
    path = "tests/features/slug.feature",
    name = "Slug follows the name while untouched"
)]
fn slug_follows_the_name_while_untouched(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/slug.feature",
    name = "Manual edit freezes the slug"
)]
fn manual_edit_freezes_the_slug(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/slug.feature",
    name = "Resetting the slug follows the latest name again"
)]
fn resetting_the_slug_follows_the_latest_name_again(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/slug.feature",
    name = "Persisted slugs do not change when the record is renamed"
)]
fn persisted_slugs_do_not_change_when_renamed(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/slug.feature",
    name = "Names without letters or digits produce an empty slug"
)]
fn names_without_letters_or_digits_produce_an_empty_slug(world: World) {
    let _ = world;
}
