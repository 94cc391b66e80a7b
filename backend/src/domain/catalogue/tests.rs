//! Unit tests for catalogue record construction.

use chrono::{DateTime, TimeZone, Utc};
use rstest::{fixture, rstest};
use uuid::Uuid;

use super::*;
use crate::domain::listing::{Filter, FlagField, Listable, ListingQuery, filter_and_sort};
use crate::domain::validation::FieldErrorKind;

fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 5, 10, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn product_draft() -> ProductDraft {
    ProductDraft {
        id: Uuid::new_v4(),
        name: "Şık Saten Elbise".to_owned(),
        slug: None,
        description: "Gece davetleri için saten elbise".to_owned(),
        price: 189_900,
        compare_at_price: Some(229_900),
        stock: 4,
        category: "elbiseler".to_owned(),
        collections: vec!["kis-2024".to_owned()],
        featured: true,
        images: vec!["https://cdn.example.test/saten.jpg".to_owned()],
        created_at: timestamp(),
    }
}

#[rstest]
fn product_derives_slug_from_name(product_draft: ProductDraft) {
    let product = Product::new(product_draft).expect("valid product");

    assert_eq!(product.slug().as_str(), "sik-saten-elbise");
    assert!(product.in_stock());
    assert!(product.on_sale());
    assert_eq!(product.price().to_display_string(), "1.899,00 TL");
}

#[rstest]
fn product_keeps_explicit_slug(mut product_draft: ProductDraft) {
    product_draft.slug = Some("saten-gece-elbisesi".to_owned());
    let product = Product::new(product_draft).expect("valid product");

    assert_eq!(product.slug().as_str(), "saten-gece-elbisesi");
}

#[rstest]
fn product_reports_every_invalid_field(mut product_draft: ProductDraft) {
    product_draft.name = "   ".to_owned();
    product_draft.slug = Some("Bad Slug".to_owned());
    product_draft.price = -5;
    product_draft.compare_at_price = None;
    product_draft.stock = -1;
    product_draft.category = "Elbiseler".to_owned();
    product_draft.images = vec!["/local.jpg".to_owned()];

    let errors = Product::new(product_draft).expect_err("invalid product");

    for field in [
        "product.name",
        "product.slug",
        "product.price",
        "product.stock",
        "product.category",
        "product.images",
    ] {
        assert!(errors.has_field(field), "missing error for {field}: {errors}");
    }
    assert_eq!(errors.errors().len(), 6);
}

#[rstest]
fn product_rejects_compare_at_price_not_above_price(mut product_draft: ProductDraft) {
    product_draft.compare_at_price = Some(product_draft.price);

    let errors = Product::new(product_draft).expect_err("compare-at equals price");
    assert_eq!(
        errors.kind_of("product.compare_at_price"),
        Some(&FieldErrorKind::CompareAtNotAbovePrice)
    );
}

#[rstest]
fn product_round_trips_through_json(product_draft: ProductDraft) {
    let product = Product::new(product_draft).expect("valid product");
    let json = serde_json::to_string(&product).expect("serialise");
    let decoded: Product = serde_json::from_str(&json).expect("deserialise");

    assert_eq!(decoded, product);
}

#[rstest]
fn product_lacks_active_and_published_flags(product_draft: ProductDraft) {
    let product = Product::new(product_draft).expect("valid product");

    assert!(!product.flag(FlagField::Active));
    assert!(!product.flag(FlagField::Published));

    let products = vec![product];
    let query = ListingQuery::default().with_filter(Filter::flag(FlagField::Published));
    assert!(filter_and_sort(&products, &query).is_empty());
}

#[rstest]
fn product_deserialisation_rejects_invalid_payload() {
    let json = r#"{
        "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        "name": "Kemer",
        "price": -1,
        "category": "aksesuar",
        "createdAt": "2024-11-05T10:00:00Z"
    }"#;

    let err = serde_json::from_str::<Product>(json).expect_err("negative price");
    assert!(err.to_string().contains("product.price must not be negative"));
}

#[rstest]
fn category_rejects_self_parent() {
    let errors = Category::new(CategoryDraft {
        id: Uuid::new_v4(),
        name: "Elbiseler".to_owned(),
        slug: None,
        description: None,
        parent: Some("elbiseler".to_owned()),
        image: None,
        display_order: 1,
        active: true,
        created_at: timestamp(),
    })
    .expect_err("self parent");

    assert!(errors.has_field("category.parent"));
}

#[rstest]
fn category_rejects_name_without_slug_characters() {
    let errors = Category::new(CategoryDraft {
        id: Uuid::new_v4(),
        name: "???".to_owned(),
        slug: None,
        description: None,
        parent: None,
        image: None,
        display_order: 0,
        active: true,
        created_at: timestamp(),
    })
    .expect_err("no slug can be derived");

    assert_eq!(
        errors.kind_of("category.slug"),
        Some(&FieldErrorKind::InvalidSlug)
    );
}

#[rstest]
fn collection_defaults_to_active_when_deserialised() {
    let json = r#"{
        "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        "name": "Kış 2024",
        "createdAt": "2024-11-05T10:00:00Z"
    }"#;

    let collection: Collection = serde_json::from_str(json).expect("valid collection");
    assert!(collection.is_active());
    assert_eq!(collection.slug().as_str(), "kis-2024");
}

#[rstest]
fn published_post_requires_publication_date() {
    let errors = BlogPost::new(BlogPostDraft {
        id: Uuid::new_v4(),
        title: "Sonbahar Stil Rehberi".to_owned(),
        slug: None,
        excerpt: None,
        body: "Katmanlı giyim önerileri.".to_owned(),
        status: PostStatus::Published,
        category: None,
        tags: vec!["stil".to_owned()],
        cover_image: None,
        featured: false,
        published_at: None,
        created_at: timestamp(),
    })
    .expect_err("missing published_at");

    assert_eq!(
        errors.kind_of("post.published_at"),
        Some(&FieldErrorKind::Empty)
    );
}

#[rstest]
fn post_status_uses_screaming_case_on_the_wire() {
    let status: PostStatus = serde_json::from_str("\"PUBLISHED\"").expect("valid status");
    assert_eq!(status, PostStatus::Published);
    assert_eq!(status.to_string(), "published");
}
