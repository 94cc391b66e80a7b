//! In-memory filter, sort, and paginate pipeline for catalogue listings.
//!
//! Storefront and admin list screens hold the last fetched snapshot of a
//! collection and re-run [`filter_and_sort`] whenever the search box, a
//! dropdown, or the sort selector changes. The pipeline borrows the source
//! slice immutably and returns a fresh ordered vector of references, so the
//! fetched data is never reordered or edited in place.
//!
//! Matching rules:
//! - the search text is a case-insensitive substring match, OR-ed across
//!   the configured text fields;
//! - each [`Filter`] is a separate dimension and every dimension must pass;
//! - sorting is stable, so equal keys keep their source order.

use chrono::{DateTime, Utc};
use pagination::{Page, PageRequest};

mod filter;
mod query;
mod sort;


pub use filter::Filter;
pub use query::ListingQuery;
pub use sort::{SortKey, SortKeyParseError};

use serde::{Deserialize, Serialize};

/// Free-text fields the search box can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    /// Display name or title.
    Name,
    /// URL slug.
    Slug,
    /// Description, excerpt, or subtitle.
    Description,
}

/// Fields compared by exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscriminatorField {
    /// Category slug of a product or post.
    Category,
    /// Collection slug a product belongs to.
    Collection,
    /// Publication status of a post.
    Status,
    /// Parent slug of a category.
    Parent,
}

/// Boolean flags a listing can be narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagField {
    /// At least one unit in stock.
    InStock,
    /// Marked as featured by an editor.
    Featured,
    /// Has a compare-at price above the current price.
    OnSale,
    /// Visible on the storefront.
    Active,
    /// Published blog post.
    Published,
}

/// Numeric fields used by range filters and numeric sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    /// Price in minor units.
    Price,
    /// Units in stock.
    Stock,
    /// Manual ordering position.
    DisplayOrder,
}

/// Read access to the fields the listing pipeline filters and sorts on.
///
/// Records return `None` or `false` for fields they do not have; such
/// records fail filters on that field and sort after records that have it.
pub trait Listable {
    /// Value of a free-text field.
    fn text(&self, field: TextField) -> Option<&str>;

    /// Whether the discriminator `field` equals `value`, or for multi-valued
    /// fields, whether `value` is one of its entries.
    fn has_discriminator(&self, field: DiscriminatorField, value: &str) -> bool;

    /// Value of a boolean flag.
    fn flag(&self, field: FlagField) -> bool;

    /// Value of a numeric field.
    fn numeric(&self, field: NumericField) -> Option<i64>;

    /// Creation timestamp used by the newest and oldest sorts.
    fn created_at(&self) -> DateTime<Utc>;
}

/// Filter and order `items` according to `query`.
///
/// # Examples
/// ```
/// use storefront::domain::listing::{ListingQuery, SortKey, filter_and_sort};
/// use storefront::domain::catalogue::Product;
///
/// let products: Vec<Product> = Vec::new();
/// let query = ListingQuery::default().with_search("elbise").sorted_by(SortKey::PriceAscending);
/// assert!(filter_and_sort(&products, &query).is_empty());
/// ```
pub fn filter_and_sort<'a, T: Listable>(items: &'a [T], query: &ListingQuery) -> Vec<&'a T> {
    let needle = query.folded_search();
    let mut matched: Vec<&T> = items
        .iter()
        .filter(|item| query.matches(*item, needle.as_deref()))
        .collect();
    matched.sort_by(|left, right| query.sort.compare(*left, *right, query.locale));
    matched
}

/// Run [`filter_and_sort`] and return the requested page of the result.
pub fn list_page<'a, T: Listable>(
    items: &'a [T],
    query: &ListingQuery,
    request: PageRequest,
) -> Page<&'a T> {
    Page::from_items(filter_and_sort(items, query), request)
}
