//! Catalogue records shown on the storefront and edited in the admin console.
//!
//! Every record is built from a serialisable draft, the payload an admin form
//! submits. Constructors validate the whole draft and report every failing
//! field through [`ValidationErrors`](crate::domain::ValidationErrors).
//! Deserialising a record goes through its draft, so a snapshot file cannot
//! smuggle in values a form would reject.

mod blog_post;
mod category;
mod collection;
mod price;
mod product;

#[cfg(test)]
mod tests;

pub use blog_post::{BlogPost, BlogPostDraft, PostStatus};
pub use category::{Category, CategoryDraft};
pub use collection::{Collection, CollectionDraft};
pub use price::{NegativePriceError, Price};
pub use product::{Product, ProductDraft};

pub(crate) const NAME_MAX: usize = 120;
pub(crate) const DESCRIPTION_MAX: usize = 5_000;

pub(crate) const fn default_true() -> bool {
    true
}
