//! Admin-managed site content outside the product catalogue.
//!
//! Hero carousel slides, per-page SEO metadata, and contact form submissions
//! share the draft → validated record shape used by catalogue entities.

mod contact;
mod hero_slide;
mod seo;

pub use contact::{ContactMessage, ContactMessageDraft};
pub use hero_slide::{HeroSlide, HeroSlideDraft};
pub use seo::{SeoMetadata, SeoMetadataDraft};
