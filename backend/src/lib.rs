//! Storefront library modules.
//!
//! `domain` holds the validated records and the pure slug and listing
//! helpers. `config` and `snapshot` supply the settings and data that the
//! `catalogue-query` binary feeds through them.

pub mod config;
pub mod domain;
pub mod snapshot;

pub use config::{SettingsError, StorefrontSettings};
pub use snapshot::{CatalogueSnapshot, SnapshotError};
