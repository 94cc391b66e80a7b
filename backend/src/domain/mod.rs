//! Domain primitives and records.
//!
//! Purpose: define the validated storefront records and the pure helpers
//! that list screens run over them. Nothing here performs I/O; snapshot
//! loading and configuration live at the crate root.
//!
//! Public surface:
//! - `normalize_slug`, `Slug`, `SlugField`: slug derivation and editing state.
//! - `Locale`: Turkish-aware case folding and collation.
//! - `ValidationErrors`: every failing field of a rejected draft.
//! - `catalogue`, `content`: validated records built from drafts.
//! - `listing`: the filter, sort, and paginate pipeline.
//! - `SiteSetting`, `UserRole`: typed settings and admin roles.

pub mod access;
pub mod catalogue;
pub mod collation;
pub mod content;
pub mod listing;
pub mod settings;
pub mod slug;
pub mod validation;

pub use self::access::{Permission, UserRole, UserRoleParseError};
pub use self::collation::{Locale, LocaleParseError};
pub use self::settings::{SettingKind, SettingValue, SiteSetting, SiteSettingDraft};
pub use self::slug::{Slug, SlugField, SlugValidationError, is_valid_slug, normalize_slug};
pub use self::validation::{FieldError, FieldErrorKind, ValidationErrors};
