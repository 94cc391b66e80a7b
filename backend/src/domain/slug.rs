//! Slug normalisation and validation for catalogue entities.
//!
//! Slugs are non-empty identifiers composed of lowercase ASCII letters and
//! digits separated by single hyphens. They are derived from display names
//! with [`normalize_slug`] and used both in page paths and as natural keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collation::turkish_lowercase;

/// Map a Turkish letter to its closest ASCII equivalent.
const fn transliterate(ch: char) -> char {
    match ch {
        'ğ' | 'Ğ' => 'g',
        'ü' | 'Ü' => 'u',
        'ş' | 'Ş' => 's',
        'ı' | 'İ' => 'i',
        'ö' | 'Ö' => 'o',
        'ç' | 'Ç' => 'c',
        other => other,
    }
}

/// Derive a URL-safe slug from a human-entered title.
///
/// Characters outside ASCII letters and digits are dropped after the
/// Turkish letters are transliterated, whitespace runs become one hyphen,
/// and the result never starts, ends, or doubles a hyphen. Inputs with no
/// usable characters produce an empty string.
///
/// # Examples
/// ```
/// use storefront::domain::normalize_slug;
///
/// assert_eq!(normalize_slug("Şık Elbise Çanta"), "sik-elbise-canta");
/// assert_eq!(normalize_slug("  Kış   2024  "), "kis-2024");
/// assert_eq!(normalize_slug("!!!???"), "");
/// ```
pub fn normalize_slug(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    let kept = input
        .chars()
        .flat_map(turkish_lowercase)
        .map(transliterate)
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace() || *ch == '-');

    for ch in kept {
        if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
            continue;
        }
        if pending_separator && !slug.is_empty() {
            slug.push('-');
        }
        pending_separator = false;
        slug.push(ch);
    }

    slug
}

/// Return `true` when `value` is a valid, non-empty slug.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// Error returned by [`Slug::new`] for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("slug '{value}' must use lowercase ASCII letters and digits separated by single hyphens")]
pub struct SlugValidationError {
    value: String,
}

/// Validated slug.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate and wrap an existing slug.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugValidationError> {
        let value = value.into();
        if !is_valid_slug(&value) {
            return Err(SlugValidationError { value });
        }
        Ok(Self(value))
    }

    /// Derive a slug from a display name.
    ///
    /// Returns an error when the name contains nothing that survives
    /// normalisation.
    pub fn from_title(title: &str) -> Result<Self, SlugValidationError> {
        Self::new(normalize_slug(title))
    }

    /// Borrow the slug text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Editing state of a slug input tied to a name input.
///
/// While the slug has not been edited by hand it tracks the name; the first
/// manual edit freezes it until [`SlugField::reset`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugField {
    value: String,
    source_name: String,
    manual: bool,
}

impl SlugField {
    /// Start tracking the given name.
    pub fn for_name(name: &str) -> Self {
        let mut field = Self::default();
        field.sync_with_name(name);
        field
    }

    /// Start from a slug that was already persisted; it stays frozen.
    pub fn persisted(slug: &Slug) -> Self {
        Self {
            value: slug.as_str().to_owned(),
            source_name: String::new(),
            manual: true,
        }
    }

    /// Record a name change, recomputing the slug unless it is frozen.
    pub fn sync_with_name(&mut self, name: &str) {
        name.clone_into(&mut self.source_name);
        if !self.manual {
            self.value = normalize_slug(name);
        }
    }

    /// Record a direct edit of the slug input and freeze it.
    pub fn edit(&mut self, raw: &str) {
        raw.clone_into(&mut self.value);
        self.manual = true;
    }

    /// Drop the manual override and follow the last seen name again.
    pub fn reset(&mut self) {
        self.manual = false;
        self.value = normalize_slug(&self.source_name);
    }

    /// Current slug text, which may be invalid after a manual edit.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Whether the slug was edited by hand.
    pub fn is_manual(&self) -> bool {
        self.manual
    }

    /// Validate the current text as a slug.
    pub fn to_slug(&self) -> Result<Slug, SlugValidationError> {
        Slug::new(self.value.clone())
    }
}
