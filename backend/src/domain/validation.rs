//! Field-level validation shared by every admin form.
//!
//! Drafts are plain serialisable records. Constructors run every check
//! against a [`FieldValidator`] and report all failures together, so a form
//! can highlight each bad field in one round trip.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use url::Url;

use super::slug::{Slug, is_valid_slug, normalize_slug};

/// Reason a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FieldErrorKind {
    #[error("must not be empty")]
    Empty,
    #[error("must use lowercase ASCII letters and digits separated by single hyphens")]
    InvalidSlug,
    #[error("must not be negative (got {value})")]
    Negative { value: i64 },
    #[error("must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
    #[error("must be a valid email address")]
    InvalidEmail,
    #[error("must be a valid phone number")]
    InvalidPhone,
    #[error("must be an absolute http(s) URL")]
    InvalidUrl,
    #[error("must be an absolute http(s) URL or a site path starting with '/'")]
    InvalidLink,
    #[error("must be greater than the price")]
    CompareAtNotAbovePrice,
    #[error("{message}")]
    InvalidValue { message: String },
}

/// A failing field and the reason it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field} {kind}")]
pub struct FieldError {
    field: &'static str,
    #[serde(flatten)]
    kind: FieldErrorKind,
}

impl FieldError {
    /// Build a field error.
    pub fn new(field: &'static str, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// Dotted path of the failing field, for example `product.slug`.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Why the field failed.
    pub fn kind(&self) -> &FieldErrorKind {
        &self.kind
    }
}

/// Every field error collected while validating one draft.
///
/// Never empty: constructors return `Ok` when no field failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            error.fmt(f)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Failing fields in the order they were checked.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Whether `field` is among the failures.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    /// Kind reported for `field`, if it failed.
    pub fn kind_of(&self, field: &str) -> Option<&FieldErrorKind> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(FieldError::kind)
    }
}

/// Accumulates field errors while a draft is checked.
#[derive(Debug, Default)]
pub(crate) struct FieldValidator {
    errors: Vec<FieldError>,
}

impl FieldValidator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, field: &'static str, kind: FieldErrorKind) {
        self.errors.push(FieldError::new(field, kind));
    }

    /// Trim `value` and require it to be non-empty and at most `max` chars.
    pub(crate) fn required_text(&mut self, field: &'static str, value: &str, max: usize) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.push(field, FieldErrorKind::Empty);
        } else {
            self.max_length(field, trimmed, max);
        }
        trimmed.to_owned()
    }

    /// Trim an optional value, mapping blank input to `None`.
    pub(crate) fn optional_text(
        &mut self,
        field: &'static str,
        value: Option<&str>,
        max: usize,
    ) -> Option<String> {
        let trimmed = value.map(str::trim).filter(|text| !text.is_empty())?;
        self.max_length(field, trimmed, max);
        Some(trimmed.to_owned())
    }

    pub(crate) fn max_length(&mut self, field: &'static str, value: &str, max: usize) {
        let actual = value.chars().count();
        if actual > max {
            self.push(field, FieldErrorKind::TooLong { max, actual });
        }
    }

    pub(crate) fn non_negative(&mut self, field: &'static str, value: i64) {
        if value < 0 {
            self.push(field, FieldErrorKind::Negative { value });
        }
    }

    /// Use the explicit slug when given, otherwise derive one from `title`.
    pub(crate) fn slug_or_title(
        &mut self,
        field: &'static str,
        explicit: Option<&str>,
        title: &str,
    ) -> Option<Slug> {
        let candidate = match explicit.map(str::trim).filter(|text| !text.is_empty()) {
            Some(raw) => raw.to_owned(),
            None => normalize_slug(title),
        };
        self.slug(field, candidate)
    }

    pub(crate) fn slug(&mut self, field: &'static str, value: String) -> Option<Slug> {
        if !is_valid_slug(&value) {
            self.push(field, FieldErrorKind::InvalidSlug);
            return None;
        }
        Slug::new(value).ok()
    }

    pub(crate) fn optional_slug(&mut self, field: &'static str, value: Option<&str>) -> Option<Slug> {
        let raw = value.map(str::trim).filter(|text| !text.is_empty())?;
        self.slug(field, raw.to_owned())
    }

    /// Require an absolute `http` or `https` URL.
    pub(crate) fn absolute_url(&mut self, field: &'static str, value: &str) -> String {
        let trimmed = value.trim();
        if !is_absolute_http_url(trimmed) {
            self.push(field, FieldErrorKind::InvalidUrl);
        }
        trimmed.to_owned()
    }

    pub(crate) fn optional_absolute_url(
        &mut self,
        field: &'static str,
        value: Option<&str>,
    ) -> Option<String> {
        let trimmed = value.map(str::trim).filter(|text| !text.is_empty())?;
        Some(self.absolute_url(field, trimmed))
    }

    /// Accept an absolute `http(s)` URL or a site-relative path.
    pub(crate) fn link(&mut self, field: &'static str, value: &str) -> String {
        let trimmed = value.trim();
        if !(is_site_path(trimmed) || is_absolute_http_url(trimmed)) {
            self.push(field, FieldErrorKind::InvalidLink);
        }
        trimmed.to_owned()
    }

    /// Return `value` when no field failed, otherwise every collected error.
    pub(crate) fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationErrors> {
        if !self.errors.is_empty() {
            return Err(ValidationErrors(self.errors));
        }
        build().ok_or_else(|| {
            ValidationErrors(vec![FieldError::new(
                "draft",
                FieldErrorKind::InvalidValue {
                    message: "draft failed validation".to_owned(),
                },
            )])
        })
    }
}

pub(crate) fn is_absolute_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}

pub(crate) fn is_site_path(value: &str) -> bool {
    value.starts_with('/')
        && !value.starts_with("//")
        && !value.chars().any(char::is_whitespace)
}
