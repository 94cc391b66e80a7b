//! Serializable listing query assembled from list-screen controls.

use serde::{Deserialize, Serialize};

use super::{Filter, Listable, SortKey, TextField};
use crate::domain::collation::Locale;

fn default_search_fields() -> Vec<TextField> {
    vec![TextField::Name, TextField::Description]
}

/// Search text, filters, sort key, and locale for one listing evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingQuery {
    /// Case-insensitive substring to look for; blank matches everything.
    pub search: String,
    /// Fields the search text is matched against.
    pub search_fields: Vec<TextField>,
    /// Filter dimensions that must all pass.
    pub filters: Vec<Filter>,
    /// Output order.
    pub sort: SortKey,
    /// Locale used for case folding and name collation.
    pub locale: Locale,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            search_fields: default_search_fields(),
            filters: Vec::new(),
            sort: SortKey::default(),
            locale: Locale::default(),
        }
    }
}

impl ListingQuery {
    /// Replace the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Replace the fields searched by the search text.
    #[must_use]
    pub fn searching(mut self, fields: impl IntoIterator<Item = TextField>) -> Self {
        self.search_fields = fields.into_iter().collect();
        self
    }

    /// Add a filter dimension.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Replace the sort key.
    #[must_use]
    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Replace the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Folded search needle, or `None` when the search is blank.
    pub(super) fn folded_search(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| self.locale.fold_case(trimmed))
    }

    pub(super) fn matches<T: Listable>(&self, item: &T, needle: Option<&str>) -> bool {
        self.matches_search(item, needle)
            && self.filters.iter().all(|filter| filter.accepts(item))
    }

    fn matches_search<T: Listable>(&self, item: &T, needle: Option<&str>) -> bool {
        let Some(needle) = needle else {
            return true;
        };
        self.search_fields
            .iter()
            .filter_map(|field| item.text(*field))
            .any(|text| self.locale.fold_case(text).contains(needle))
    }
}
