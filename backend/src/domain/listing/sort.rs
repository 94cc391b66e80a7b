//! Sort keys offered by list screens.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Listable, NumericField, TextField};
use crate::domain::collation::Locale;

/// Closed set of listing orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Most recently created first.
    #[default]
    #[serde(rename = "newest")]
    Newest,
    /// Oldest first.
    #[serde(rename = "oldest")]
    Oldest,
    /// Cheapest first; records without a price go last.
    #[serde(rename = "price_asc")]
    PriceAscending,
    /// Most expensive first; records without a price go last.
    #[serde(rename = "price_desc")]
    PriceDescending,
    /// Name A to Z in the query locale.
    #[serde(rename = "name_asc")]
    NameAscending,
    /// Name Z to A in the query locale.
    #[serde(rename = "name_desc")]
    NameDescending,
    /// Manual display order, lowest first.
    #[serde(rename = "display_order")]
    DisplayOrder,
}

const SORT_KEYS: [(SortKey, &str); 7] = [
    (SortKey::Newest, "newest"),
    (SortKey::Oldest, "oldest"),
    (SortKey::PriceAscending, "price_asc"),
    (SortKey::PriceDescending, "price_desc"),
    (SortKey::NameAscending, "name_asc"),
    (SortKey::NameDescending, "name_desc"),
    (SortKey::DisplayOrder, "display_order"),
];

/// Error returned when a sort key name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown sort key '{name}' (expected one of newest, oldest, price_asc, price_desc, name_asc, name_desc, display_order)"
)]
pub struct SortKeyParseError {
    name: String,
}

impl FromStr for SortKey {
    type Err = SortKeyParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = name.trim();
        SORT_KEYS
            .iter()
            .find(|(_, label)| *label == wanted)
            .map(|(key, _)| *key)
            .ok_or_else(|| SortKeyParseError {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = SORT_KEYS
            .iter()
            .find(|(key, _)| key == self)
            .map_or("newest", |(_, label)| label);
        f.write_str(label)
    }
}

impl SortKey {
    /// Compare two records for this key. Ties return `Equal` so a stable
    /// sort keeps source order.
    pub fn compare<T: Listable>(self, left: &T, right: &T, locale: Locale) -> Ordering {
        match self {
            Self::Newest => right.created_at().cmp(&left.created_at()),
            Self::Oldest => left.created_at().cmp(&right.created_at()),
            Self::PriceAscending => by_number(left, right, NumericField::Price, true),
            Self::PriceDescending => by_number(left, right, NumericField::Price, false),
            Self::NameAscending => by_name(left, right, locale),
            Self::NameDescending => by_name(right, left, locale),
            Self::DisplayOrder => by_number(left, right, NumericField::DisplayOrder, true),
        }
    }
}

fn by_number<T: Listable>(left: &T, right: &T, field: NumericField, ascending: bool) -> Ordering {
    match (left.numeric(field), right.numeric(field)) {
        (Some(a), Some(b)) if ascending => a.cmp(&b),
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_name<T: Listable>(left: &T, right: &T, locale: Locale) -> Ordering {
    let left_name = left.text(TextField::Name).unwrap_or_default();
    let right_name = right.text(TextField::Name).unwrap_or_default();
    locale.compare(left_name, right_name)
}
