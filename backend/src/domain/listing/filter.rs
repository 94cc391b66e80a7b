//! Filter dimensions applied after the search text.

use serde::{Deserialize, Serialize};

use super::{DiscriminatorField, FlagField, Listable, NumericField};

/// One filter dimension of a listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Filter {
    /// Keep records whose discriminator equals `value`.
    Equals {
        /// Field to compare.
        field: DiscriminatorField,
        /// Exact value to match.
        value: String,
    },
    /// Keep records where the flag is set.
    Flag {
        /// Flag that must be `true`.
        field: FlagField,
    },
    /// Keep records whose numeric field lies within the inclusive bounds.
    ///
    /// Bounds are not reordered: `min > max` matches nothing.
    Range {
        /// Field to compare.
        field: NumericField,
        /// Inclusive lower bound.
        #[serde(default)]
        min: Option<i64>,
        /// Inclusive upper bound.
        #[serde(default)]
        max: Option<i64>,
    },
}

impl Filter {
    /// Exact-match filter on a discriminator.
    pub fn equals(field: DiscriminatorField, value: impl Into<String>) -> Self {
        Self::Equals {
            field,
            value: value.into(),
        }
    }

    /// Flag filter.
    pub fn flag(field: FlagField) -> Self {
        Self::Flag { field }
    }

    /// Inclusive range filter.
    pub fn range(field: NumericField, min: Option<i64>, max: Option<i64>) -> Self {
        Self::Range { field, min, max }
    }

    pub(super) fn accepts<T: Listable>(&self, item: &T) -> bool {
        match self {
            Self::Equals { field, value } => item.has_discriminator(*field, value),
            Self::Flag { field } => item.flag(*field),
            Self::Range { field, min, max } => item.numeric(*field).is_some_and(|value| {
                min.is_none_or(|lower| value >= lower) && max.is_none_or(|upper| value <= upper)
            }),
        }
    }
}
