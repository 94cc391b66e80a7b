//! Locale-aware case folding and name collation.
//!
//! Storefront copy is written in Turkish, where dotted and dotless `i` are
//! distinct letters and `ç ğ ı ö ş ü` sort immediately after their base
//! letters. Raw code point order puts every one of those letters after `z`,
//! so listings sorted by name compare collation keys built here instead.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Turkish alphabet order, with `q`, `w`, and `x` slotted where they fall in
/// borrowed words.
const TURKISH_ALPHABET: [char; 32] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'ö',
    'p', 'q', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'w', 'x', 'y', 'z',
];

/// Locale used for case folding and name ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Turkish rules: dotted/dotless `i` folding and Turkish alphabet order.
    #[default]
    #[serde(rename = "tr", alias = "tr-TR")]
    Turkish,
    /// Locale-neutral rules: Unicode lowercasing and base-letter order.
    #[serde(rename = "root")]
    Root,
}

/// Error returned when a locale tag is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale '{tag}' (expected 'tr' or 'root')")]
pub struct LocaleParseError {
    tag: String,
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "tr" | "tr-tr" | "tr_tr" => Ok(Self::Turkish),
            "root" | "und" | "en" | "en-gb" | "en-us" => Ok(Self::Root),
            _ => Err(LocaleParseError {
                tag: tag.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Turkish => f.write_str("tr"),
            Self::Root => f.write_str("root"),
        }
    }
}

impl Locale {
    /// Lowercase `value` using this locale's case mapping.
    ///
    /// Input is composed to NFC first, so a letter typed as a base letter
    /// plus a combining mark folds the same as its precomposed form.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::Locale;
    ///
    /// assert_eq!(Locale::Turkish.fold_case("ŞIK İPEK"), "şık ipek");
    /// assert_eq!(Locale::Turkish.fold_case("C\u{327}anta"), "çanta");
    /// assert_eq!(Locale::Root.fold_case("IPEK"), "ipek");
    /// ```
    pub fn fold_case(self, value: &str) -> String {
        let composed = value.nfc();
        match self {
            Self::Turkish => composed.flat_map(turkish_lowercase).collect(),
            Self::Root => composed.collect::<String>().to_lowercase(),
        }
    }

    /// Compare two display names for ascending listing order.
    ///
    /// Names are compared by letter first, ignoring case and accents outside
    /// the locale alphabet. Remaining ties are broken by accent, then by case
    /// with the lowercase form first, then by code point order so the result
    /// is a total order.
    pub fn compare(self, left: &str, right: &str) -> Ordering {
        let left_composed: String = left.nfc().collect();
        let right_composed: String = right.nfc().collect();
        let left_folded = self.fold_case(&left_composed);
        let right_folded = self.fold_case(&right_composed);

        self.primary_key(&left_folded)
            .cmp(self.primary_key(&right_folded))
            .then_with(|| left_folded.cmp(&right_folded))
            .then_with(|| {
                let left_case = left_composed.chars().map(char::is_uppercase);
                left_case.cmp(right_composed.chars().map(char::is_uppercase))
            })
            .then_with(|| left_composed.cmp(&right_composed))
            .then_with(|| left.cmp(right))
    }

    fn primary_key(self, folded: &str) -> impl Iterator<Item = (u8, u32)> + '_ {
        folded
            .chars()
            .filter(|ch| !is_combining_mark(*ch))
            .map(move |ch| self.primary_weight(ch))
    }

    fn primary_weight(self, ch: char) -> (u8, u32) {
        if let Some(digit) = ch.to_digit(10) {
            return (1, digit);
        }
        match self {
            Self::Turkish => {
                if let Some(position) = TURKISH_ALPHABET.iter().position(|letter| *letter == ch) {
                    return (2, u32::try_from(position).unwrap_or(u32::MAX));
                }
            }
            Self::Root => {
                if ch.is_ascii_lowercase() {
                    return (2, u32::from(ch));
                }
            }
        }
        if let Some(base) = latin_base_letter(ch) {
            return self.primary_weight(base);
        }
        if ch.is_alphabetic() {
            return (3, u32::from(ch));
        }
        (0, u32::from(ch))
    }
}

/// ASCII base letter of an accented Latin letter, e.g. `e` for `é`.
fn latin_base_letter(ch: char) -> Option<char> {
    let mut base = None;
    decompose_canonical(ch, |part| {
        base.get_or_insert(part);
    });
    base.filter(|letter| *letter != ch && letter.is_ascii_alphabetic())
        .map(|letter| letter.to_ascii_lowercase())
}

/// Lowercase one character with Turkish casing rules.
pub(crate) fn turkish_lowercase(ch: char) -> impl Iterator<Item = char> {
    let mapped = match ch {
        'I' => Some('ı'),
        'İ' => Some('i'),
        _ => None,
    };
    mapped
        .into_iter()
        .chain(mapped.is_none().then(|| ch.to_lowercase()).into_iter().flatten())
}
