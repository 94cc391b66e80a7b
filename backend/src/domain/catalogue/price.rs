//! Money amounts stored as integer minor units.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-negative price in kuruş (1/100 of a lira).
///
/// Sorting and range filters compare the integer amount directly; the
/// formatted string is for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price(i64);

/// Error returned when a price amount is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("price must not be negative (got {0})")]
pub struct NegativePriceError(i64);

impl Price {
    /// Build a price from minor units.
    pub fn from_minor(minor_units: i64) -> Result<Self, NegativePriceError> {
        if minor_units < 0 {
            return Err(NegativePriceError(minor_units));
        }
        Ok(Self(minor_units))
    }

    /// Amount in minor units.
    pub fn minor_units(self) -> i64 {
        self.0
    }

    /// Render the storefront format, for example `1.299,90 TL`.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::catalogue::Price;
    ///
    /// let price = Price::from_minor(129_990).expect("valid price");
    /// assert_eq!(price.to_display_string(), "1.299,90 TL");
    /// ```
    pub fn to_display_string(self) -> String {
        let lira = self.0 / 100;
        let kurus = self.0 % 100;
        let digits = lira.to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        format!("{grouped},{kurus:02} TL")
    }
}

impl TryFrom<i64> for Price {
    type Error = NegativePriceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_minor(value)
    }
}

impl From<Price> for i64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
