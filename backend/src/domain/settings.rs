//! Site-wide settings edited from the admin console.
//!
//! Every setting is stored as a key, a declared kind, and the raw text the
//! admin typed. [`SiteSetting::new`] parses the text according to its kind
//! so the storefront reads typed values only.

use serde::{Deserialize, Serialize};

use super::validation::{
    FieldErrorKind, FieldValidator, ValidationErrors, is_absolute_http_url,
};

const KEY_MAX: usize = 64;
const TEXT_MAX: usize = 2_000;

/// Declared kind of a setting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingKind {
    Text,
    Number,
    Boolean,
    Url,
    Color,
}

/// Parsed setting value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Url(String),
    /// `#rrggbb`, lowercased.
    Color(String),
}

impl SettingValue {
    /// Parse `raw` as a value of `kind`.
    pub fn parse(kind: SettingKind, raw: &str) -> Result<Self, FieldErrorKind> {
        let trimmed = raw.trim();
        match kind {
            SettingKind::Text => {
                let actual = trimmed.chars().count();
                if actual > TEXT_MAX {
                    return Err(FieldErrorKind::TooLong {
                        max: TEXT_MAX,
                        actual,
                    });
                }
                Ok(Self::Text(trimmed.to_owned()))
            }
            SettingKind::Number => trimmed
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .map(Self::Number)
                .ok_or_else(|| invalid(format!("'{trimmed}' is not a number"))),
            SettingKind::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(Self::Boolean(true)),
                "false" | "0" | "no" | "off" => Ok(Self::Boolean(false)),
                _ => Err(invalid(format!("'{trimmed}' is not true or false"))),
            },
            SettingKind::Url => {
                if is_absolute_http_url(trimmed) {
                    Ok(Self::Url(trimmed.to_owned()))
                } else {
                    Err(FieldErrorKind::InvalidUrl)
                }
            }
            SettingKind::Color => {
                let hex = trimmed.strip_prefix('#').unwrap_or_default();
                if hex.len() == 6 && hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
                    Ok(Self::Color(format!("#{}", hex.to_ascii_lowercase())))
                } else {
                    Err(invalid(format!("'{trimmed}' is not a #rrggbb colour")))
                }
            }
        }
    }

    /// Kind this value was parsed as.
    pub fn kind(&self) -> SettingKind {
        match self {
            Self::Text(_) => SettingKind::Text,
            Self::Number(_) => SettingKind::Number,
            Self::Boolean(_) => SettingKind::Boolean,
            Self::Url(_) => SettingKind::Url,
            Self::Color(_) => SettingKind::Color,
        }
    }
}

fn invalid(message: String) -> FieldErrorKind {
    FieldErrorKind::InvalidValue { message }
}

/// Input payload for [`SiteSetting::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SiteSettingDraft {
    /// Lowercase key such as `store.free_shipping_threshold`.
    pub key: String,
    pub kind: SettingKind,
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Validated site setting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSetting {
    key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    value: SettingValue,
}

impl SiteSetting {
    /// Validate the key and parse the value according to its kind.
    pub fn new(draft: SiteSettingDraft) -> Result<Self, ValidationErrors> {
        let mut validator = FieldValidator::new();
        let key = validator.required_text("setting.key", &draft.key, KEY_MAX);
        if !key.is_empty() && !is_valid_key(&key) {
            validator.push(
                "setting.key",
                invalid("keys use lowercase letters, digits, '_' and '.' separators".to_owned()),
            );
        }
        let label = validator.optional_text("setting.label", draft.label.as_deref(), KEY_MAX);
        let value = match SettingValue::parse(draft.kind, &draft.value) {
            Ok(value) => Some(value),
            Err(kind) => {
                validator.push("setting.value", kind);
                None
            }
        };

        validator.finish(|| Some(Self { key, label, value: value? }))
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
    pub fn value(&self) -> &SettingValue {
        &self.value
    }
}

fn is_valid_key(key: &str) -> bool {
    key.split('.').all(|segment| {
        !segment.is_empty()
            && !segment.starts_with('_')
            && segment
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
    })
}
