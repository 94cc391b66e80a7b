//! Storefront configuration loaded via OrthoConfig.

use std::ffi::OsString;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use pagination::{MAX_PER_PAGE, PageRequest};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::collation::{Locale, LocaleParseError};

const DEFAULT_PAGE_SIZE: u32 = 24;

fn default_catalogue_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalogue.json")
}

/// Errors raised while loading or interpreting settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Environment or configuration file values could not be read.
    #[error("failed to load storefront settings: {message}")]
    Load {
        /// Loader error description.
        message: String,
    },
    /// The configured locale is not supported.
    #[error(transparent)]
    Locale(#[from] LocaleParseError),
    /// The configured page size is outside the accepted range.
    #[error("page size must be between 1 and {max} (got {value})")]
    PageSize {
        /// Rejected page size.
        value: u32,
        /// Largest accepted page size.
        max: u32,
    },
}

/// Configuration values for catalogue listing tools.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// Emit JSON log lines instead of human-readable output.
    #[ortho_config(default = false)]
    pub json_logs: bool,
    /// Path to the catalogue snapshot JSON file.
    pub catalogue_path: Option<PathBuf>,
    /// Locale tag used for search folding and name sorting.
    pub locale: Option<String>,
    /// Default number of items per listing page.
    pub page_size: Option<u32>,
}

impl StorefrontSettings {
    /// Load settings from the environment and configuration files only,
    /// leaving command-line parsing to the calling binary.
    pub fn from_environment(binary: &str) -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(binary)]).map_err(|error| SettingsError::Load {
            message: error.to_string(),
        })
    }

    /// Return the configured snapshot path, falling back to the bundled fixture.
    pub fn catalogue_path(&self) -> PathBuf {
        self.catalogue_path
            .clone()
            .unwrap_or_else(default_catalogue_path)
    }

    /// Return the configured locale, falling back to Turkish.
    pub fn locale(&self) -> Result<Locale, SettingsError> {
        match self.locale.as_deref() {
            Some(tag) => Ok(tag.parse()?),
            None => Ok(Locale::default()),
        }
    }

    /// Return a first-page request using the configured page size.
    pub fn first_page(&self) -> Result<PageRequest, SettingsError> {
        let value = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        PageRequest::new(1, value).map_err(|_| SettingsError::PageSize {
            value,
            max: MAX_PER_PAGE,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for storefront configuration parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load() -> StorefrontSettings {
        StorefrontSettings::from_environment("catalogue-query").expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("STOREFRONT_JSON_LOGS", None::<String>),
            ("STOREFRONT_CATALOGUE_PATH", None::<String>),
            ("STOREFRONT_LOCALE", None::<String>),
            ("STOREFRONT_PAGE_SIZE", None::<String>),
        ]);

        let settings = load();
        assert!(!settings.json_logs);
        assert_eq!(settings.catalogue_path(), default_catalogue_path());
        assert_eq!(settings.locale(), Ok(Locale::Turkish));
        assert_eq!(
            settings.first_page().map(|page| page.per_page()),
            Ok(DEFAULT_PAGE_SIZE)
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("STOREFRONT_JSON_LOGS", Some("true".to_owned())),
            (
                "STOREFRONT_CATALOGUE_PATH",
                Some("/tmp/catalogue.json".to_owned()),
            ),
            ("STOREFRONT_LOCALE", Some("root".to_owned())),
            ("STOREFRONT_PAGE_SIZE", Some("12".to_owned())),
        ]);

        let settings = load();
        assert!(settings.json_logs);
        assert_eq!(
            settings.catalogue_path(),
            PathBuf::from("/tmp/catalogue.json")
        );
        assert_eq!(settings.locale(), Ok(Locale::Root));
        assert_eq!(settings.first_page().map(|page| page.per_page()), Ok(12));
    }

    #[rstest]
    fn invalid_values_are_reported() {
        let _guard = lock_env([
            ("STOREFRONT_JSON_LOGS", None::<String>),
            ("STOREFRONT_CATALOGUE_PATH", None::<String>),
            ("STOREFRONT_LOCALE", Some("fr".to_owned())),
            ("STOREFRONT_PAGE_SIZE", Some("500".to_owned())),
        ]);

        let settings = load();
        assert!(matches!(settings.locale(), Err(SettingsError::Locale(_))));
        assert_eq!(
            settings.first_page(),
            Err(SettingsError::PageSize {
                value: 500,
                max: MAX_PER_PAGE,
            })
        );
    }
}
