//! Per-page SEO metadata edited in the admin console.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{FieldErrorKind, FieldValidator, ValidationErrors, is_site_path};

/// Longest meta title search engines show without truncation.
pub const META_TITLE_MAX: usize = 60;
/// Longest meta description search engines show without truncation.
pub const META_DESCRIPTION_MAX: usize = 160;

/// Input payload for [`SeoMetadata::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SeoMetadataDraft {
    /// Site path the metadata applies to, for example `/urunler`.
    pub path: String,
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default)]
    pub no_index: bool,
}

/// Validated SEO metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    path: String,
    meta_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta_description: Option<String>,
    keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    og_image: Option<String>,
    no_index: bool,
}

impl SeoMetadata {
    /// Validate and construct page metadata.
    pub fn new(draft: SeoMetadataDraft) -> Result<Self, ValidationErrors> {
        let mut validator = FieldValidator::new();
        let path = draft.path.trim().to_owned();
        if !is_site_path(&path) {
            validator.push("seo.path", FieldErrorKind::InvalidLink);
        }
        let meta_title = validator.required_text("seo.meta_title", &draft.meta_title, META_TITLE_MAX);
        let meta_description = validator.optional_text(
            "seo.meta_description",
            draft.meta_description.as_deref(),
            META_DESCRIPTION_MAX,
        );
        let keywords = draft
            .keywords
            .iter()
            .map(|keyword| keyword.trim())
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_owned)
            .collect();
        let canonical_url =
            validator.optional_absolute_url("seo.canonical_url", draft.canonical_url.as_deref());
        let og_image = validator.optional_absolute_url("seo.og_image", draft.og_image.as_deref());

        validator.finish(|| {
            Some(Self {
                path,
                meta_title,
                meta_description,
                keywords,
                canonical_url,
                og_image,
                no_index: draft.no_index,
            })
        })
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }
    pub fn meta_title(&self) -> &str {
        self.meta_title.as_str()
    }
    pub fn meta_description(&self) -> Option<&str> {
        self.meta_description.as_deref()
    }
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
    pub fn canonical_url(&self) -> Option<&str> {
        self.canonical_url.as_deref()
    }
    pub fn og_image(&self) -> Option<&str> {
        self.og_image.as_deref()
    }
    pub fn no_index(&self) -> bool {
        self.no_index
    }

    /// `robots` meta tag content for the page.
    pub fn robots(&self) -> &'static str {
        if self.no_index {
            "noindex, nofollow"
        } else {
            "index, follow"
        }
    }
}

impl<'de> Deserialize<'de> for SeoMetadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::new(SeoMetadataDraft::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for SEO metadata validation.

    use rstest::rstest;

    use super::*;

    fn draft() -> SeoMetadataDraft {
        SeoMetadataDraft {
            path: "/urunler".to_owned(),
            meta_title: "Ürünler | Butik".to_owned(),
            meta_description: Some("Yeni sezon elbise, çanta ve aksesuarlar.".to_owned()),
            keywords: vec![" elbise ".to_owned(), String::new()],
            canonical_url: Some("https://butik.example.test/urunler".to_owned()),
            og_image: None,
            no_index: false,
        }
    }

    #[rstest]
    fn trims_keywords_and_defaults_robots() {
        let seo = SeoMetadata::new(draft()).expect("valid metadata");
        assert_eq!(seo.keywords(), ["elbise".to_owned()]);
        assert_eq!(seo.robots(), "index, follow");
    }

    #[rstest]
    fn rejects_long_title_and_relative_path() {
        let mut input = draft();
        input.path = "urunler".to_owned();
        input.meta_title = "x".repeat(META_TITLE_MAX + 1);

        let errors = SeoMetadata::new(input).expect_err("invalid metadata");
        assert!(errors.has_field("seo.path"));
        assert_eq!(
            errors.kind_of("seo.meta_title"),
            Some(&FieldErrorKind::TooLong {
                max: META_TITLE_MAX,
                actual: META_TITLE_MAX + 1,
            })
        );
    }

    #[rstest]
    fn no_index_pages_advertise_it() {
        let mut input = draft();
        input.no_index = true;
        let seo = SeoMetadata::new(input).expect("valid metadata");
        assert_eq!(seo.robots(), "noindex, nofollow");
    }
}
