//! Catalogue snapshot loading.
//!
//! A snapshot is a JSON document holding every record the listing screens
//! operate on. Records are validated while deserialising; the loader then
//! checks the cross-record references a backing store would enforce.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::Slug;
use crate::domain::catalogue::{BlogPost, Category, Collection, Product};
use crate::domain::content::HeroSlide;

/// Errors raised while loading a catalogue snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be opened or read.
    #[error("failed to read catalogue snapshot '{path}': {message}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error description.
        message: String,
    },
    /// The document is not valid JSON or a record failed validation.
    #[error("invalid catalogue snapshot: {message}")]
    Parse {
        /// Deserialiser error description.
        message: String,
    },
    /// Two records of the same kind share a slug.
    #[error("duplicate {kind} slug '{slug}'")]
    DuplicateSlug {
        /// Record kind, e.g. `product`.
        kind: &'static str,
        /// Slug seen more than once.
        slug: String,
    },
    /// A product names a category absent from the snapshot.
    #[error("product '{product}' references unknown category '{category}'")]
    UnknownCategory {
        /// Product slug.
        product: String,
        /// Missing category slug.
        category: String,
    },
    /// A product names a collection absent from the snapshot.
    #[error("product '{product}' references unknown collection '{collection}'")]
    UnknownCollection {
        /// Product slug.
        product: String,
        /// Missing collection slug.
        collection: String,
    },
}

/// Every listable record in the storefront, validated and cross-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CatalogueSnapshot {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    collections: Vec<Collection>,
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    posts: Vec<BlogPost>,
    #[serde(default)]
    hero_slides: Vec<HeroSlide>,
}

impl CatalogueSnapshot {
    /// Read and validate the snapshot stored at `path`.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let io_error = |message: String| SnapshotError::Io {
            path: path.to_path_buf(),
            message,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("path does not name a file".to_owned()))?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|error| io_error(format!("open parent directory: {error}")))?;
        let text = directory
            .read_to_string(Path::new(file_name))
            .map_err(|error| io_error(error.to_string()))?;

        let snapshot = Self::from_json(&text).inspect_err(|error| {
            warn!(path = %path.display(), %error, "catalogue snapshot rejected");
        })?;
        info!(
            path = %path.display(),
            categories = snapshot.categories.len(),
            collections = snapshot.collections.len(),
            products = snapshot.products.len(),
            posts = snapshot.posts.len(),
            hero_slides = snapshot.hero_slides.len(),
            "catalogue snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Parse and validate a snapshot from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(text).map_err(|error| SnapshotError::Parse {
            message: error.to_string(),
        })?;
        snapshot.check_references()?;
        Ok(snapshot)
    }

    fn check_references(&self) -> Result<(), SnapshotError> {
        let categories = unique_slugs("category", self.categories.iter().map(Category::slug))?;
        let collections =
            unique_slugs("collection", self.collections.iter().map(Collection::slug))?;
        unique_slugs("product", self.products.iter().map(Product::slug))?;
        unique_slugs("post", self.posts.iter().map(BlogPost::slug))?;

        for product in &self.products {
            let category = product.category().as_str();
            if !categories.contains(category) {
                return Err(SnapshotError::UnknownCategory {
                    product: product.slug().to_string(),
                    category: category.to_owned(),
                });
            }
            if let Some(missing) = product
                .collections()
                .iter()
                .find(|slug| !collections.contains(slug.as_str()))
            {
                return Err(SnapshotError::UnknownCollection {
                    product: product.slug().to_string(),
                    collection: missing.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }
    pub fn products(&self) -> &[Product] {
        &self.products
    }
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }
    pub fn hero_slides(&self) -> &[HeroSlide] {
        &self.hero_slides
    }
}

fn unique_slugs<'a>(
    kind: &'static str,
    slugs: impl Iterator<Item = &'a Slug>,
) -> Result<HashSet<&'a str>, SnapshotError> {
    let mut seen = HashSet::new();
    for slug in slugs {
        if !seen.insert(slug.as_str()) {
            return Err(SnapshotError::DuplicateSlug {
                kind,
                slug: slug.to_string(),
            });
        }
    }
    Ok(seen)
}
