//! Product catalogue entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::price::Price;
use super::{DESCRIPTION_MAX, NAME_MAX};
use crate::domain::listing::{
    DiscriminatorField, FlagField, Listable, NumericField, TextField,
};
use crate::domain::slug::Slug;
use crate::domain::validation::{FieldErrorKind, FieldValidator, ValidationErrors};

/// Input payload for [`Product::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ProductDraft {
    pub id: Uuid,
    pub name: String,
    /// Explicit slug; derived from `name` when absent or blank.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Price in kuruş.
    pub price: i64,
    /// Pre-sale price in kuruş, shown struck through.
    #[serde(default)]
    pub compare_at_price: Option<i64>,
    #[serde(default)]
    pub stock: i64,
    /// Slug of the owning category.
    pub category: String,
    /// Slugs of the collections featuring this product.
    #[serde(default)]
    pub collections: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Product offered in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: Uuid,
    name: String,
    slug: Slug,
    description: String,
    price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    compare_at_price: Option<Price>,
    stock: i64,
    category: Slug,
    collections: Vec<Slug>,
    featured: bool,
    images: Vec<String>,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Validate and construct a product.
    pub fn new(draft: ProductDraft) -> Result<Self, ValidationErrors> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn slug(&self) -> &Slug {
        &self.slug
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    pub fn price(&self) -> Price {
        self.price
    }
    pub fn compare_at_price(&self) -> Option<Price> {
        self.compare_at_price
    }
    pub fn stock(&self) -> i64 {
        self.stock
    }
    pub fn category(&self) -> &Slug {
        &self.category
    }
    pub fn collections(&self) -> &[Slug] {
        &self.collections
    }
    pub fn is_featured(&self) -> bool {
        self.featured
    }
    pub fn images(&self) -> &[String] {
        &self.images
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether at least one unit can be ordered.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether the product is discounted from its compare-at price.
    pub fn on_sale(&self) -> bool {
        self.compare_at_price
            .is_some_and(|compare_at| compare_at > self.price)
    }
}

impl TryFrom<ProductDraft> for Product {
    type Error = ValidationErrors;

    fn try_from(draft: ProductDraft) -> Result<Self, Self::Error> {
        let mut validator = FieldValidator::new();
        let name = validator.required_text("product.name", &draft.name, NAME_MAX);
        let slug = validator.slug_or_title("product.slug", draft.slug.as_deref(), &name);
        let description = draft.description.trim().to_owned();
        validator.max_length("product.description", &description, DESCRIPTION_MAX);

        let price = Price::from_minor(draft.price).ok();
        validator.non_negative("product.price", draft.price);
        let compare_at_price = match draft.compare_at_price {
            Some(amount) => {
                validator.non_negative("product.compare_at_price", amount);
                if amount >= 0 && amount <= draft.price {
                    validator.push(
                        "product.compare_at_price",
                        FieldErrorKind::CompareAtNotAbovePrice,
                    );
                }
                Price::from_minor(amount).ok()
            }
            None => None,
        };
        validator.non_negative("product.stock", draft.stock);

        let category = validator.slug("product.category", draft.category.trim().to_owned());
        let collections: Vec<Option<Slug>> = draft
            .collections
            .iter()
            .map(|raw| validator.slug("product.collections", raw.trim().to_owned()))
            .collect();
        let images: Vec<String> = draft
            .images
            .iter()
            .map(|raw| validator.absolute_url("product.images", raw))
            .collect();

        validator.finish(|| {
            Some(Self {
                id: draft.id,
                name,
                slug: slug?,
                description,
                price: price?,
                compare_at_price,
                stock: draft.stock,
                category: category?,
                collections: collections.into_iter().collect::<Option<Vec<_>>>()?,
                featured: draft.featured,
                images,
                created_at: draft.created_at,
            })
        })
    }
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        ProductDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

impl Listable for Product {
    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(self.name()),
            TextField::Slug => Some(self.slug.as_str()),
            TextField::Description => Some(self.description()),
        }
    }

    fn has_discriminator(&self, field: DiscriminatorField, value: &str) -> bool {
        match field {
            DiscriminatorField::Category => self.category.as_str() == value,
            DiscriminatorField::Collection => {
                self.collections.iter().any(|slug| slug.as_str() == value)
            }
            DiscriminatorField::Status | DiscriminatorField::Parent => false,
        }
    }

    fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::InStock => self.in_stock(),
            FlagField::Featured => self.featured,
            FlagField::OnSale => self.on_sale(),
            FlagField::Active | FlagField::Published => false,
        }
    }

    fn numeric(&self, field: NumericField) -> Option<i64> {
        match field {
            NumericField::Price => Some(self.price.minor_units()),
            NumericField::Stock => Some(self.stock),
            NumericField::DisplayOrder => None,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
