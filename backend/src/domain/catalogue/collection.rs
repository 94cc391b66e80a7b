//! Curated product collection entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DESCRIPTION_MAX, NAME_MAX, default_true};
use crate::domain::listing::{
    DiscriminatorField, FlagField, Listable, NumericField, TextField,
};
use crate::domain::slug::Slug;
use crate::domain::validation::{FieldValidator, ValidationErrors};

/// Input payload for [`Collection::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CollectionDraft {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Seasonal or editorial grouping of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    id: Uuid,
    name: String,
    slug: Slug,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    display_order: i64,
    featured: bool,
    active: bool,
    created_at: DateTime<Utc>,
}

impl Collection {
    /// Validate and construct a collection.
    pub fn new(draft: CollectionDraft) -> Result<Self, ValidationErrors> {
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
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
    pub fn display_order(&self) -> i64 {
        self.display_order
    }
    pub fn is_featured(&self) -> bool {
        self.featured
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl TryFrom<CollectionDraft> for Collection {
    type Error = ValidationErrors;

    fn try_from(draft: CollectionDraft) -> Result<Self, Self::Error> {
        let mut validator = FieldValidator::new();
        let name = validator.required_text("collection.name", &draft.name, NAME_MAX);
        let slug = validator.slug_or_title("collection.slug", draft.slug.as_deref(), &name);
        let description = validator.optional_text(
            "collection.description",
            draft.description.as_deref(),
            DESCRIPTION_MAX,
        );
        let image = validator.optional_absolute_url("collection.image", draft.image.as_deref());
        validator.non_negative("collection.display_order", draft.display_order);

        validator.finish(|| {
            Some(Self {
                id: draft.id,
                name,
                slug: slug?,
                description,
                image,
                display_order: draft.display_order,
                featured: draft.featured,
                active: draft.active,
                created_at: draft.created_at,
            })
        })
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        CollectionDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

impl Listable for Collection {
    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(self.name()),
            TextField::Slug => Some(self.slug.as_str()),
            TextField::Description => self.description(),
        }
    }

    fn has_discriminator(&self, field: DiscriminatorField, value: &str) -> bool {
        field == DiscriminatorField::Collection && self.slug.as_str() == value
    }

    fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::Active => self.active,
            FlagField::Featured => self.featured,
            FlagField::InStock | FlagField::OnSale | FlagField::Published => false,
        }
    }

    fn numeric(&self, field: NumericField) -> Option<i64> {
        (field == NumericField::DisplayOrder).then_some(self.display_order)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
