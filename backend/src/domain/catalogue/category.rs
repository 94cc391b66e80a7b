//! Product category entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DESCRIPTION_MAX, NAME_MAX, default_true};
use crate::domain::listing::{
    DiscriminatorField, FlagField, Listable, NumericField, TextField,
};
use crate::domain::slug::Slug;
use crate::domain::validation::{FieldErrorKind, FieldValidator, ValidationErrors};

/// Input payload for [`Category::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CategoryDraft {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Slug of the parent category for nested menus.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_true")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Category used to group products in navigation and filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: Uuid,
    name: String,
    slug: Slug,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<Slug>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    display_order: i64,
    active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Validate and construct a category.
    pub fn new(draft: CategoryDraft) -> Result<Self, ValidationErrors> {
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
    pub fn parent(&self) -> Option<&Slug> {
        self.parent.as_ref()
    }
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
    pub fn display_order(&self) -> i64 {
        self.display_order
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl TryFrom<CategoryDraft> for Category {
    type Error = ValidationErrors;

    fn try_from(draft: CategoryDraft) -> Result<Self, Self::Error> {
        let mut validator = FieldValidator::new();
        let name = validator.required_text("category.name", &draft.name, NAME_MAX);
        let slug = validator.slug_or_title("category.slug", draft.slug.as_deref(), &name);
        let description = validator.optional_text(
            "category.description",
            draft.description.as_deref(),
            DESCRIPTION_MAX,
        );
        let parent = validator.optional_slug("category.parent", draft.parent.as_deref());
        if let (Some(own), Some(parent_slug)) = (slug.as_ref(), parent.as_ref()) {
            if own == parent_slug {
                validator.push(
                    "category.parent",
                    FieldErrorKind::InvalidValue {
                        message: "a category cannot be its own parent".to_owned(),
                    },
                );
            }
        }
        let image = validator.optional_absolute_url("category.image", draft.image.as_deref());
        validator.non_negative("category.display_order", draft.display_order);

        validator.finish(|| {
            Some(Self {
                id: draft.id,
                name,
                slug: slug?,
                description,
                parent,
                image,
                display_order: draft.display_order,
                active: draft.active,
                created_at: draft.created_at,
            })
        })
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        CategoryDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

impl Listable for Category {
    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(self.name()),
            TextField::Slug => Some(self.slug.as_str()),
            TextField::Description => self.description(),
        }
    }

    fn has_discriminator(&self, field: DiscriminatorField, value: &str) -> bool {
        match field {
            DiscriminatorField::Parent => self.parent.as_ref().is_some_and(|p| p.as_str() == value),
            DiscriminatorField::Category => self.slug.as_str() == value,
            DiscriminatorField::Collection | DiscriminatorField::Status => false,
        }
    }

    fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::Active => self.active,
            FlagField::InStock | FlagField::Featured | FlagField::OnSale | FlagField::Published => {
                false
            }
        }
    }

    fn numeric(&self, field: NumericField) -> Option<i64> {
        match field {
            NumericField::DisplayOrder => Some(self.display_order),
            NumericField::Price | NumericField::Stock => None,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
