//! Blog post entity for the storefront journal.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::listing::{
    DiscriminatorField, FlagField, Listable, NumericField, TextField,
};
use crate::domain::slug::Slug;
use crate::domain::validation::{FieldErrorKind, FieldValidator, ValidationErrors};

const TITLE_MAX: usize = 160;
const EXCERPT_MAX: usize = 300;
const BODY_MAX: usize = 100_000;
const TAG_MAX: usize = 40;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    /// Lowercase label used by the status discriminator filter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input payload for [`BlogPost::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct BlogPostDraft {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub body: String,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Required once the post is published.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Journal article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    id: Uuid,
    title: String,
    slug: Slug,
    #[serde(skip_serializing_if = "Option::is_none")]
    excerpt: Option<String>,
    body: String,
    status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Slug>,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cover_image: Option<String>,
    featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl BlogPost {
    /// Validate and construct a blog post.
    pub fn new(draft: BlogPostDraft) -> Result<Self, ValidationErrors> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    pub fn slug(&self) -> &Slug {
        &self.slug
    }
    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }
    pub fn body(&self) -> &str {
        self.body.as_str()
    }
    pub fn status(&self) -> PostStatus {
        self.status
    }
    pub fn category(&self) -> Option<&Slug> {
        self.category.as_ref()
    }
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }
    pub fn is_featured(&self) -> bool {
        self.featured
    }
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }
}

impl TryFrom<BlogPostDraft> for BlogPost {
    type Error = ValidationErrors;

    fn try_from(draft: BlogPostDraft) -> Result<Self, Self::Error> {
        let mut validator = FieldValidator::new();
        let title = validator.required_text("post.title", &draft.title, TITLE_MAX);
        let slug = validator.slug_or_title("post.slug", draft.slug.as_deref(), &title);
        let excerpt = validator.optional_text("post.excerpt", draft.excerpt.as_deref(), EXCERPT_MAX);
        let body = validator.required_text("post.body", &draft.body, BODY_MAX);
        let category = validator.optional_slug("post.category", draft.category.as_deref());
        let tags: Vec<String> = draft
            .tags
            .iter()
            .filter_map(|tag| validator.optional_text("post.tags", Some(tag), TAG_MAX))
            .collect();
        let cover_image =
            validator.optional_absolute_url("post.cover_image", draft.cover_image.as_deref());
        if draft.status == PostStatus::Published && draft.published_at.is_none() {
            validator.push("post.published_at", FieldErrorKind::Empty);
        }

        validator.finish(|| {
            Some(Self {
                id: draft.id,
                title,
                slug: slug?,
                excerpt,
                body,
                status: draft.status,
                category,
                tags,
                cover_image,
                featured: draft.featured,
                published_at: draft.published_at,
                created_at: draft.created_at,
            })
        })
    }
}

impl<'de> Deserialize<'de> for BlogPost {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        BlogPostDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

impl Listable for BlogPost {
    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(self.title()),
            TextField::Slug => Some(self.slug.as_str()),
            TextField::Description => self.excerpt(),
        }
    }

    fn has_discriminator(&self, field: DiscriminatorField, value: &str) -> bool {
        match field {
            DiscriminatorField::Status => self.status.as_str() == value,
            DiscriminatorField::Category => {
                self.category.as_ref().is_some_and(|slug| slug.as_str() == value)
            }
            DiscriminatorField::Collection | DiscriminatorField::Parent => false,
        }
    }

    fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::Published => self.status == PostStatus::Published,
            FlagField::Featured => self.featured,
            FlagField::Active => self.status != PostStatus::Archived,
            FlagField::InStock | FlagField::OnSale => false,
        }
    }

    fn numeric(&self, _field: NumericField) -> Option<i64> {
        None
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
