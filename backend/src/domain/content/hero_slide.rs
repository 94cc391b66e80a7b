//! Hero carousel slide shown at the top of the home page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalogue::default_true;
use crate::domain::listing::{
    DiscriminatorField, FlagField, Listable, NumericField, TextField,
};
use crate::domain::validation::{FieldValidator, ValidationErrors};

const TITLE_MAX: usize = 80;
const SUBTITLE_MAX: usize = 160;
const CTA_MAX: usize = 40;

/// Input payload for [`HeroSlide::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct HeroSlideDraft {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub image_url: String,
    /// Absolute URL or site path opened by the call to action.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub cta_label: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_true")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    id: Uuid,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cta_label: Option<String>,
    display_order: i64,
    active: bool,
    created_at: DateTime<Utc>,
}

impl HeroSlide {
    /// Validate and construct a slide.
    pub fn new(draft: HeroSlideDraft) -> Result<Self, ValidationErrors> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }
    pub fn image_url(&self) -> &str {
        self.image_url.as_str()
    }
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
    pub fn cta_label(&self) -> Option<&str> {
        self.cta_label.as_deref()
    }
    pub fn display_order(&self) -> i64 {
        self.display_order
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl TryFrom<HeroSlideDraft> for HeroSlide {
    type Error = ValidationErrors;

    fn try_from(draft: HeroSlideDraft) -> Result<Self, Self::Error> {
        let mut validator = FieldValidator::new();
        let title = validator.required_text("hero_slide.title", &draft.title, TITLE_MAX);
        let subtitle =
            validator.optional_text("hero_slide.subtitle", draft.subtitle.as_deref(), SUBTITLE_MAX);
        let image_url = validator.absolute_url("hero_slide.image_url", &draft.image_url);
        let link = draft
            .link
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| validator.link("hero_slide.link", text));
        let cta_label =
            validator.optional_text("hero_slide.cta_label", draft.cta_label.as_deref(), CTA_MAX);
        validator.non_negative("hero_slide.display_order", draft.display_order);

        validator.finish(|| {
            Some(Self {
                id: draft.id,
                title,
                subtitle,
                image_url,
                link,
                cta_label,
                display_order: draft.display_order,
                active: draft.active,
                created_at: draft.created_at,
            })
        })
    }
}

impl<'de> Deserialize<'de> for HeroSlide {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        HeroSlideDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

impl Listable for HeroSlide {
    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(self.title()),
            TextField::Description => self.subtitle(),
            TextField::Slug => None,
        }
    }

    fn has_discriminator(&self, _field: DiscriminatorField, _value: &str) -> bool {
        false
    }

    fn flag(&self, field: FlagField) -> bool {
        field == FlagField::Active && self.active
    }

    fn numeric(&self, field: NumericField) -> Option<i64> {
        (field == NumericField::DisplayOrder).then_some(self.display_order)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
