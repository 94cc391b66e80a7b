//! Contact form submissions from the storefront.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{FieldErrorKind, FieldValidator, ValidationErrors};

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 254;
const SUBJECT_MAX: usize = 150;
const MESSAGE_MAX: usize = 5_000;
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=20;

/// Fields posted by the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ContactMessageDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// Validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    message: String,
}

impl ContactMessage {
    /// Validate a submission, reporting every failing field.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::content::{ContactMessage, ContactMessageDraft};
    ///
    /// let errors = ContactMessage::new(ContactMessageDraft {
    ///     name: String::new(),
    ///     email: "not-an-email".to_owned(),
    ///     phone: None,
    ///     subject: None,
    ///     message: "Merhaba".to_owned(),
    /// })
    /// .expect_err("two invalid fields");
    /// assert_eq!(errors.errors().len(), 2);
    /// ```
    pub fn new(draft: ContactMessageDraft) -> Result<Self, ValidationErrors> {
        let mut validator = FieldValidator::new();
        let name = validator.required_text("contact.name", &draft.name, NAME_MAX);

        let email = draft.email.trim().to_ascii_lowercase();
        if email.is_empty() {
            validator.push("contact.email", FieldErrorKind::Empty);
        } else if email.len() > EMAIL_MAX || !is_plausible_email(&email) {
            validator.push("contact.email", FieldErrorKind::InvalidEmail);
        }

        let phone = draft
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        if phone.as_deref().is_some_and(|text| !is_plausible_phone(text)) {
            validator.push("contact.phone", FieldErrorKind::InvalidPhone);
        }

        let subject = validator.optional_text("contact.subject", draft.subject.as_deref(), SUBJECT_MAX);
        let message = validator.required_text("contact.message", &draft.message, MESSAGE_MAX);

        validator.finish(|| {
            Some(Self {
                name,
                email,
                phone,
                subject,
                message,
            })
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Shape check only: one `@`, a non-empty local part, and a dotted domain.
fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

fn is_plausible_phone(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, ' ' | '+' | '(' | ')' | '-'));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    allowed && PHONE_DIGITS.contains(&digits)
}
