// Field rules for the writable part of a Lyb.
//
// Values are trimmed before they are checked and stored. Every violated rule is
// reported, keyed by field name, so clients can fix all fields in one round trip.

use std::collections::BTreeMap;
use std::fmt;

pub const TITLE_MAX_CHARS: usize = 100;
pub const AUTHOR_MAX_CHARS: usize = 50;
pub const CONTENT_MAX_CHARS: usize = 5000;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const NULL: &str = "This field may not be null.";

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LybFields {
    pub title: String,
    pub author: String,
    pub content: String,
}

pub fn validate(fields: LybFields) -> Result<LybFields, FieldErrors> {
    let mut errors = FieldErrors::new();
    let title = check_text(&mut errors, "title", &fields.title, TITLE_MAX_CHARS);
    let author = check_text(&mut errors, "author", &fields.author, AUTHOR_MAX_CHARS);
    let content = check_text(&mut errors, "content", &fields.content, CONTENT_MAX_CHARS);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LybFields {
        title,
        author,
        content,
    })
}

/// Records blank and over-long values under `field`; returns the trimmed value.
pub fn check_text(errors: &mut FieldErrors, field: &str, value: &str, max_chars: usize) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, BLANK);
    } else if trimmed.chars().count() > max_chars {
        errors.add(
            field,
            format!("Ensure this field has no more than {max_chars} characters."),
        );
    }
    trimmed.to_string()
}
