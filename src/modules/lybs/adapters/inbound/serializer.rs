// Wire representation of a Lyb.
//
// Input: a JSON object with optional writable fields. Read-only (`id`, `posttime`)
// and unknown keys are ignored. Output: `id`, `title`, `author`, `content`, `posttime`.

use crate::modules::lybs::adapters::inbound::errors::ApiError;
use crate::modules::lybs::core::rules::{
    AUTHOR_MAX_CHARS, CONTENT_MAX_CHARS, FieldErrors, LybFields, NULL, REQUIRED, TITLE_MAX_CHARS,
    check_text,
};
use crate::modules::lybs::use_cases::list_lybs::projection::LybView;
use crate::modules::lybs::use_cases::update_lyb::command::LybChanges;
use crate::shared::core::primitives::format_rfc3339;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Outer `None`: key absent. `Some(None)`: explicit `null`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LybInput {
    #[serde(default, deserialize_with = "keep_null")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "keep_null")]
    pub author: Option<Option<String>>,
    #[serde(default, deserialize_with = "keep_null")]
    pub content: Option<Option<String>>,
}

fn keep_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

fn checked(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<Option<String>>,
    max_chars: usize,
) -> Option<String> {
    match value? {
        None => {
            errors.add(field, NULL);
            None
        }
        Some(text) => Some(check_text(errors, field, &text, max_chars)),
    }
}

fn required(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<Option<String>>,
    max_chars: usize,
) -> Option<String> {
    if value.is_none() {
        errors.add(field, REQUIRED);
    }
    checked(errors, field, value, max_chars)
}

impl LybInput {
    /// Every writable field must be present (create and full update). All
    /// fields are checked so every problem is reported at once.
    pub fn require_all(self) -> Result<LybFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        let title = required(&mut errors, "title", self.title, TITLE_MAX_CHARS);
        let author = required(&mut errors, "author", self.author, AUTHOR_MAX_CHARS);
        let content = required(&mut errors, "content", self.content, CONTENT_MAX_CHARS);
        match (title, author, content) {
            (Some(title), Some(author), Some(content)) if errors.is_empty() => Ok(LybFields {
                title,
                author,
                content,
            }),
            _ => Err(errors),
        }
    }

    /// Only the fields present are changed (partial update).
    pub fn into_changes(self) -> Result<LybChanges, FieldErrors> {
        let mut errors = FieldErrors::new();
        let changes = LybChanges {
            title: checked(&mut errors, "title", self.title, TITLE_MAX_CHARS),
            author: checked(&mut errors, "author", self.author, AUTHOR_MAX_CHARS),
            content: checked(&mut errors, "content", self.content, CONTENT_MAX_CHARS),
        };
        if errors.is_empty() {
            Ok(changes)
        } else {
            Err(errors)
        }
    }
}

impl From<LybFields> for LybChanges {
    fn from(fields: LybFields) -> Self {
        Self {
            title: Some(fields.title),
            author: Some(fields.author),
            content: Some(fields.content),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LybRepresentation {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub posttime: String,
}

impl From<LybView> for LybRepresentation {
    fn from(view: LybView) -> Self {
        Self {
            id: view.lyb_id,
            title: view.title,
            author: view.author,
            content: view.content,
            posttime: format_rfc3339(view.posttime),
        }
    }
}

/// Lyb ids are UUIDs; anything else cannot name a record.
pub fn parse_lyb_id(raw: &str) -> Result<String, ApiError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| ApiError::NotFound)
}
