//! Document records accepted by the ranking pipeline.

use serde::{Deserialize, Deserializer, Serialize};

/// A single document in a collection.
///
/// Both fields are optional: a record missing a string `id` or a string
/// `text` is silently excluded from indexing and scoring, never treated as
/// an error. During deserialization a missing field, `null`, or a non-string
/// value maps to `None`, so one malformed record cannot fail a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier returned in search results. Identity is the id alone.
    #[serde(default, deserialize_with = "string_or_none")]
    pub id: Option<String>,
    /// Raw text that query words are matched against.
    #[serde(default, deserialize_with = "string_or_none")]
    pub text: Option<String>,
}

impl Document {
    /// Create a fully-populated document.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: Some(text.into()),
        }
    }

    /// Borrow `(id, text)` when both fields are present.
    pub(crate) fn fields(&self) -> Option<(&str, &str)> {
        match (&self.id, &self.text) {
            (Some(id), Some(text)) => Some((id, text)),
            _ => None,
        }
    }
}

/// Accept any JSON value but keep only strings; everything else becomes
/// `None` instead of a deserialization error.
fn string_or_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
