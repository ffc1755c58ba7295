//! Wire types for the unified search service.
//!
//! These are the request and response bodies a frontend sees on
//! `POST /api/search`.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for a search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query; `None` only when the client omitted the field.
    /// An explicit `null` is rejected.
    #[serde(default, deserialize_with = "present_string")]
    pub query: Option<String>,
}

/// Deserialize a field that, when present, must be a string
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl SearchRequest {
    /// Request carrying the given query text
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}

/// A citation attached to a summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

/// Response body for a search
///
/// Serialized with a `status` tag of `"success"` or `"error"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchResponse {
    Success {
        summary: String,
        sources: Vec<Source>,
    },
    Error {
        error: String,
    },
}

impl SearchResponse {
    /// Build an error payload from any displayable cause
    pub fn error(message: impl Into<String>) -> Self {
        SearchResponse::Error {
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchResponse::Success { .. })
    }

    /// Summary text, if this is a success payload
    pub fn summary(&self) -> Option<&str> {
        match self {
            SearchResponse::Success { summary, .. } => Some(summary),
            SearchResponse::Error { .. } => None,
        }
    }

    /// Sources, empty for error payloads
    pub fn sources(&self) -> &[Source] {
        match self {
            SearchResponse::Success { sources, .. } => sources,
            SearchResponse::Error { .. } => &[],
        }
    }
}
