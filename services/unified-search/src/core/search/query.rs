//! Request body handling ahead of classification.
//!
//! Turns raw request bytes into the query string the classifier
//! sees, applying the placeholder rule for a missing `query` field.

use crate::core::error::{Result, SearchError};
use crate::core::types::SearchRequest;

/// Query used when a lenient request omits the `query` field
pub const MISSING_QUERY_PLACEHOLDER: &str = "No query provided.";

/// Parse a JSON request body
///
/// Anything other than a JSON object with an optional string
/// `query` field is rejected.
pub fn parse_request(body: &[u8]) -> Result<SearchRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(SearchError::InvalidRequest("empty request body".to_string()));
    }

    let request: SearchRequest = serde_json::from_slice(body)?;
    Ok(request)
}

/// Resolve the query text for a request
///
/// In strict mode a missing field is an error; otherwise the
/// placeholder is used and the request still classifies normally.
pub fn resolve_query(request: SearchRequest, require_query: bool) -> Result<String> {
    match request.query {
        Some(query) => Ok(query),
        None if require_query => Err(SearchError::MissingField("query".to_string())),
        None => Ok(MISSING_QUERY_PLACEHOLDER.to_string()),
    }
}
