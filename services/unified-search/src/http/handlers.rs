//! HTTP request handlers for the unified search API
//!
//! Implements `POST /api/search` and the bare `OPTIONS` answer on
//! the same path.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};

use crate::core::error::SearchError;
use crate::core::search::parse_request;
use crate::core::services::Services;
use crate::core::types::SearchResponse;

/// Search handler
///
/// Decodes the body itself rather than through the `Json` extractor
/// so every malformed body ends up in the same error shape.
///
/// # Errors
///
/// - `InvalidRequest`: body is empty, over the size limit or unreadable
/// - `SerdeError`: body is not a JSON object with a string `query`
/// - `MissingField`: `query` absent while `search.require_query` is set
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SearchResponse>, SearchError> {
    let body = body.map_err(|rejection| {
        SearchError::InvalidRequest(format!(
            "could not read request body: {}",
            rejection.body_text()
        ))
    })?;
    let request = parse_request(&body)?;
    let response = services.search.search(request).await?;

    Ok(Json(response))
}

/// Answer a non-preflight `OPTIONS` request
///
/// Real preflights are answered by the CORS layer before reaching
/// this handler.
pub async fn options_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
