//! HTTP mapping for service errors
//!
//! Every error reaching the HTTP boundary becomes a 500 with the
//! `{"status": "error", "error": ...}` body the frontend expects.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::SearchError;
use crate::core::types::SearchResponse;

const ERROR_PREFIX: &str = "Internal Server Error: Could not process request. Detail:";

/// Status code used for every failed request
pub fn status_code(_err: &SearchError) -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Build the error response for a human-readable cause
pub fn error_response(status: StatusCode, detail: &str) -> Response {
    let body = SearchResponse::error(format!("{ERROR_PREFIX} {detail}"));
    (status, Json(body)).into_response()
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        tracing::error!(
            error = %self,
            bad_request = self.is_bad_request(),
            "Error processing request"
        );
        error_response(status, &self.message())
    }
}

/// Convert a handler panic into the standard error response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, &detail)
}
