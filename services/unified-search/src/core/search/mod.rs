//! Search module for the canned search backend.
//!
//! This module turns request bodies into queries and queries into
//! canned responses.

mod query;
mod service;

pub use query::{parse_request, resolve_query, MISSING_QUERY_PLACEHOLDER};
pub use service::SearchService;
