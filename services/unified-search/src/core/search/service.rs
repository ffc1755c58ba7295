//! Canned search service.
//!
//! Classifies a query, looks up the bucket's canned payload and
//! optionally waits a configured delay to mimic a real backend.

use crate::core::catalog;
use crate::core::classifier::{self, Bucket};
use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::core::search::query::resolve_query;
use crate::core::types::{SearchRequest, SearchResponse};
use std::time::Duration;

/// Mock search service
///
/// Holds no per-request state; safe to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SearchService {
    latency: Duration,
    require_query: bool,
}

impl SearchService {
    /// Create a new search service
    pub fn new(latency: Duration, require_query: bool) -> Self {
        Self {
            latency,
            require_query,
        }
    }

    /// Create a search service from the `[search]` config section
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(
            Duration::from_millis(config.latency_ms),
            config.require_query,
        )
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Classify a query and build its canned response
    ///
    /// Pure and total: never fails, never waits.
    pub fn classify_and_respond(&self, query: &str) -> SearchResponse {
        let (_, response) = self.classify_with_bucket(query);
        response
    }

    /// Same as `classify_and_respond`, also returning the bucket
    pub fn classify_with_bucket(&self, query: &str) -> (Bucket, SearchResponse) {
        let bucket = classifier::classify(query);
        let entry = catalog::entry(bucket);

        let response = SearchResponse::Success {
            summary: entry.summary_for(query),
            sources: entry.sources(),
        };
        (bucket, response)
    }

    /// Handle a decoded search request
    ///
    /// Resolves the query, records it, applies the simulated latency
    /// and responds. Only a missing field in strict mode can fail.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let query = resolve_query(request, self.require_query)?;
        tracing::info!(query = %query, "Received query");

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let (bucket, response) = self.classify_with_bucket(&query);
        tracing::debug!(bucket = %bucket, sources = response.sources().len(), "Query classified");

        Ok(response)
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}
