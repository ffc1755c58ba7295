//! Unified service container
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::search::SearchService;
use std::sync::Arc;

/// Unified services container
///
/// Every adapter (HTTP, CLI) uses this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Canned search service
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let search = Arc::new(SearchService::from_config(&config.search));

        Self {
            search,
            config: Arc::new(config),
        }
    }
}
