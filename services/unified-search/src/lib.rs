//! Unified Search - mock search backend
//!
//! Answers free-text queries with a canned, keyword-matched summary
//! and a fixed list of source citations, so a frontend can be built
//! and demoed against a stable contract before a real retrieval
//! backend exists. Nothing is retrieved, indexed or generated.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - classifier (keyword buckets)
//!   - catalog (canned payloads)
//!   - search (request handling, simulated latency)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - router, handlers, middleware, error mapping
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - serve, query, show-config, completions

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use self::core::classifier::{classify, Bucket};
pub use self::core::config::Config;
pub use self::core::error::{Result, SearchError};
pub use self::core::services::Services;
pub use self::core::types::*;
