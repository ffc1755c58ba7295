//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Request and response bodies
//! - **xdg**: XDG directory handling
//! - **classifier**: Keyword bucket selection
//! - **catalog**: Canned summaries and sources per bucket
//! - **search**: Request handling, latency simulation
//! - **services**: Unified service container

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use classifier::{classify, Bucket};
pub use config::Config;
pub use error::{Result, SearchError};
pub use services::Services;
