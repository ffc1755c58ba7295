//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Exposes `POST /api/search` via the Axum web framework with a
//! permissive CORS policy for browser frontends.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use handlers::*;
pub use server::{build_router, cors_layer, serve, serve_on, MAX_BODY_BYTES, SEARCH_PATH};
