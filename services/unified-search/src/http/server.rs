//! Router assembly and the listening loop.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::core::config::CorsConfig;
use crate::core::error::Result;
use crate::core::services::Services;
use crate::http::error::handle_panic;
use crate::http::{handlers, middleware as http_middleware};

/// Path of the single search endpoint
pub const SEARCH_PATH: &str = "/api/search";

/// Largest request body accepted, in bytes
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the CORS layer from configuration
///
/// Methods are limited to `POST, OPTIONS` and headers to
/// `Content-Type`.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin: {e}");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the API router
pub fn build_router(services: Arc<Services>) -> Router {
    let cors = cors_layer(&services.config.cors);

    Router::new()
        .route(
            SEARCH_PATH,
            post(handlers::search_handler).options(handlers::options_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(cors)
        .with_state(services)
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(services: Arc<Services>) -> Result<()> {
    let addr = services.config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Search endpoint: POST http://{}{}", addr, SEARCH_PATH);

    serve_on(listener, services).await
}

/// Serve on an already bound listener until Ctrl-C
pub async fn serve_on(listener: TcpListener, services: Arc<Services>) -> Result<()> {
    let app = build_router(services);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        // Without a signal handler, keep serving
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
