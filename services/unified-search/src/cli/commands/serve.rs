//! Serve command - run the HTTP search service

use crate::core::config::{resolved_config_path, Config, LogFormat};
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use crate::http;
use clap::Args;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "unified_search=info,tower_http=debug";

/// Arguments for the serve command
///
/// Each flag overrides the matching config value.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Simulated latency per request in milliseconds (0 disables)
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Reject requests without a `query` field (`--require-query=false` relaxes)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub require_query: Option<bool>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(latency) = self.latency_ms {
            config.search.latency_ms = latency;
        }
        if let Some(require_query) = self.require_query {
            config.search.require_query = require_query;
        }
    }
}

/// Initialize the global tracing subscriber
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Describe where the configuration came from
pub fn config_source(explicit: Option<&Path>) -> String {
    resolved_config_path(explicit)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string())
}

/// Execute the serve command
///
/// The subscriber needs the loaded log format, so paths resolved
/// while loading are logged here once it is installed.
pub async fn execute(
    services: &Arc<Services>,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(services.config.logging.format);

    tracing::info!("Starting unified search service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    XdgDirs::new().log_paths();
    tracing::info!("Config file: {}", config_source(config_path));
    services.config.log_config();

    http::serve(Arc::clone(services)).await?;
    Ok(())
}
