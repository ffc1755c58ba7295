//! Config command - show current configuration

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::{resolved_config_path, Config};
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the configuration as TOML instead of the summary view
    #[arg(long)]
    pub toml: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// File the configuration was read from, if any
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: Config,
}

/// Build the command output
pub fn build_response(services: &Services, explicit: Option<&Path>) -> ConfigResponse {
    ConfigResponse {
        config_file: resolved_config_path(explicit).map(|p| p.to_string_lossy().into_owned()),
        config: (*services.config).clone(),
    }
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    explicit: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(services, explicit);

    if args.toml {
        print!("{}", toml::to_string_pretty(&response.config)?);
        return Ok(());
    }

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            println!("{}", colors::label("Configuration:"));
            println!(
                "  config_file: {}",
                response
                    .config_file
                    .as_deref()
                    .map(|f| colors::file_path(f).to_string())
                    .unwrap_or_else(|| colors::dim("(defaults)").to_string())
            );
            println!("  server:");
            println!("    host: {}", config.server.host);
            println!("    port: {}", colors::number(&config.server.port.to_string()));
            println!("  cors:");
            println!("    allowed_origins: {:?}", config.cors.allowed_origins);
            println!("  search:");
            println!(
                "    latency: {}",
                format_duration(config.search.latency_ms as f64 / 1000.0)
            );
            println!("    require_query: {}", config.search.require_query);
            println!("  logging:");
            println!("    format: {}", config.logging.format);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
