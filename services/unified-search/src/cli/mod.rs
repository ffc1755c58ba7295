//! CLI adapter for unified search
//!
//! Provides the command line: running the HTTP service, classifying
//! a query offline and inspecting configuration. This module is
//! parallel to `http/` - both depend on `core/` but not on each other
//! (the `serve` command only calls into `http::serve`).
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

/// Unified Search - mock search backend
///
/// Answers free-text queries with canned, keyword-matched summaries and
/// source citations so a frontend can be built before the real backend.
#[derive(Parser, Debug)]
#[command(name = "unified-search")]
#[command(version)]
#[command(about = "Mock unified search backend", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Command to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP search service
    Serve(commands::ServeArgs),

    /// Classify a query and print the canned response
    Query(commands::QueryArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  unified-search completions bash > ~/.local/share/bash-completion/completions/unified-search
    ///   zsh:   unified-search completions zsh > ~/.zfunc/_unified-search
    ///   fish:  unified-search completions fish > ~/.config/fish/completions/unified-search.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Serve(commands::ServeArgs::default()));

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let mut config = Config::load(cli.config.as_deref())?;

    if let Commands::Serve(ref args) = command {
        args.apply(&mut config);
        config.validate()?;
    }

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match command {
        Commands::Serve(_) => {
            commands::serve::execute(&services, cli.config.as_deref()).await
        }
        Commands::Query(args) => commands::query::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => {
            commands::config::execute(args, &services, cli.config.as_deref(), cli.format).await
        }
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
