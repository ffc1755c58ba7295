//! Unified Search - mock search backend
//!
//! Runs the HTTP service by default; see `--help` for the other
//! commands.
//!
//! # Examples
//!
//! ```bash
//! # Serve on the configured port (8000 by default)
//! unified-search
//!
//! # Serve without the simulated latency
//! unified-search serve --port 9000 --latency-ms 0
//!
//! # Classify a query offline
//! unified-search query "What's our Q4 sales plan?"
//! ```

use clap::Parser;
use unified_search::cli::{output, run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
