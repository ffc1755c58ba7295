//! Query command - classify a query without starting the server

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::classifier::Bucket;
use crate::core::services::Services;
use crate::core::types::SearchResponse;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the query command
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Query text, matched case-insensitively
    pub query: String,

    /// Only show source URIs
    #[arg(long)]
    pub uris_only: bool,
}

/// Query command output
#[derive(Debug, Serialize)]
pub struct QueryOutput {
    pub query: String,
    pub bucket: Bucket,
    #[serde(flatten)]
    pub response: SearchResponse,
}

/// Classify the query and build the command output
pub fn build_output(args: &QueryArgs, services: &Services) -> QueryOutput {
    let (bucket, response) = services.search.classify_with_bucket(&args.query);

    QueryOutput {
        query: args.query.clone(),
        bucket,
        response,
    }
}

/// Execute the query command
pub async fn execute(
    args: QueryArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = build_output(&args, services);

    match format {
        OutputFormat::Human => {
            let sources = output.response.sources();

            if args.uris_only {
                for source in sources {
                    println!("{}", colors::uri(&source.uri));
                }
                return Ok(());
            }

            println!(
                "{} {}\n",
                colors::label("Bucket:"),
                colors::bucket(output.bucket.as_str())
            );
            if let Some(summary) = output.response.summary() {
                println!("{summary}\n");
            }
            println!(
                "{} ({}):",
                colors::label("Sources"),
                colors::number(&sources.len().to_string())
            );
            for (i, source) in sources.iter().enumerate() {
                println!(
                    "  [{}] {}",
                    colors::rank(&(i + 1).to_string()),
                    colors::title(&source.title)
                );
                println!("      {}", colors::uri(&source.uri));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
