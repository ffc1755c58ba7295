//! Tests for the query command

use unified_search::cli::commands::query::{build_output, execute, QueryArgs};
use unified_search::cli::OutputFormat;
use unified_search::core::classifier::Bucket;

use crate::common::create_test_services;

fn args(query: &str) -> QueryArgs {
    QueryArgs {
        query: query.to_string(),
        uris_only: false,
    }
}

#[test]
fn test_build_output_sales() {
    let services = create_test_services();
    let output = build_output(&args("What's our Q4 sales plan?"), &services);

    assert_eq!(output.bucket, Bucket::SalesQ4);
    assert_eq!(output.query, "What's our Q4 sales plan?");
    assert_eq!(output.response.sources().len(), 7);
}

#[test]
fn test_output_json_shape() {
    let services = create_test_services();
    let output = build_output(&args("github"), &services);

    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(value["bucket"], "code_review");
    assert_eq!(value["status"], "success");
    assert_eq!(value["query"], "github");
    assert_eq!(value["sources"][0]["uri"], "https://github.com/repo/v2-pr");
    assert!(value["summary"]
        .as_str()
        .unwrap()
        .starts_with("AI Summary for 'github':"));
}

#[tokio::test]
async fn test_execute_human_and_json() {
    let services = create_test_services();

    assert!(execute(args("hello"), &services, OutputFormat::Human)
        .await
        .is_ok());
    assert!(execute(args("hello"), &services, OutputFormat::Json)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_execute_uris_only() {
    let services = create_test_services();
    let args = QueryArgs {
        query: "code".to_string(),
        uris_only: true,
    };

    assert!(execute(args, &services, OutputFormat::Human).await.is_ok());
}
