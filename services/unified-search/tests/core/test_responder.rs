//! Canned responses through the service container

use unified_search::core::catalog;
use unified_search::core::classifier::{classify, Bucket};
use unified_search::core::types::{SearchRequest, SearchResponse};

use crate::common::{create_test_services, CODE_QUERIES, GENERAL_QUERIES, SALES_QUERIES};

#[test]
fn test_sources_match_catalog_for_every_query() {
    let services = create_test_services();

    for query in SALES_QUERIES
        .iter()
        .chain(CODE_QUERIES)
        .chain(GENERAL_QUERIES)
    {
        let response = services.search.classify_and_respond(query);
        let expected = catalog::entry(classify(query)).sources();
        assert_eq!(response.sources(), expected.as_slice(), "query {query:?}");
    }
}

#[test]
fn test_sales_sources_include_jira_and_confluence() {
    let services = create_test_services();
    let response = services.search.classify_and_respond("sales forecast");

    let titles: Vec<&str> = response.sources().iter().map(|s| s.title.as_str()).collect();
    assert!(titles.iter().any(|t| t.contains("#401")));
    assert!(titles.iter().any(|t| t.starts_with("Confluence: Q4")));
}

#[test]
fn test_summary_echoes_query_verbatim() {
    let services = create_test_services();
    let query = "  Weird 'quotes' & <tags>  ";

    let response = services.search.classify_and_respond(query);
    assert_eq!(
        response.summary().unwrap(),
        catalog::entry(Bucket::General).summary_for(query)
    );
    assert!(response
        .summary()
        .unwrap()
        .starts_with("AI Summary for '  Weird 'quotes' & <tags>  ':"));
}

#[test]
fn test_responses_differ_only_in_echoed_query() {
    let services = create_test_services();

    let a = services.search.classify_and_respond("first general question");
    let b = services.search.classify_and_respond("another general question");

    assert_eq!(a.sources(), b.sources());
    let body_a = a.summary().unwrap().split_once("\n\n").unwrap().1;
    let body_b = b.summary().unwrap().split_once("\n\n").unwrap().1;
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn test_search_matches_classify_and_respond() {
    let services = create_test_services();

    let via_search = services
        .search
        .search(SearchRequest::new("github"))
        .await
        .unwrap();
    let direct = services.search.classify_and_respond("github");

    assert_eq!(via_search, direct);
    assert!(matches!(via_search, SearchResponse::Success { .. }));
}
