//! Classification properties over the public API

use unified_search::core::classifier::{classify, Bucket};

use crate::common::{CODE_QUERIES, GENERAL_QUERIES, SALES_QUERIES};

#[test]
fn test_sales_queries() {
    for query in SALES_QUERIES {
        assert_eq!(classify(query), Bucket::SalesQ4, "query {query:?}");
    }
}

#[test]
fn test_code_queries() {
    for query in CODE_QUERIES {
        assert_eq!(classify(query), Bucket::CodeReview, "query {query:?}");
    }
}

#[test]
fn test_general_queries() {
    for query in GENERAL_QUERIES {
        assert_eq!(classify(query), Bucket::General, "query {query:?}");
    }
}

#[test]
fn test_case_insensitive_for_every_keyword() {
    for bucket in [Bucket::SalesQ4, Bucket::CodeReview] {
        for keyword in bucket.keywords() {
            let upper = keyword.to_uppercase();
            let mixed = format!("prefix {upper} suffix");
            assert_eq!(classify(&upper), bucket);
            assert_eq!(classify(&mixed), bucket);
        }
    }
}

#[test]
fn test_sales_keyword_always_wins() {
    for sales in Bucket::SalesQ4.keywords() {
        for code in Bucket::CodeReview.keywords() {
            assert_eq!(classify(&format!("{code} {sales}")), Bucket::SalesQ4);
            assert_eq!(classify(&format!("{sales} {code}")), Bucket::SalesQ4);
        }
    }
}

#[test]
fn test_keyword_split_by_space_does_not_match() {
    assert_eq!(classify("q 4"), Bucket::General);
    assert_eq!(classify("git hub"), Bucket::General);
}
