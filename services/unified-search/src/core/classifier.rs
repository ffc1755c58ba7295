//! Keyword classification of incoming queries.
//!
//! A query is lowercased and matched against each bucket's keywords
//! in priority order; the first bucket with a matching substring
//! wins and anything unmatched falls through to `General`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification outcome for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    SalesQ4,
    CodeReview,
    General,
}

/// Keyword rules, checked top to bottom
const RULES: &[(Bucket, &[&str])] = &[
    (Bucket::SalesQ4, &["sales", "q4"]),
    (Bucket::CodeReview, &["github", "code"]),
];

impl Bucket {
    /// All buckets in priority order
    pub const ALL: [Bucket; 3] = [Bucket::SalesQ4, Bucket::CodeReview, Bucket::General];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::SalesQ4 => "sales_q4",
            Bucket::CodeReview => "code_review",
            Bucket::General => "general",
        }
    }

    /// Keywords that select this bucket (empty for the fallback)
    pub fn keywords(&self) -> &'static [&'static str] {
        RULES
            .iter()
            .find(|(bucket, _)| bucket == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a query into a bucket
///
/// Total over all inputs: the empty string is `General`.
pub fn classify(query: &str) -> Bucket {
    let lowered = query.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(bucket, _)| *bucket)
        .unwrap_or(Bucket::General)
}
