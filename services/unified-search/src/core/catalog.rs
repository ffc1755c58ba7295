//! Canned summaries and source lists, one entry per bucket.
//!
//! The table is static data: nothing here depends on the query
//! beyond the echoed text spliced into the summary heading.

use crate::core::classifier::Bucket;
use crate::core::types::Source;

/// A citation in the static table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceEntry {
    pub title: &'static str,
    pub uri: &'static str,
}

impl From<&SourceEntry> for Source {
    fn from(entry: &SourceEntry) -> Self {
        Source {
            title: entry.title.to_string(),
            uri: entry.uri.to_string(),
        }
    }
}

/// Canned payload for one bucket
#[derive(Debug)]
pub struct CatalogEntry {
    pub bucket: Bucket,
    /// Summary paragraph following the heading line
    pub body: &'static str,
    pub sources: &'static [SourceEntry],
}

impl CatalogEntry {
    /// Full summary text for `query`
    pub fn summary_for(&self, query: &str) -> String {
        format!("AI Summary for '{query}':\n\n{}", self.body)
    }

    /// Owned copies of the sources, in table order
    pub fn sources(&self) -> Vec<Source> {
        self.sources.iter().map(Source::from).collect()
    }
}

const SALES_Q4: CatalogEntry = CatalogEntry {
    bucket: Bucket::SalesQ4,
    body: "The Q4 strategy pivots on three key initiatives derived from the retrieved documents \
(Jira #401, Confluence Draft, and Drive Budget). The core focus is **market expansion** into the \
APAC region (Confluence). Resource allocation, as detailed in the Drive Budget, shows a 15% increase \
in marketing spend directed at digital channels. The primary bottleneck, identified in Jira #401, is \
the final integration of the new payment gateway, scheduled for completion by Nov 15th. All teams \
must align with the target KPIs defined in the Confluence document.",
    sources: &[
        SourceEntry {
            title: "Jira: Feature Implemention Ticket #401 (Payment Gateway)",
            uri: "https://jira.example.com/T401",
        },
        SourceEntry {
            title: "Confluence: Q4 Marketing Strategy Draft",
            uri: "https://confluence.example.com/Q4-Mktg-vF",
        },
        SourceEntry {
            title: "Google Drive: FY24 Quarterly Budget Planning",
            uri: "https://drive.google.com/budget-FY24",
        },
        SourceEntry {
            title: "SharePoint: Sales Training Material V5",
            uri: "https://sharepoint.example.com/Sales-V5",
        },
        SourceEntry {
            title: "GitHub: Sales Funnel API Documentation",
            uri: "https://github.com/api-docs/sales",
        },
        SourceEntry {
            title: "Jira: Follow-up Task for Q4 Budget",
            uri: "https://jira.example.com/T402",
        },
        SourceEntry {
            title: "Confluence: Marketing Team Roster",
            uri: "https://confluence.example.com/team-roster",
        },
    ],
};

const CODE_REVIEW: CatalogEntry = CatalogEntry {
    bucket: Bucket::CodeReview,
    body: "The requested code analysis (based on the GitHub PR and backend service docs) indicates \
the microservice architecture utilizes Python's FastAPI framework for high concurrency. The most \
recent Pull Request (v2) introduces an optimized caching layer using Redis, significantly reducing \
latency by 40%. Engineers must review the updated service documentation before deploying to staging \
to ensure proper logging configuration.",
    sources: &[
        SourceEntry {
            title: "GitHub: Backend Service v2 Pull Request",
            uri: "https://github.com/repo/v2-pr",
        },
        SourceEntry {
            title: "Confluence: Backend Service Documentation",
            uri: "https://confluence.example.com/Backend-Docs",
        },
        SourceEntry {
            title: "Jira: Performance Enhancement Epic #120",
            uri: "https://jira.example.com/E120",
        },
        SourceEntry {
            title: "GitHub: Readme File - Installation Guide",
            uri: "https://github.com/repo/readme",
        },
        SourceEntry {
            title: "Google Drive: Architecture Diagram (v2)",
            uri: "https://drive.google.com/arch-v2",
        },
    ],
};

const GENERAL: CatalogEntry = CatalogEntry {
    bucket: Bucket::General,
    body: "The search successfully retrieved multiple artifacts across various platforms related to \
your general query. The overall context suggests ongoing effort in documentation standardization and \
cross-team communication improvement. Please refine your query for a more focused and actionable summary.",
    sources: &[
        SourceEntry {
            title: "Jira: General Documentation Cleanup Project",
            uri: "https://jira.example.com/DCP-1",
        },
        SourceEntry {
            title: "SharePoint: Cross-Departmental Communication Protocol",
            uri: "https://sharepoint.example.com/Comms",
        },
        SourceEntry {
            title: "Confluence: Team Onboarding Checklist 2024",
            uri: "https://confluence.example.com/onboarding-24",
        },
        SourceEntry {
            title: "Jira: Quarterly Review Task List",
            uri: "https://jira.example.com/QR-Task",
        },
    ],
};

static CATALOG: [CatalogEntry; 3] = [SALES_Q4, CODE_REVIEW, GENERAL];

/// Look up the canned payload for a bucket
pub fn entry(bucket: Bucket) -> &'static CatalogEntry {
    match bucket {
        Bucket::SalesQ4 => &CATALOG[0],
        Bucket::CodeReview => &CATALOG[1],
        Bucket::General => &CATALOG[2],
    }
}

/// Every entry, in bucket priority order
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}
