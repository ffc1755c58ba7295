// Common test utilities and fixtures

pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{ConfigFile, CODE_QUERIES, GENERAL_QUERIES, SALES_QUERIES};
#[allow(unused_imports)]
pub use helpers::{
    body_json, create_test_app, create_test_app_with, create_test_services, post_search,
    test_config,
};
