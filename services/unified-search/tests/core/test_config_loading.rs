//! Configuration loading from files and environment

use serial_test::serial;
use std::env;
use std::path::Path;
use unified_search::core::config::{Config, LogFormat};
use unified_search::core::services::Services;

use crate::common::ConfigFile;

const ENV_VARS: &[&str] = &[
    "UNIFIED_SEARCH_CONFIG",
    "UNIFIED_SEARCH_HOST",
    "UNIFIED_SEARCH_PORT",
    "UNIFIED_SEARCH_LATENCY_MS",
    "UNIFIED_SEARCH_REQUIRE_QUERY",
    "UNIFIED_SEARCH_CORS_ORIGINS",
    "UNIFIED_SEARCH_LOG_FORMAT",
];

fn clear_env_vars() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_explicit_file() {
    clear_env_vars();
    let file = ConfigFile::new(
        r#"
        [server]
        host = "127.0.0.1"
        port = 8123

        [search]
        latency_ms = 0
        require_query = true

        [logging]
        format = "json"
        "#,
    );

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.server.bind_addr(), "127.0.0.1:8123");
    assert_eq!(config.search.latency_ms, 0);
    assert!(config.search.require_query);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.cors.allows_any_origin());

    let services = Services::new(config);
    assert!(services.search.latency().is_zero());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env_vars();
    let file = ConfigFile::new("[server]\nport = 8123\n");
    env::set_var("UNIFIED_SEARCH_PORT", "9999");
    env::set_var("UNIFIED_SEARCH_REQUIRE_QUERY", "true");

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.server.port, 9999);
    assert!(config.search.require_query);

    clear_env_vars();
}

#[test]
#[serial]
fn test_config_env_var_selects_file() {
    clear_env_vars();
    let file = ConfigFile::new("[search]\nlatency_ms = 42\n");
    env::set_var("UNIFIED_SEARCH_CONFIG", file.path());

    let config = Config::load(None).unwrap();
    assert_eq!(config.search.latency_ms, 42);

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_file_is_config_error() {
    clear_env_vars();

    let err = Config::load(Some(Path::new("/nonexistent/unified-search.toml"))).unwrap_err();
    assert!(err.is_config());
}

#[test]
#[serial]
fn test_invalid_toml_is_config_error() {
    clear_env_vars();
    let file = ConfigFile::new("[server\nport = ");

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(err.is_config());
}

#[test]
#[serial]
fn test_file_failing_validation() {
    clear_env_vars();
    let file = ConfigFile::new("[search]\nlatency_ms = 120000\n");

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(err.message().contains("Latency"));
}

#[test]
#[serial]
fn test_env_origins_failing_validation() {
    clear_env_vars();
    let file = ConfigFile::new("");
    env::set_var("UNIFIED_SEARCH_CORS_ORIGINS", "*,http://localhost:3000");

    assert!(Config::load(Some(file.path())).is_err());

    clear_env_vars();
}
