//! Configuration management for the unified search service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SearchError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Upper bound for the simulated latency
pub const MAX_LATENCY_MS: u64 = 60_000;

/// Legacy config file looked up in the working directory
const LOCAL_CONFIG_FILE: &str = "unified-search.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Cross-origin policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; `"*"` allows any origin
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

/// Search behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Artificial delay before each response, in milliseconds (0 disables)
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Reject requests without a `query` field instead of using a placeholder
    #[serde(default)]
    pub require_query: bool,
}

/// Logging output
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(SearchError::ConfigError(format!(
                "Unknown log format '{other}' (expected 'pretty' or 'json')"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_latency_ms() -> u64 {
    1000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            require_query: false,
        }
    }
}

impl CorsConfig {
    /// True when every origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SearchError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// `explicit` is the path given on the command line, if any.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(explicit, &xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File priority order:
    /// 1. Path given on the command line
    /// 2. UNIFIED_SEARCH_CONFIG env var
    /// 3. XDG config file (~/.config/unified-search/config.toml)
    /// 4. ./unified-search.toml
    /// 5. Defaults
    pub fn load_with_xdg(explicit: Option<&Path>, xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Ok(config_path) = env::var("UNIFIED_SEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new(LOCAL_CONFIG_FILE).exists() {
                Self::from_file(LOCAL_CONFIG_FILE)?
            } else {
                Self::default()
            }
        };

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// Unparseable numeric values are ignored; an unknown log format
    /// is reported as an error.
    pub fn merge_env(&mut self) -> Result<()> {
        // Server configuration
        if let Ok(host) = env::var("UNIFIED_SEARCH_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("UNIFIED_SEARCH_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // CORS configuration
        if let Ok(origins) = env::var("UNIFIED_SEARCH_CORS_ORIGINS") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        // Search configuration
        if let Ok(latency) = env::var("UNIFIED_SEARCH_LATENCY_MS") {
            if let Ok(ms) = latency.parse() {
                self.search.latency_ms = ms;
            }
        }
        if let Ok(require) = env::var("UNIFIED_SEARCH_REQUIRE_QUERY") {
            if let Ok(r) = require.parse() {
                self.search.require_query = r;
            }
        }

        // Logging configuration
        if let Ok(format) = env::var("UNIFIED_SEARCH_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(SearchError::ConfigError(
                "Server host must not be empty".to_string(),
            ));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(SearchError::ConfigError(
                "At least one CORS origin must be allowed".to_string(),
            ));
        }

        if self.cors.allows_any_origin() && self.cors.allowed_origins.len() > 1 {
            return Err(SearchError::ConfigError(
                "Wildcard origin '*' cannot be combined with explicit origins".to_string(),
            ));
        }

        for origin in &self.cors.allowed_origins {
            if origin == "*" {
                continue;
            }
            let valid = (origin.starts_with("http://") || origin.starts_with("https://"))
                && !origin.ends_with('/')
                && !origin.chars().any(char::is_whitespace);
            if !valid {
                return Err(SearchError::ConfigError(format!(
                    "Invalid CORS origin '{origin}' (expected scheme://host[:port])"
                )));
            }
        }

        if self.search.latency_ms > MAX_LATENCY_MS {
            return Err(SearchError::ConfigError(format!(
                "Latency must not exceed {MAX_LATENCY_MS} ms"
            )));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bind address: {}", self.server.bind_addr());
        tracing::info!("  CORS origins: {:?}", self.cors.allowed_origins);
        tracing::info!("  Simulated latency: {} ms", self.search.latency_ms);
        tracing::info!("  Require query field: {}", self.search.require_query);
        tracing::info!("  Log format: {}", self.logging.format);
    }
}

/// Resolve the config file that `load` would read, for display purposes
pub fn resolved_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = env::var("UNIFIED_SEARCH_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let xdg_config = XdgDirs::new().config_file();
    if xdg_config.exists() {
        return Some(xdg_config);
    }
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    local.exists().then_some(local)
}
