// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub resources: ResourcesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Debug mode startup flag; forces verbose request logging
    pub debug: bool,
    pub workers: Option<usize>,
}

/// Upstream cocktail API configuration
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Fixed search endpoint; the drink name is appended as the `s` parameter
    pub base_url: String,
    /// Bound on each outbound request, in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub default_content_type: String,
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Resource paths configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    /// Directory the frontend assets are served from
    pub static_dir: String,
    #[serde(default = "default_favicon_paths")]
    pub favicon_paths: Vec<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_favicon_paths() -> Vec<String> {
    vec!["/favicon.ico".to_string(), "/favicon.svg".to_string()]
}
