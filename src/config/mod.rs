// Configuration module entry point
// Loads layered configuration and owns the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, PerformanceConfig, ResourcesConfig, ServerConfig,
    UpstreamConfig,
};

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.debug", false)?
            .set_default(
                "upstream.base_url",
                "https://www.thecocktaildb.com/api/json/v1/1/search.php",
            )?
            .set_default("upstream.timeout_secs", 5)?
            .set_default("upstream.user_agent", "cocktail-relay/0.1")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.default_content_type", "text/html; charset=utf-8")?
            .set_default("http.server_name", "CocktailRelay/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("resources.static_dir", "static")?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;
        cfg.apply_debug_mode();
        Ok(cfg)
    }

    /// Load configuration from the default "config" file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Debug mode implies verbose request logging
    pub fn apply_debug_mode(&mut self) {
        if self.server.debug {
            self.logging.access_log = true;
            self.logging.show_headers = true;
        }
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("no_such_config_file").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 5000);
        assert!(!cfg.server.debug);
        assert_eq!(cfg.upstream.timeout_secs, 5);
        assert!(cfg.upstream.base_url.contains("thecocktaildb.com"));
        assert_eq!(cfg.resources.static_dir, "static");
        assert!(cfg.resources.favicon_paths.iter().any(|p| p == "/favicon.svg"));
    }

    #[test]
    fn test_socket_addr_parsing() {
        let cfg = Config::load_from("no_such_config_file").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert!(addr.is_ipv4());
        assert_eq!(addr.port(), 5000);
    }

    #[test]
    fn test_debug_mode_forces_verbose_logging() {
        let mut cfg = Config::load_from("no_such_config_file").unwrap();
        cfg.server.debug = true;
        cfg.logging.access_log = false;
        cfg.logging.show_headers = false;
        cfg.apply_debug_mode();
        assert!(cfg.logging.access_log);
        assert!(cfg.logging.show_headers);
    }
}
