//! Configuration module for the map backend.
//!
//! All configuration is loaded from environment variables with sensible
//! defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Base URL of the hosted record store
    pub store_url: String,
    /// API key for the hosted record store
    pub store_key: String,
    /// Directory holding the built frontend and the boundary GeoJSON
    pub static_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BMAP_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid BMAP_BIND_ADDR format");

        let store_url =
            env::var("BMAP_STORE_URL").unwrap_or_else(|_| "http://127.0.0.1:54321".to_string());

        let store_key = env::var("BMAP_STORE_KEY").unwrap_or_default();

        let static_dir = env::var("BMAP_STATIC_DIR")
            .unwrap_or_else(|_| "./dist".to_string())
            .into();

        let log_level = env::var("BMAP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            bind_addr,
            store_url,
            store_key,
            static_dir,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        env::remove_var("BMAP_BIND_ADDR");
        env::remove_var("BMAP_STORE_URL");
        env::remove_var("BMAP_STORE_KEY");
        env::remove_var("BMAP_STATIC_DIR");
        env::remove_var("BMAP_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.store_url, "http://127.0.0.1:54321");
        assert!(config.store_key.is_empty());
        assert_eq!(config.static_dir, PathBuf::from("./dist"));
        assert_eq!(config.log_level, "info");
    }
}
