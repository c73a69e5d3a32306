//! Runtime configuration for the HTTP server
//!
//! Values come from environment variables with sane defaults.
//! Railway-style hosts set PORT, local runs use TRAC_PORT.

use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};

use super::errors::{AppError, AppResult};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Directory holding index.html and other UI assets
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("TRAC_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT").or_else(|| lookup("TRAC_PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::invalid_config("PORT", &raw))?,
            None => DEFAULT_PORT,
        };

        let static_dir = lookup("TRAC_STATIC_DIR")
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        if !static_dir.join("index.html").exists() {
            warn!("⚠️ No index.html under {} - UI will return 404", static_dir.display());
        }

        info!("⚙️ Config loaded: {}:{} (static: {})", host, port, static_dir.display());

        Ok(Self {
            host,
            port,
            static_dir,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> AppResult<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| AppError::invalid_config("TRAC_HOST", &self.host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_port_precedence() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("TRAC_PORT", "9000")]))
                .unwrap();
        assert_eq!(config.port, 8080);

        let config = ServerConfig::from_lookup(lookup_from(&[("TRAC_PORT", "9000")])).unwrap();
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert_eq!(err.code_str(), "CFG_INVALID_VALUE");
    }

    #[test]
    fn test_invalid_host_is_error() {
        let config = ServerConfig::from_lookup(lookup_from(&[("TRAC_HOST", "bad host")])).unwrap();
        assert!(config.bind_addr().is_err());
    }
}
