//! Runtime configuration for the catalog client
//!
//! Everything is read from environment variables with logged fallbacks to
//! defaults, so an embedding shell works out of the box against a local
//! backend.

use std::env;

use log::{info, warn};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the marketplace API (no trailing slash required)
    pub api_base_url: String,
    /// Timeout applied to every listing request
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_base_url: env_or("SERVICEPRO_API_URL", DEFAULT_API_BASE_URL),
            http_timeout_secs: parse_env_or(
                "SERVICEPRO_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            info!("{} not set, using default: {}", key, default);
            default.to_string()
        }
    }
}

fn parse_env_or(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {} value {:?}: {}, using default {}", key, value, e, default);
            default
        }),
        Err(_) => {
            info!("{} not set, using default: {}", key, default);
            default
        }
    }
}
