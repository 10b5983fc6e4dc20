//! Configuration loader for the `fitness-dashboard` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). The resulting [`Config`] is handed to the fetch
//! gateway at construction; nothing else in the crate reads the environment.
use std::{env, fmt, str::FromStr};

use anyhow::{anyhow, Result};

/// Base URL used for live mode when `API_BASE_URL` is not set in mock mode.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u16 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u16>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse a required string environment variable.
macro_rules! require_env {
    ($var_name:expr) => {
        env::var($var_name)
            .map_err(|_| anyhow!("{} must be set in .env or environment", $var_name))?
    };
}

/// Where raw payloads come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataMode {
    /// Static in-memory fixtures, no network I/O.
    #[default]
    Mock,
    /// HTTP GET against `api_base_url`.
    Live,
}

impl FromStr for DataMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        // ---
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(DataMode::Mock),
            "live" => Ok(DataMode::Live),
            other => Err(anyhow!("Invalid DATA_MODE: {other} (expected 'mock' or 'live')")),
        }
    }
}

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataMode::Mock => f.write_str("mock"),
            DataMode::Live => f.write_str("live"),
        }
    }
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Mock fixtures or live backend.
    pub data_mode: DataMode,

    /// Live backend base URL, without trailing slash.
    pub api_base_url: String,

    /// Port the HTTP server listens on.
    pub bind_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        // ---
        Config {
            data_mode: DataMode::Mock,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            bind_port: 8080,
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `DATA_MODE` – `mock` or `live` (default: mock)
/// - `API_BASE_URL` – backend base URL (required when `DATA_MODE=live`)
/// - `BIND_PORT` – HTTP listen port (default: 8080)
///
/// Returns an error if any variable is present but invalid, or if live mode
/// is selected without a base URL.
pub fn load_from_env() -> Result<Config> {
    // ---
    let data_mode = match env::var("DATA_MODE") {
        Ok(v) => v.parse::<DataMode>()?,
        Err(_) => DataMode::default(),
    };

    let api_base_url = match data_mode {
        DataMode::Live => require_env!("API_BASE_URL"),
        DataMode::Mock => {
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
        }
    };
    let bind_port = parse_env_u16!("BIND_PORT", 8080);

    Ok(Config {
        data_mode,
        api_base_url: api_base_url.trim_end_matches('/').to_string(),
        bind_port,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  DATA_MODE    : {}", self.data_mode);
        tracing::info!("  API_BASE_URL : {}", self.api_base_url);
        tracing::info!("  BIND_PORT    : {}", self.bind_port);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_data_mode_parsing() {
        // ---
        assert_eq!("mock".parse::<DataMode>().unwrap(), DataMode::Mock);
        assert_eq!(" LIVE ".parse::<DataMode>().unwrap(), DataMode::Live);
        assert!("offline".parse::<DataMode>().is_err());
    }

    #[test]
    fn test_default_config_is_mock() {
        // ---
        let cfg = Config::default();
        assert_eq!(cfg.data_mode, DataMode::Mock);
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.bind_port, 8080);
    }
}
