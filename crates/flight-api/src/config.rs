//! # API Configuration
//!
//! Environment-based configuration for the dashboard API service.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub server_addr: SocketAddr,

    /// CSV export of the flight-route dataset
    pub data_path: PathBuf,

    /// Airport selected when a request does not name one
    pub default_airport: String,

    /// Year selected when a request does not name one
    pub default_year: i32,

    /// Ranking size when a request does not name one
    pub top_n: i64,

    /// Logging level
    pub log_level: String,

    /// CORS allowed origins
    pub cors_origins: Vec<String>,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server_addr: parsed(&lookup, "SERVER_ADDR", "0.0.0.0:8080")?,

            data_path: lookup("DATA_PATH")
                .unwrap_or_else(|| "Airports.csv".to_string())
                .into(),

            default_airport: lookup("DEFAULT_AIRPORT").unwrap_or_else(|| "ORD".to_string()),

            default_year: parsed(&lookup, "DEFAULT_YEAR", "2000")?,

            top_n: parsed(&lookup, "TOP_N", "10")?,

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            cors_origins: lookup("CORS_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }
}

fn parsed<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server_addr.port(), 8080);
        assert_eq!(config.data_path, PathBuf::from("Airports.csv"));
        assert_eq!(config.default_airport, "ORD");
        assert_eq!(config.default_year, 2000);
        assert_eq!(config.top_n, 10);
        assert_eq!(config.cors_origins, vec!["*"]);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_ADDR", "127.0.0.1:9000"),
            ("DEFAULT_YEAR", "2005"),
            ("DEFAULT_AIRPORT", "ATL"),
            ("CORS_ORIGINS", "http://a.test, http://b.test"),
        ]))
        .unwrap();
        assert_eq!(config.server_addr.port(), 9000);
        assert_eq!(config.default_year, 2005);
        assert_eq!(config.default_airport, "ATL");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let err = Config::from_lookup(lookup_from(&[("DEFAULT_YEAR", "two thousand")])).unwrap_err();
        assert!(err.to_string().contains("DEFAULT_YEAR"));
    }
}
