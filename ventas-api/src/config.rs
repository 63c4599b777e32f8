//! Server configuration

use std::time::Duration;

use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// MySQL connection URL of the warehouse
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// How long a request waits for a pooled connection
    pub acquire_timeout: Duration,
    /// Per-session `MAX_EXECUTION_TIME` in milliseconds, 0 disables it
    pub statement_timeout_ms: u64,
    /// Include driver error text in the one report that historically exposed it
    pub expose_error_detail: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let is_development = environment == "development";

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .filter(|s| !s.is_empty())
                .ok_or(ConfigError::Missing("DATABASE_URL"))?,
            http_port: parse_or(&lookup, "HTTP_PORT", 3000)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout: Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?),
            statement_timeout_ms: parse_or(&lookup, "STATEMENT_TIMEOUT_MS", 30_000)?,
            expose_error_detail: parse_bool_or(&lookup, "EXPOSE_ERROR_DETAIL", is_development)?,
            environment,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

fn parse_bool_or<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { name, value }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_database_url_required() {
        assert!(matches!(load(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "mysql://localhost/ventas")]).unwrap();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.statement_timeout_ms, 30_000);
        assert!(config.expose_error_detail);
    }

    #[test]
    fn test_error_detail_hidden_outside_development() {
        let config = load(&[
            ("DATABASE_URL", "mysql://localhost/ventas"),
            ("ENVIRONMENT", "production"),
        ])
        .unwrap();
        assert!(!config.expose_error_detail);

        let config = load(&[
            ("DATABASE_URL", "mysql://localhost/ventas"),
            ("ENVIRONMENT", "production"),
            ("EXPOSE_ERROR_DETAIL", "true"),
        ])
        .unwrap();
        assert!(config.expose_error_detail);
    }

    #[test]
    fn test_invalid_port_reported() {
        let err = load(&[
            ("DATABASE_URL", "mysql://localhost/ventas"),
            ("HTTP_PORT", "http"),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "HTTP_PORT has an invalid value: http");
    }
}
