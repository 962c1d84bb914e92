//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;

/// API server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: IpAddr,

    /// HTTP port
    pub port: u16,

    /// Origins allowed to call the API from a browser
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            cors_allowed_origins: vec!["http://localhost:8001".to_string()],
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; `load` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let host = match lookup("API_HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("API_HOST".to_string()))?,
            None => defaults.host,
        };

        let port = match lookup("API_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("API_PORT".to_string()))?,
            None => defaults.port,
        };

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => defaults.cors_allowed_origins,
        };

        Ok(ApiConfig {
            host,
            port,
            cors_allowed_origins,
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Allowed origins as header values for the CORS layer.
    pub fn origin_header_values(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.cors_allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidValue("CORS_ALLOWED_ORIGINS".to_string()))
            })
            .collect()
    }
}

/// Splits a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        return Err(ConfigError::MissingRequired(
            "CORS_ALLOWED_ORIGINS".to_string(),
        ));
    }

    for origin in &origins {
        if HeaderValue::from_str(origin).is_err() {
            return Err(ConfigError::InvalidValue(
                "CORS_ALLOWED_ORIGINS".to_string(),
            ));
        }
    }

    Ok(origins)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:8001"]);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "9000"),
            (
                "CORS_ALLOWED_ORIGINS",
                "http://localhost:8001, https://shop.example.com,",
            ),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:8001", "https://shop.example.com"]
        );
        assert_eq!(config.origin_header_values().unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_port() {
        let err = ApiConfig::from_lookup(lookup(&[("API_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key) if key == "API_PORT"));
    }

    #[test]
    fn test_invalid_host() {
        assert!(ApiConfig::from_lookup(lookup(&[("API_HOST", "not-an-ip")])).is_err());
    }

    #[test]
    fn test_empty_origin_list() {
        let err = ApiConfig::from_lookup(lookup(&[("CORS_ALLOWED_ORIGINS", " , ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
    }
}
