//! Application configuration loaded from environment variables.

use crate::error::{AppError, Result};
use std::env;
use std::str::FromStr;

/// Which `ResourceStore` implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackendKind {
    Memory,
    Postgres,
}

impl FromStr for StorageBackendKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(AppError::Config(format!(
                "Unknown STORAGE_BACKEND '{}', expected 'memory' or 'postgres'",
                other
            ))),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Server bind address (host:port)
    pub bind_address: String,

    /// Log level used when RUST_LOG is unset
    pub log_level: String,

    /// Storage backend selected at startup
    pub storage_backend: StorageBackendKind,

    /// Database connection URL (required for the postgres backend)
    pub database_url: Option<String>,

    /// Upper bound on pooled database connections
    pub database_max_connections: u32,

    /// Insert the sample catalog when the store is empty
    pub seed_on_startup: bool,

    /// Allowed CORS origins; any origin when unset
    pub cors_origins: Option<Vec<String>>,
}

redacted_debug!(Config {
    show bind_address,
    show log_level,
    show storage_backend,
    redact_option database_url,
    show database_max_connections,
    show seed_on_startup,
    show cors_origins,
});

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".into(),
            log_level: "info".into(),
            storage_backend: StorageBackendKind::Memory,
            database_url: None,
            database_max_connections: 10,
            seed_on_startup: true,
            cors_origins: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL");
        let storage_backend = match get("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None if database_url.is_some() => StorageBackendKind::Postgres,
            None => StorageBackendKind::Memory,
        };

        if storage_backend == StorageBackendKind::Postgres && database_url.is_none() {
            return Err(AppError::Config(
                "DATABASE_URL must be set for the postgres storage backend".into(),
            ));
        }

        Ok(Self {
            bind_address: get("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
            storage_backend,
            database_url,
            database_max_connections: parse_or(
                get("DATABASE_MAX_CONNECTIONS"),
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            seed_on_startup: match get("SEED_ON_STARTUP") {
                Some(v) => parse_bool(&v, "SEED_ON_STARTUP")?,
                None => defaults.seed_on_startup,
            },
            cors_origins: get("CORS_ORIGINS").map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> Result<T> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid {} value: {}", key, v))),
        None => Ok(default),
    }
}

fn parse_bool(value: &str, key: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!("Invalid {} value: {}", key, value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_use_memory_backend() {
        let config = load(&[]).unwrap();
        assert_eq!(config.storage_backend, StorageBackendKind::Memory);
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert!(config.seed_on_startup);
        assert_eq!(config.database_max_connections, 10);
    }

    #[test]
    fn test_database_url_selects_postgres() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/hub")]).unwrap();
        assert_eq!(config.storage_backend, StorageBackendKind::Postgres);
    }

    #[test]
    fn test_explicit_memory_overrides_database_url() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/hub"),
            ("STORAGE_BACKEND", "memory"),
        ])
        .unwrap();
        assert_eq!(config.storage_backend, StorageBackendKind::Memory);
    }

    #[test]
    fn test_postgres_without_url_is_config_error() {
        let err = load(&[("STORAGE_BACKEND", "postgres")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(load(&[("STORAGE_BACKEND", "mongo")]).is_err());
    }

    #[test]
    fn test_invalid_numbers_and_bools_rejected() {
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "lots")]).is_err());
        assert!(load(&[("SEED_ON_STARTUP", "maybe")]).is_err());
        assert!(!load(&[("SEED_ON_STARTUP", "off")]).unwrap().seed_on_startup);
    }

    #[test]
    fn test_cors_origins_split() {
        let config = load(&[("CORS_ORIGINS", "http://a.test, http://b.test,")]).unwrap();
        assert_eq!(
            config.cors_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = load(&[("DATABASE_URL", "postgres://user:hunter2@db/hub")]).unwrap();
        let output = format!("{:?}", config);
        assert!(!output.contains("hunter2"));
        assert!(output.contains("[REDACTED]"));
    }
}
