use std::time::Duration;

use sea_orm::IsolationLevel;

use crate::error::config::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    /// Upper bound on waiting for a pooled connection before a transaction can begin.
    pub acquire_timeout: Duration,
    /// Isolation level requested for every transaction opened by the crate.
    pub isolation_level: IsolationLevel,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let max_connections = match optional_var("DATABASE_MAX_CONNECTIONS") {
            Some(value) => parse_max_connections(&value)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let acquire_timeout = match optional_var("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(value) => parse_acquire_timeout(&value)?,
            None => Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        };

        let isolation_level = match optional_var("DATABASE_ISOLATION_LEVEL") {
            Some(value) => parse_isolation_level(&value)?,
            None => IsolationLevel::ReadCommitted,
        };

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout,
            isolation_level,
        })
    }
}

fn optional_var(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn parse_max_connections(value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(0) => Err(invalid("DATABASE_MAX_CONNECTIONS", "must be greater than 0")),
        Ok(max) => Ok(max),
        Err(e) => Err(invalid("DATABASE_MAX_CONNECTIONS", &e.to_string())),
    }
}

fn parse_acquire_timeout(value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| invalid("DATABASE_ACQUIRE_TIMEOUT_SECS", &e.to_string()))
}

/// Parses an isolation level such as `read-committed` or `SERIALIZABLE`.
pub fn parse_isolation_level(value: &str) -> Result<IsolationLevel, ConfigError> {
    let normalized = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");

    match normalized.as_str() {
        "read-uncommitted" => Ok(IsolationLevel::ReadUncommitted),
        "read-committed" => Ok(IsolationLevel::ReadCommitted),
        "repeatable-read" => Ok(IsolationLevel::RepeatableRead),
        "serializable" => Ok(IsolationLevel::Serializable),
        _ => Err(invalid(
            "DATABASE_ISOLATION_LEVEL",
            &format!(
                "unknown isolation level {:?}, expected one of read-uncommitted, \
                 read-committed, repeatable-read, serializable",
                value
            ),
        )),
    }
}

fn invalid(var: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}
