use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_INACTIVITY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Mark the session cookie `Secure`; enable when served over HTTPS.
    pub session_secure: bool,
    pub session_inactivity_days: i64,

    /// Allowed browser origin. CORS stays disabled when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: parse_env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS.parse().ok())?,
            session_secure: parse_env_or("SESSION_SECURE", Some(false))?,
            session_inactivity_days: parse_env_or(
                "SESSION_INACTIVITY_DAYS",
                Some(DEFAULT_SESSION_INACTIVITY_DAYS),
            )?,
            cors_origin: std::env::var("CORS_ORIGIN").ok().filter(|o| !o.is_empty()),
        })
    }
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: Option<T>) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => default.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string())),
    }
}
