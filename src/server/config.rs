use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_HOST: &str = "0.0.0.0";
const DEFAULT_APP_PORT: u16 = 8080;
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

/// Runtime configuration loaded from the environment.
pub struct Config {
    pub database_url: String,

    pub app_host: String,
    pub app_port: u16,

    /// Whether the session cookie is flagged `Secure` (HTTPS only).
    pub session_secure: bool,
    /// Days of inactivity before a session expires.
    pub session_expiry_days: i64,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; every other variable falls back to a default.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration ready for startup
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is not set
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable could not be parsed
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_host: std::env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_APP_HOST.to_string()),
            app_port: parse_env_or("APP_PORT", DEFAULT_APP_PORT)?,
            session_secure: parse_env_or("SESSION_SECURE", false)?,
            session_expiry_days: parse_env_or("SESSION_EXPIRY_DAYS", DEFAULT_SESSION_EXPIRY_DAYS)?,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

fn parse_env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse_value(name, value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
