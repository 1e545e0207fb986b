/// Configuration management
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub server_host: String,
    #[serde(default = "default_port")]
    pub server_port: u16,
    pub jwt_secret: String,
    #[serde(default = "default_origins")]
    pub allowed_origins: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_origins() -> String {
    "*".to_string()
}

impl Config {
    /// Load configuration from environment variables. Refuses to produce a
    /// config with a missing or empty `JWT_SECRET`: signing with an empty
    /// key must never happen.
    pub fn from_env() -> Result<Self, AppError> {
        let config: Config = envy::from_env().map_err(|e| AppError::Config(e.to_string()))?;

        if config.jwt_secret.trim().is_empty() {
            return Err(AppError::Config("JWT_SECRET must not be empty".to_string()));
        }

        Ok(config)
    }
}
