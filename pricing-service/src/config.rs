use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("Invalid SERVER_PORT value {0:?}")]
pub struct ConfigError(String);

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = match env::var("SERVER_PORT") {
            Ok(port) => port.trim().parse().map_err(|_| ConfigError(port))?,
            Err(_) => 8082,
        };

        Ok(Config {
            server_port,
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
