use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_FILTER: &str = "lyb=info,tower_http=info";
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Settings loaded from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_filter: String,
    pub max_page_size: u64,
    pub cors_permissive: bool,
}

impl Config {
    /// Loads configuration from the process environment, honouring a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let max_page_size = match lookup("LYB_MAX_PAGE_SIZE") {
            None => DEFAULT_MAX_PAGE_SIZE,
            Some(raw) => match raw.parse::<u64>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "LYB_MAX_PAGE_SIZE".to_string(),
                        format!("'{raw}' is not a positive integer"),
                    ));
                }
            },
        };

        let cors_permissive = match lookup("CORS_PERMISSIVE").as_deref() {
            None => false,
            Some("true" | "1" | "yes") => true,
            Some("false" | "0" | "no") => false,
            Some(other) => {
                return Err(ConfigError::InvalidValue(
                    "CORS_PERMISSIVE".to_string(),
                    format!("'{other}' is not a boolean"),
                ));
            }
        };

        Ok(Self {
            bind_address,
            log_filter,
            max_page_size,
            cors_permissive,
        })
    }
}
