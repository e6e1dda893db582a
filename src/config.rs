//! Configuration management for the contact assistant.
//!
//! Configuration comes from environment variables (with a `.env` file
//! honored if present). Everything has a default; nothing is required.

use crate::error::{ConfigError, ConfigResult};
use crate::services::DEFAULT_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the address book snapshot file
    pub data_file: PathBuf,

    /// Width of the upcoming-birthday window, in days (default: 7)
    pub window_days: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: snapshot path (default: `address_book.json`)
    /// - `BIRTHDAY_WINDOW_DAYS`: query window in days (default: 7, min 1)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load a .env file if one exists, without failing when it doesn't.
        let _ = dotenvy::dotenv();

        let data_file = env::var("CONTACTS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("address_book.json"));

        let window_days = Self::parse_env_u64("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if window_days == 0 {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("address_book.json"),
            window_days: DEFAULT_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
