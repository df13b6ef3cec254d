// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;
use url::Url;

use crate::error::AppError;

/// Where profile, submission and solved-set data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDataSource {
    /// In-memory fixture data.
    Fixture,
    /// The `/users` and `/submissions` endpoints of the backend.
    Backend,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL without a trailing slash, e.g. `http://localhost:5000/api`.
    pub api_base_url: String,
    pub rust_log: String,
    pub log_dir: String,
    pub fixture_addr: SocketAddr,
    pub user_data_source: UserDataSource,
}

impl Config {
    /// Loads `.env` (if present) and reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_base = lookup("API_BASE_URL")
            .ok_or_else(|| AppError::Config("API_BASE_URL must be set".to_string()))?;

        let parsed = Url::parse(raw_base.trim())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "API_BASE_URL must be an http(s) URL, got '{}'",
                raw_base
            )));
        }
        let api_base_url = parsed.as_str().trim_end_matches('/').to_string();

        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let log_dir = lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string());

        let fixture_addr = lookup("FIXTURE_ADDR")
            .unwrap_or_else(|| "127.0.0.1:5000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("FIXTURE_ADDR is invalid: {}", e)))?;

        let user_data_source = match lookup("USER_DATA_SOURCE").as_deref() {
            None | Some("fixture") => UserDataSource::Fixture,
            Some("backend") => UserDataSource::Backend,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "USER_DATA_SOURCE must be 'fixture' or 'backend', got '{}'",
                    other
                )));
            }
        };

        Ok(Self {
            api_base_url,
            rust_log,
            log_dir,
            fixture_addr,
            user_data_source,
        })
    }
}
