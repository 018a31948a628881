use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service_name: String,
}

/// Where users and posts are fetched from
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub base_url: String,
    pub users_path: String,
    pub posts_path: String,
    pub timeout_secs: u64,
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys fall back to
    /// defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let base_url = get("SOURCE_BASE_URL", DEFAULT_BASE_URL);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "SOURCE_BASE_URL must be an http(s) URL, got {:?}",
                base_url
            )));
        }

        let timeout_raw = get("SOURCE_TIMEOUT_SECS", "10");
        let timeout_secs = timeout_raw
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                AppError::Config(format!(
                    "SOURCE_TIMEOUT_SECS must be a positive integer, got {:?}",
                    timeout_raw
                ))
            })?;

        Ok(Config {
            service: ServiceConfig {
                service_name: get("SERVICE_NAME", "insights-service"),
            },
            source: SourceConfig {
                base_url,
                users_path: get("SOURCE_USERS_PATH", "/users"),
                posts_path: get("SOURCE_POSTS_PATH", "/posts"),
                timeout_secs,
            },
        })
    }
}
