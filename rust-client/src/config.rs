//! Configuration module for environment variable parsing.

use std::env;
use tracing::warn;

/// Default base URL of the Account Activity API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com/1.1/account_activity";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the webhook-management paths are joined to
    pub api_base_url: String,

    /// HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            api_base_url: env::var("TWITTER_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),

            request_timeout_ms: parse_u64("REQUEST_TIMEOUT_MS", 8000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: 8000,
        }
    }
}

/// Parse an integer environment variable, falling back to a default.
fn parse_u64(name: &str, default: u64) -> u64 {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse::<u64>() {
        Ok(value) => value,
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid integer value, using default");
            default
        }
    }
}
