use crate::errors::ConfigError;
use reqwest::Url;
use std::{env, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend base url without a trailing slash.
    pub backend_url: String,
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let backend_url = match lookup("ECO_BACKEND_URL") {
            Some(value) if !value.trim().is_empty() => normalize_backend_url(&value)?,
            _ => DEFAULT_BACKEND_URL.to_string(),
        };

        let request_timeout = match lookup("ECO_REQUEST_TIMEOUT_SECS") {
            Some(value) if !value.trim().is_empty() => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::Timeout { value: value.clone() })?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        Ok(Self {
            port,
            backend_url,
            request_timeout,
        })
    }
}

fn normalize_backend_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    let url = Url::parse(trimmed).map_err(|err| ConfigError::BackendUrl {
        value: value.to_string(),
        reason: err.to_string(),
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::BackendUrl {
            value: value.to_string(),
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
