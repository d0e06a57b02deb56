//! Host configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 300;

/// A configuration value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// `BACKEND_URL` is not an absolute http(s) URL.
    #[error("BACKEND_URL must start with http:// or https://, got {0:?}")]
    BackendScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the booking backend, without a trailing slash.
    pub backend_url: String,
    pub static_dir: PathBuf,
    pub backend_timeout: Duration,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://127.0.0.1:5000`
    /// - `STATIC_DIR`: default `static`
    /// - `BACKEND_TIMEOUT_SECS`: default 300
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_number("PORT", lookup("PORT").as_deref(), DEFAULT_PORT)?;
        let backend_url = parse_backend_url(lookup("BACKEND_URL").as_deref())?;
        let static_dir = lookup("STATIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);
        let timeout_secs = parse_number(
            "BACKEND_TIMEOUT_SECS",
            lookup("BACKEND_TIMEOUT_SECS").as_deref(),
            DEFAULT_BACKEND_TIMEOUT_SECS,
        )?;

        Ok(Self { port, backend_url, static_dir, backend_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: Option<&str>, default: T) -> Result<T, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::BackendScheme(url.to_owned()));
    }
    Ok(url.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
