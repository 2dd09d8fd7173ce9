//! Portal configuration baked in at build time.
//!
//! The bundle runs in the browser, so there is no process environment at
//! runtime; values are captured with `option_env!` when the WASM is built.
//!
//! Optional:
//! - `PORTAL_API_BASE_URL`: API origin, default production deployment
//! - `PORTAL_PROFILE_TTL_SECS`: profile cache lifetime, default 300

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::profile_cache::DEFAULT_PROFILE_TTL;

pub const DEFAULT_API_BASE_URL: &str = "https://placement-profiling-system-production-618a.up.railway.app";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORTAL_API_BASE_URL '{0}' (expected an http(s) URL)")]
    BaseUrl(String),
    #[error("invalid PORTAL_PROFILE_TTL_SECS '{0}' (expected whole seconds)")]
    Ttl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub api_base_url: String,
    pub profile_ttl: Duration,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), profile_ttl: DEFAULT_PROFILE_TTL }
    }
}

impl PortalConfig {
    /// Build config from raw values; `None` or blank selects the default.
    ///
    /// # Errors
    ///
    /// Returns an error if a present value does not parse.
    pub fn from_values(base_url: Option<&str>, ttl_secs: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { api_base_url: parse_base_url(base_url)?, profile_ttl: parse_ttl(ttl_secs)? })
    }

    /// Config captured from the build environment. Invalid values fall back
    /// to their defaults with a warning.
    #[must_use]
    pub fn from_build_env() -> Self {
        let api_base_url = parse_base_url(option_env!("PORTAL_API_BASE_URL")).unwrap_or_else(|e| {
            log::warn!("{e}; using {DEFAULT_API_BASE_URL}");
            DEFAULT_API_BASE_URL.to_owned()
        });
        let profile_ttl = parse_ttl(option_env!("PORTAL_PROFILE_TTL_SECS")).unwrap_or_else(|e| {
            log::warn!("{e}; using {}s", DEFAULT_PROFILE_TTL.as_secs());
            DEFAULT_PROFILE_TTL
        });
        Self { api_base_url, profile_ttl }
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(url) = present(raw) else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ConfigError::BaseUrl(url.to_owned()));
    }
    Ok(url.trim_end_matches('/').to_owned())
}

fn parse_ttl(raw: Option<&str>) -> Result<Duration, ConfigError> {
    match present(raw) {
        None => Ok(DEFAULT_PROFILE_TTL),
        Some(secs) => secs
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Ttl(secs.to_owned())),
    }
}
