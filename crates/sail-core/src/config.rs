use std::path::PathBuf;

use crate::error::AppError;

pub const DEFAULT_FIXTURE_PATH: &str = "fixtures/sailing_events.html";
/// Site the bundled fixture was saved from.
pub const DEFAULT_BASE_URL: &str = "https://club.example/";
pub const DEFAULT_SCRAPER_ENDPOINT: &str = "https://api.scraperapi.com/";
pub const DEFAULT_COUNTRY_CODE: &str = "il";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings shared by every provider.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Path of the static markup fixture.
    pub fixture_path: PathBuf,
    /// Base used to turn relative links into absolute URLs.
    pub base_url: String,
}

impl SourceConfig {
    /// Read configuration from environment variables.
    ///
    /// - `SAIL_FIXTURE_PATH` (optional, defaults to `fixtures/sailing_events.html`)
    /// - `SAIL_BASE_URL` (optional, falls back to `SAIL_TARGET_URL`, then to
    ///   `https://club.example/`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let fixture_path = non_empty(lookup("SAIL_FIXTURE_PATH"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_PATH));

        let base_url = non_empty(lookup("SAIL_BASE_URL"))
            .or_else(|| non_empty(lookup("SAIL_TARGET_URL")))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            fixture_path,
            base_url,
        }
    }
}

/// Settings for fetching the live page through the scraping proxy.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub api_key: String,
    pub target_url: String,
    /// Ask the proxy to execute JavaScript before returning markup.
    pub render_js: bool,
    /// Geographic proxy hint.
    pub country_code: String,
    pub timeout_secs: u64,
}

impl RemoteConfig {
    /// Read configuration from environment variables.
    ///
    /// - `SAIL_SCRAPER_API_KEY` (required)
    /// - `SAIL_TARGET_URL` (required)
    /// - `SAIL_SCRAPER_ENDPOINT` (optional)
    /// - `SAIL_RENDER_JS` (optional, defaults to true)
    /// - `SAIL_COUNTRY_CODE` (optional, defaults to `il`)
    /// - `SAIL_FETCH_TIMEOUT_SECS` (optional, defaults to 60)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(lookup("SAIL_SCRAPER_API_KEY")).ok_or_else(|| {
            AppError::ConfigError(
                "SAIL_SCRAPER_API_KEY not set. Required for the remote provider.".into(),
            )
        })?;

        let target_url = non_empty(lookup("SAIL_TARGET_URL")).ok_or_else(|| {
            AppError::ConfigError("SAIL_TARGET_URL not set. Required for the remote provider.".into())
        })?;

        let endpoint = non_empty(lookup("SAIL_SCRAPER_ENDPOINT"))
            .unwrap_or_else(|| DEFAULT_SCRAPER_ENDPOINT.to_string());

        let render_js = match non_empty(lookup("SAIL_RENDER_JS")) {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::ConfigError(format!(
                    "Invalid SAIL_RENDER_JS '{raw}': expected true or false"
                ))
            })?,
        };

        let country_code = non_empty(lookup("SAIL_COUNTRY_CODE"))
            .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string());

        let timeout_secs = match non_empty(lookup("SAIL_FETCH_TIMEOUT_SECS")) {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => {
                let parsed: u64 = raw.parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid SAIL_FETCH_TIMEOUT_SECS '{raw}': must be a positive integer"
                    ))
                })?;
                if parsed == 0 {
                    return Err(AppError::ConfigError(
                        "SAIL_FETCH_TIMEOUT_SECS must be at least 1".into(),
                    ));
                }
                parsed
            }
        };

        Ok(Self {
            endpoint,
            api_key,
            target_url,
            render_js,
            country_code,
            timeout_secs,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
