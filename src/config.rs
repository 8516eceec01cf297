use anyhow::{Context, Result};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct Config {
    // Gemini
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_url: String,
    pub request_timeout_secs: u64,

    // Server
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Gemini - a missing key is not fatal, requests will report it
            google_api_key: std::env::var("GOOGLE_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 60)?,

            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 8000)?,
        })
    }

    /// Upstream call timeout. `REQUEST_TIMEOUT_SECS=0` means no timeout.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read a numeric variable, falling back to `default` when unset.
/// A value that is set but malformed is an error rather than silently ignored.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}
