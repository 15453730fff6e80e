//! Configuration management for the Neurosonic proxy
//!
//! Configuration is loaded from environment variables. The Gemini API key is
//! deliberately not part of [`Config`]: it is resolved per request through a
//! [`CredentialProvider`](crate::credentials::CredentialProvider).

use anyhow::{Context, Result};
use std::env;

/// Default upstream base URL (Gemini `v1beta` API)
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default name of the environment variable holding the API key
pub const DEFAULT_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Gemini API base URL, up to and including the version segment
    pub gemini_api_url: String,
    /// Environment variable the API key is read from on every request
    pub api_key_var: String,

    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("PROXY_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PROXY_PORT")
                .unwrap_or_else(|| "8888".to_string())
                .parse()
                .context("Invalid PROXY_PORT")?,

            gemini_api_url: lookup("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            api_key_var: lookup("GEMINI_API_KEY_VAR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_KEY_VAR.to_string()),

            json_logs: lookup("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }

    /// Configuration pointing at a custom upstream, used by tests and embedders
    pub fn with_upstream(gemini_api_url: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            gemini_api_url: gemini_api_url.into(),
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
            json_logs: false,
        }
    }
}
