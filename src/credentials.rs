//! API credential resolution
//!
//! The handler never reads the process environment directly; it asks a
//! [`CredentialProvider`] for the key on every request. Production uses
//! [`EnvCredentialProvider`], tests inject a [`StaticCredentialProvider`].

use std::env;
use std::fmt;

/// The upstream API key.
///
/// `Debug` and `Display` are redacted so the key cannot end up in logs or
/// error messages by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key. Blank keys count as "not configured".
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The raw key, for building the upstream request only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Source of the upstream API key
pub trait CredentialProvider: Send + Sync {
    /// Short description for logs (never the key itself)
    fn source(&self) -> String;

    /// Current API key, or `None` when absent or empty
    fn api_key(&self) -> Option<ApiKey>;
}

/// Reads the key from an environment variable at call time
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    var: String,
}

impl EnvCredentialProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn source(&self) -> String {
        format!("env:{}", self.var)
    }

    fn api_key(&self) -> Option<ApiKey> {
        env::var(&self.var).ok().and_then(ApiKey::new)
    }
}

/// Fixed key held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    key: Option<ApiKey>,
}

impl StaticCredentialProvider {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: ApiKey::new(key),
        }
    }

    /// Provider that never yields a key
    pub fn missing() -> Self {
        Self { key: None }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn source(&self) -> String {
        "static".to_string()
    }

    fn api_key(&self) -> Option<ApiKey> {
        self.key.clone()
    }
}
