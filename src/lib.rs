//! Neurosonic proxy - server-side relay for the Gemini API
//!
//! This library provides the core functionality for the proxy server.
//! It accepts a prompt from the browser, injects the server-held API key,
//! forwards the call to Gemini, and relays the result or error back.

pub mod config;
pub mod credentials;
pub mod error;
pub mod proxy;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::credentials::{CredentialProvider, EnvCredentialProvider, StaticCredentialProvider};
pub use crate::proxy::{ContentGenerator, GeminiClient};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Source of the upstream API key, consulted on every request
    pub credentials: Arc<dyn CredentialProvider>,
    /// Upstream LLM backend
    pub generator: Arc<dyn ContentGenerator>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling.
        // No request timeout: the client's defaults apply.
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        let generator: Arc<dyn ContentGenerator> =
            Arc::new(GeminiClient::new(http_client, &config));

        // Read per request, so a missing key does not prevent startup
        let credentials: Arc<dyn CredentialProvider> =
            Arc::new(EnvCredentialProvider::new(config.api_key_var.clone()));

        Ok(Self::with_components(config, credentials, generator))
    }

    /// Create an application state from explicit components
    ///
    /// Used by tests to inject a fixed credential and a mocked upstream.
    pub fn with_components(
        config: Config,
        credentials: Arc<dyn CredentialProvider>,
        generator: Arc<dyn ContentGenerator>,
    ) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            credentials,
            generator,
        }
    }
}
