//! Common test utilities for the Neurosonic proxy
//!
//! This module provides the shared harness used across integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use neurosonic_proxy::{
    routes, AppState, Config, CredentialProvider, GeminiClient, StaticCredentialProvider,
};
use serde_json::{json, Value};

use crate::mocks::{MockGemini, TEST_API_KEY};

/// Relay endpoint path used by the tests
pub const RELAY_PATH: &str = routes::NETLIFY_FUNCTION_PATH;

/// Test harness for relay tests
///
/// This harness creates a complete test environment with:
/// - Mock Gemini server (wiremock) with request capture
/// - Real `GeminiClient` pointed at the mock
/// - Real app router with all middleware
pub struct RelayTestHarness {
    pub gemini: MockGemini,
    pub server: TestServer,
}

impl RelayTestHarness {
    /// Harness with the test API key configured
    pub async fn new() -> Self {
        Self::with_credentials(StaticCredentialProvider::new(TEST_API_KEY)).await
    }

    /// Harness whose credential provider yields nothing
    pub async fn without_credentials() -> Self {
        Self::with_credentials(StaticCredentialProvider::missing()).await
    }

    /// Harness with a custom credential provider
    pub async fn with_credentials(credentials: impl CredentialProvider + 'static) -> Self {
        let gemini = MockGemini::start().await;
        let server = build_server(&gemini.base_url(), credentials);
        Self { gemini, server }
    }
}

/// Build a test server whose upstream is `gemini_api_url`
pub fn build_server(
    gemini_api_url: &str,
    credentials: impl CredentialProvider + 'static,
) -> TestServer {
    let config = Config::with_upstream(gemini_api_url);
    let generator = GeminiClient::new(reqwest::Client::new(), &config);
    let state = AppState::with_components(config, Arc::new(credentials), Arc::new(generator));

    TestServer::new(routes::create_router(Arc::new(state))).expect("Failed to create test server")
}

/// Sample request data for tests
pub mod test_data {
    use super::*;

    /// Well-formed relay request
    pub fn relay_request(prompt: &str, model: &str) -> Value {
        json!({ "prompt": prompt, "model": model })
    }

    /// The request from the browser client's "hello" flow
    pub fn hello_request() -> Value {
        relay_request("Hello", "gemini-pro")
    }
}
