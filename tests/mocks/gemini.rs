//! Mock Gemini API for testing
//!
//! Provides wiremock-based mocks for the Generative Language endpoint:
//! - POST /v1beta/models/{model}:generateContent?key={key}
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::gemini::{GeminiTestData, MockGemini};
//!
//! #[tokio::test]
//! async fn test_with_gemini_mock() {
//!     let gemini = MockGemini::start().await;
//!     gemini
//!         .mock_generate_success("gemini-pro", GeminiTestData::candidates("Hi"))
//!         .await;
//!
//!     // Use gemini.base_url() as GEMINI_API_URL
//! }
//! ```

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Key the mocks expect in the `key` query parameter
pub const TEST_API_KEY: &str = "test-gemini-api-key";

/// Mock Gemini server wrapper
pub struct MockGemini {
    server: MockServer,
}

impl MockGemini {
    /// Start a new mock Gemini server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL to configure as `GEMINI_API_URL`
    pub fn base_url(&self) -> String {
        format!("{}/v1beta", self.server.uri())
    }

    /// Get all received requests (for assertion in tests)
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Number of requests that reached the upstream
    pub async fn request_count(&self) -> usize {
        self.received_requests().await.len()
    }

    fn generate_path(model: &str) -> String {
        format!("/v1beta/models/{}:generateContent", model)
    }

    // =========================================================================
    // POST /v1beta/models/{model}:generateContent
    // =========================================================================

    /// Mock a successful generateContent response
    pub async fn mock_generate_success(&self, model: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path(Self::generate_path(model)))
            .and(query_param("key", TEST_API_KEY))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock an error response with a JSON body
    pub async fn mock_generate_error(&self, model: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(Self::generate_path(model)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a response with an arbitrary raw body
    pub async fn mock_generate_raw(&self, model: &str, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(Self::generate_path(model)))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_string(body)
                    .insert_header("Content-Type", "text/html"),
            )
            .mount(&self.server)
            .await;
    }
}

/// Canned Gemini payloads
pub struct GeminiTestData;

impl GeminiTestData {
    /// Typical successful response with one candidate
    pub fn candidates(text: &str) -> Value {
        json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [ { "text": text } ]
                    },
                    "finishReason": "STOP",
                    "index": 0,
                    "safetyRatings": [
                        { "category": "HARM_CATEGORY_HARASSMENT", "probability": "NEGLIGIBLE" }
                    ]
                }
            ],
            "usageMetadata": {
                "promptTokenCount": 1,
                "candidatesTokenCount": 8,
                "totalTokenCount": 9
            },
            "modelVersion": "gemini-pro"
        })
    }

    /// 429 body as Google returns it
    pub fn quota_exceeded() -> Value {
        json!({
            "error": {
                "code": 429,
                "message": "quota exceeded",
                "status": "RESOURCE_EXHAUSTED"
            }
        })
    }

    /// 403 body with no `error.message`
    pub fn permission_denied_without_message() -> Value {
        json!({
            "error": {
                "code": 403,
                "status": "PERMISSION_DENIED"
            }
        })
    }

    /// 404 body for an unknown model
    pub fn model_not_found(model: &str) -> Value {
        json!({
            "error": {
                "code": 404,
                "message": format!("models/{} is not found for API version v1beta", model),
                "status": "NOT_FOUND"
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_starts() {
        let mock = MockGemini::start().await;
        assert!(mock.base_url().ends_with("/v1beta"));
    }

    #[tokio::test]
    async fn test_mock_generate_success_requires_key() {
        let mock = MockGemini::start().await;
        mock.mock_generate_success("gemini-pro", GeminiTestData::candidates("Hi"))
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/models/gemini-pro:generateContent", mock.base_url());

        let with_key = client
            .post(&url)
            .query(&[("key", TEST_API_KEY)])
            .json(&json!({ "contents": [] }))
            .send()
            .await
            .unwrap();
        assert_eq!(with_key.status(), 200);

        let without_key = client
            .post(&url)
            .json(&json!({ "contents": [] }))
            .send()
            .await
            .unwrap();
        assert_eq!(without_key.status(), 404);

        assert_eq!(mock.request_count().await, 2);
    }

    #[tokio::test]
    async fn test_mock_generate_error() {
        let mock = MockGemini::start().await;
        mock.mock_generate_error("gemini-pro", 429, GeminiTestData::quota_exceeded())
            .await;

        let response = reqwest::Client::new()
            .post(format!("{}/models/gemini-pro:generateContent", mock.base_url()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 429);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"]["message"], "quota exceeded");
    }
}
