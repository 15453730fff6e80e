//! Gemini API client
//!
//! Forwards `generateContent` calls to Google's Generative Language API,
//! authenticating with the server-held key as the `key` query parameter.

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Url,
};
use serde_json::Value;
use tracing::instrument;

use crate::{
    config::Config,
    credentials::ApiKey,
    error::{ProxyError, ProxyResult, UPSTREAM_FALLBACK_MESSAGE},
    proxy::{
        logging::{redact_key, RequestContext},
        provider::ContentGenerator,
        types::GenerateContentRequest,
    },
};

/// Gemini `generateContent` client
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.gemini_api_url.clone(),
        }
    }

    /// Build `{base}/models/{model}:generateContent?key={key}`.
    ///
    /// The model is not checked against any list; it is encoded as a single
    /// path segment so it cannot climb out of `/models/`.
    pub fn generate_content_url(&self, model: &str, api_key: &ApiKey) -> ProxyResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProxyError::InvalidUpstreamUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| ProxyError::InvalidUpstreamUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push("models")
            .push(&format!("{}:generateContent", model));

        url.query_pairs_mut().append_pair("key", api_key.expose());

        Ok(url)
    }

    /// Build default headers for Gemini requests
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip_all, fields(trace_id = %ctx.trace_id, model = %model))]
    async fn generate_content(
        &self,
        api_key: &ApiKey,
        model: &str,
        request: &GenerateContentRequest,
        ctx: &RequestContext,
    ) -> ProxyResult<Value> {
        let url = self.generate_content_url(model, api_key)?;
        let body = serde_json::to_vec(request).map_err(|e| {
            ProxyError::Internal(anyhow::anyhow!("Failed to serialize request: {}", e))
        })?;

        ctx.log_upstream_request(&redact_key(&url), Some(body.len()));

        let response = self
            .client
            .post(url)
            .headers(self.default_headers())
            .body(body)
            .send()
            .await
            .map_err(ProxyError::http)?;

        let status = response.status();
        ctx.log_upstream_response(status.as_u16(), response.content_length());

        if !status.is_success() {
            let text = response.text().await.map_err(ProxyError::http)?;
            ctx.log_upstream_error(status.as_u16(), &text);

            // An error body that is not JSON is a relay failure, not an upstream message
            let body: Value = serde_json::from_str(&text).map_err(ProxyError::UpstreamBody)?;

            return Err(ProxyError::Upstream {
                status,
                message: upstream_error_message(&body),
            });
        }

        response.json::<Value>().await.map_err(ProxyError::http)
    }
}

/// Pull `error.message` out of a parsed upstream error body.
///
/// A missing, non-string or blank message yields the fallback.
pub fn upstream_error_message(body: &Value) -> String {
    body.pointer("/error/message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string())
}
