//! Upstream provider abstraction
//!
//! The relay handler talks to the LLM backend through [`ContentGenerator`]
//! so the outbound client can be swapped for a test double.

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    credentials::ApiKey,
    error::ProxyResult,
    proxy::{logging::RequestContext, types::GenerateContentRequest},
};

/// Trait defining the interface for content generation backends
///
/// # Security
///
/// Implementations MUST:
/// - Never log or echo the API key
/// - Strip the request URL from transport errors when the key is part of it
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Generate content for a single-turn request.
    ///
    /// Returns the upstream JSON body untouched on success. A non-success
    /// upstream status becomes [`ProxyError::Upstream`](crate::error::ProxyError::Upstream)
    /// carrying the same status.
    async fn generate_content(
        &self,
        api_key: &ApiKey,
        model: &str,
        request: &GenerateContentRequest,
        ctx: &RequestContext,
    ) -> ProxyResult<Value>;
}
