//! Prompt relay endpoint
//!
//! Accepts `{ "prompt", "model" }` from the browser, injects the server-held
//! API key and forwards a single-turn `generateContent` call upstream. The
//! upstream body is relayed verbatim on success; failures are mapped by
//! [`ProxyError`].

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, Uri},
    Json,
};
use bytes::Bytes;
use serde_json::Value;
use tracing::{error, warn};

use crate::{
    credentials::ApiKey,
    error::{ProxyError, ProxyResult},
    proxy::{GenerateContentRequest, RelayRequest, RequestContext},
    AppState,
};

/// Handle a relay request
///
/// Order matters: the method gate and the credential check run before the
/// body is looked at, and neither touches the upstream.
pub async fn relay_prompt(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    if method != Method::POST {
        warn!(method = %method, path = %uri.path(), "Rejected non-POST request");
        return Err(ProxyError::MethodNotAllowed);
    }

    let api_key = state.credentials.api_key().ok_or_else(|| {
        error!(
            source = %state.credentials.source(),
            "API key is not configured, upstream call skipped"
        );
        ProxyError::MissingCredential
    })?;

    let mut ctx = RequestContext::new(state.generator.name(), uri.path());

    match relay(&state, &api_key, &body, &mut ctx).await {
        Ok(value) => {
            ctx.log_request_complete();
            Ok(Json(value))
        }
        Err(e) => {
            ctx.log_error(&e.to_string());
            Err(e)
        }
    }
}

/// Parse, build the payload and call upstream
async fn relay(
    state: &AppState,
    api_key: &ApiKey,
    body: &[u8],
    ctx: &mut RequestContext,
) -> ProxyResult<Value> {
    let value: Value = serde_json::from_slice(body).map_err(ProxyError::InvalidBody)?;
    let request = RelayRequest::from_json(value)?;

    ctx.model = Some(request.model.clone());
    ctx.log_request_start(request.prompt.chars().count());

    let payload = GenerateContentRequest::from_prompt(request.prompt);

    state
        .generator
        .generate_content(api_key, &request.model, &payload, ctx)
        .await
}
