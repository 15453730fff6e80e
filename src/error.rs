//! Error types for the Neurosonic proxy
//!
//! Every failure of the relay is funnelled into [`ProxyError`] and converted
//! into exactly one HTTP response at the handler boundary.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Fallback message used when a failure carries no usable text
pub const GENERIC_ERROR_MESSAGE: &str = "Internal Server Error in proxy function";

/// Fallback message used when the upstream error body has no `error.message`
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Error communicating with Gemini API";

/// Relay errors
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("API key not configured in the server environment.")]
    MissingCredential,

    #[error("{0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("{0}")]
    Http(#[source] reqwest::Error),

    #[error("{0}")]
    UpstreamBody(#[source] serde_json::Error),

    #[error("Invalid upstream URL: {0}")]
    InvalidUpstreamUrl(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl ProxyError {
    /// Wrap a transport error, dropping the request URL.
    ///
    /// The upstream URL carries the API key as a query parameter, and
    /// `reqwest::Error`'s `Display` would otherwise print it.
    pub fn http(err: reqwest::Error) -> Self {
        ProxyError::Http(err.without_url())
    }

    /// Status code the caller receives for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            ProxyError::MethodNotAllowed => (
                status,
                [(header::ALLOW, "POST")],
                self.to_string(),
            )
                .into_response(),
            // Plain text, unlike every other failure
            ProxyError::MissingCredential => (status, self.to_string()).into_response(),
            _ => {
                let mut message = self.to_string();
                if message.trim().is_empty() {
                    message = GENERIC_ERROR_MESSAGE.to_string();
                }
                (status, Json(ErrorResponse { error: message })).into_response()
            }
        }
    }
}

/// Result type alias for convenience
pub type ProxyResult<T> = Result<T, ProxyError>;
