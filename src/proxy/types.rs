//! Wire types for the relay
//!
//! The inbound request shape sent by the browser and the outbound
//! `generateContent` payload sent to Gemini.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProxyError, ProxyResult};

/// Body posted by the client application
#[derive(Debug, Clone, Deserialize)]
pub struct RelayRequest {
    pub prompt: String,
    pub model: String,
}

impl RelayRequest {
    /// Extract the request from a body that already parsed as JSON.
    ///
    /// A wrong shape, a missing or non-string field, or an empty field is
    /// rejected as a bad request before anything is sent upstream.
    pub fn from_json(value: Value) -> ProxyResult<Self> {
        let request: Self = serde_json::from_value(value)
            .map_err(|e| ProxyError::BadRequest(format!("Invalid request body: {}", e)))?;

        for (field, value) in [("prompt", &request.prompt), ("model", &request.model)] {
            if value.is_empty() {
                return Err(ProxyError::BadRequest(format!("`{}` must not be empty", field)));
            }
        }

        Ok(request)
    }
}

/// Conversation role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A single text part of a turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub text: String,
}

/// One conversational turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

/// Gemini `generateContent` request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single user turn carrying the prompt verbatim
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Role::User,
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}
