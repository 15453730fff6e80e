//! Proxy module
//!
//! Handles request forwarding to the upstream LLM provider.

pub mod gemini;
pub mod logging;
pub mod provider;
pub mod types;

pub use gemini::GeminiClient;
pub use logging::RequestContext;
pub use provider::ContentGenerator;
pub use types::{GenerateContentRequest, RelayRequest};
