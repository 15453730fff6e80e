//! HTTP routes for the Neurosonic proxy
//!
//! This module defines all HTTP endpoints exposed by the proxy.

pub mod health;
pub mod relay;

use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Path the browser client has always called
pub const NETLIFY_FUNCTION_PATH: &str = "/.netlify/functions/neurosonic-proxy";

/// Shorter alias for the same handler
pub const API_PATH: &str = "/api/neurosonic-proxy";

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Every method reaches the handler so the method gate answers, not the router
    let relay_routes = Router::new()
        .route(NETLIFY_FUNCTION_PATH, any(relay::relay_prompt))
        .route(API_PATH, any(relay::relay_prompt));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check));

    Router::new()
        .merge(public_routes)
        .merge(relay_routes)
        // Global middleware (applied to all routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
