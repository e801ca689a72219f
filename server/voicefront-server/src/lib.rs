//! VoiceFront Gateway - voice AI API for medical front office workflows
//!
//! This library provides the HTTP surface of the gateway: speech-to-text
//! transcription, intent classification, and text-to-speech synthesis with
//! privacy-focused defaults.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod schemas;
pub mod server;

// Re-export commonly used types
pub use error::*;
pub use server::{GatewayConfig, GatewayServer};

use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

/// Upper bound for uploaded audio payloads.
const MAX_AUDIO_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Create the main application router with all routes and middleware
pub fn create_app(server: GatewayServer) -> Router {
    let cors = middleware::cors_layer(&server.config.cors_origins);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::api_doc()))
        .merge(routes::root_routes())
        .nest(routes::paths::API, routes::api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(from_fn(middleware::request_timing_middleware))
                .layer(DefaultBodyLimit::max(MAX_AUDIO_UPLOAD_BYTES)),
        )
        .with_state(server)
}
