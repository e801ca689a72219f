pub mod paths;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{health, intent, stt, tts},
    server::GatewayServer,
};

/// Create speech-to-text routes
pub fn stt_routes() -> Router<GatewayServer> {
    Router::new().route(paths::stt::TRANSCRIBE, post(stt::transcribe_audio))
}

/// Create intent classification routes
pub fn intent_routes() -> Router<GatewayServer> {
    Router::new().route(paths::intent::ROUTE, post(intent::route_intent))
}

/// Create text-to-speech routes
pub fn tts_routes() -> Router<GatewayServer> {
    Router::new().route(paths::tts::SPEAK, post(tts::speak_text))
}

/// Create health check routes
pub fn health_routes() -> Router<GatewayServer> {
    Router::new()
        .route(paths::health::HEALTHZ, get(health::health_check))
        .route(paths::health::READYZ, get(health::readiness_check))
}

/// Create all routes nested under the API prefix
pub fn api_routes() -> Router<GatewayServer> {
    Router::new()
        .merge(stt_routes())
        .merge(intent_routes())
        .merge(tts_routes())
        .merge(health_routes())
}

/// Create routes served at the root, outside the API prefix
pub fn root_routes() -> Router<GatewayServer> {
    Router::new().route(paths::ROOT, get(health::service_info))
}
