use axum::{extract::State, Json};
use std::collections::HashMap;
use tracing::warn;

use intent_routing_service::IntentRouter;

use crate::schemas::{HealthResponse, ServiceInfoResponse};
use crate::server::GatewayServer;

/// Liveness check handler
///
/// Reports that the process is up. Never touches providers, so it stays
/// fast and cannot flap with an unreachable STT or TTS backend.
#[utoipa::path(
    get,
    path = "/api/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        providers: None,
    })
}

/// Readiness check handler
///
/// Runs every provider health check and reports `ready` only when all of
/// them pass; otherwise `degraded` with a per-provider breakdown.
#[utoipa::path(
    get,
    path = "/api/readyz",
    tag = "health",
    responses(
        (status = 200, description = "Provider readiness report", body = HealthResponse)
    )
)]
pub async fn readiness_check(State(server): State<GatewayServer>) -> Json<HealthResponse> {
    let stt_healthy = server.stt.health_check().await;
    let tts_healthy = server.tts.health_check().await;
    let intent_healthy = server.intent_router.health_check().await;

    let mut providers = HashMap::new();
    providers.insert("stt".to_string(), stt_healthy);
    providers.insert("tts".to_string(), tts_healthy);
    providers.insert("intent".to_string(), intent_healthy);

    let all_healthy = stt_healthy && tts_healthy && intent_healthy;

    if !all_healthy {
        warn!(
            stt = stt_healthy,
            tts = tts_healthy,
            intent = intent_healthy,
            "Some providers unhealthy"
        );
    }

    let status = if all_healthy { "ready" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        providers: Some(providers),
    })
}

/// Service information handler for the root path
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service information", body = ServiceInfoResponse)
    )
)]
pub async fn service_info(State(server): State<GatewayServer>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        name: server.config.app_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
        docs: "/docs".to_string(),
        health: "/api/healthz".to_string(),
        readiness: "/api/readyz".to_string(),
    })
}
