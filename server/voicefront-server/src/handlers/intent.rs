use axum::{extract::State, Json};
use std::time::Instant;
use tracing::info;

use intent_routing_service::response::generate_response;
use intent_routing_service::IntentRouter;

use crate::error::{ApiResult, ErrorResponse};
use crate::middleware::RequestContext;
use crate::schemas::{IntentRequest, IntentResponse};
use crate::server::GatewayServer;

/// Intent classification handler
///
/// Classifies caller intent from transcribed text and generates a reply.
/// Any text is valid input, including the empty string, which classifies
/// to UNKNOWN with a mandatory handoff; this endpoint has no failure mode
/// of its own.
#[utoipa::path(
    post,
    path = "/api/intent/route",
    tag = "intent",
    request_body = IntentRequest,
    responses(
        (status = 200, description = "Intent classified successfully", body = IntentResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn route_intent(
    State(server): State<GatewayServer>,
    ctx: RequestContext,
    Json(request): Json<IntentRequest>,
) -> ApiResult<Json<IntentResponse>> {
    let started = Instant::now();

    // Trim at the boundary; the classifier sees the text verbatim otherwise.
    let text = request.text.trim();

    let result = server.intent_router.route(text).await;
    let response_text = generate_response(&result);

    let duration_ms = started.elapsed().as_millis() as u64;

    info!(
        request_id = %ctx.request_id,
        intent = %result.intent,
        confidence = result.confidence,
        handoff_recommended = result.handoff_recommended,
        duration_ms,
        "Intent classification completed"
    );

    Ok(Json(IntentResponse {
        request_id: ctx.request_id,
        intent: result.intent.to_string(),
        confidence: result.confidence,
        entities: result.entities,
        handoff_recommended: result.handoff_recommended,
        reasoning: result.reasoning,
        response_text,
        duration_ms,
    }))
}
