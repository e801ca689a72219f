use axum::extract::State;
use axum::http::{header, HeaderName};
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::Json;
use std::time::Instant;
use tracing::info;


use crate::error::{ApiError, ApiResult, ErrorResponse};
use crate::middleware::RequestContext;
use crate::schemas::TtsRequest;
use crate::server::GatewayServer;

/// Longest text the synthesis endpoint accepts.
const MAX_TTS_TEXT_LEN: usize = 5000;

/// Speech synthesis handler
///
/// Converts text to WAV audio. The audio is returned in the response body;
/// request metadata travels in the `X-Request-ID` and `X-Duration-MS`
/// headers.
#[utoipa::path(
    post,
    path = "/api/tts/speak",
    tag = "tts",
    request_body = TtsRequest,
    responses(
        (status = 200, description = "WAV audio", content_type = "audio/wav"),
        (status = 400, description = "Invalid synthesis request", body = ErrorResponse),
        (status = 500, description = "Synthesis failed", body = ErrorResponse)
    )
)]
pub async fn speak_text(
    State(server): State<GatewayServer>,
    ctx: RequestContext,
    Json(request): Json<TtsRequest>,
) -> ApiResult<Response> {
    let started = Instant::now();

    if request.text.trim().is_empty() {
        return Err(ApiError::validation("Text must not be empty"));
    }
    if request.text.len() > MAX_TTS_TEXT_LEN {
        return Err(ApiError::validation(format!(
            "Text exceeds maximum length of {} characters",
            MAX_TTS_TEXT_LEN
        )));
    }
    if !(0.5..=2.0).contains(&request.speed) {
        return Err(ApiError::validation("Speed must be between 0.5 and 2.0"));
    }

    info!(
        request_id = %ctx.request_id,
        text_length = request.text.len(),
        "TTS synthesis started"
    );

    let audio = server
        .tts
        .synthesize(&request.text, request.voice.as_deref(), request.speed)
        .await?;

    let duration_ms = started.elapsed().as_millis() as u64;

    info!(
        request_id = %ctx.request_id,
        audio_size = audio.len(),
        duration_ms,
        "TTS synthesis completed"
    );

    Ok((
        AppendHeaders([
            (header::CONTENT_TYPE, "audio/wav".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "inline; filename=speech.wav".to_string(),
            ),
            (HeaderName::from_static("x-request-id"), ctx.request_id),
            (
                HeaderName::from_static("x-duration-ms"),
                duration_ms.to_string(),
            ),
        ]),
        audio,
    )
        .into_response())
}
