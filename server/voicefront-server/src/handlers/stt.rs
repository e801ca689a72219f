use axum::extract::{Multipart, Query, State};
use axum::Json;
use std::time::Instant;
use tracing::info;


use crate::error::{ApiError, ApiResult, ErrorResponse};
use crate::middleware::RequestContext;
use crate::schemas::{TranscribeParams, TranscribeResponse};
use crate::server::GatewayServer;

/// Audio transcription handler
///
/// Accepts a multipart upload with an audio file under the `file` field
/// and returns the transcription. With privacy mode enabled (the default),
/// the response also carries a PII-redacted copy of the text.
#[utoipa::path(
    post,
    path = "/api/stt/transcribe",
    tag = "stt",
    params(TranscribeParams),
    responses(
        (status = 200, description = "Audio transcribed successfully", body = TranscribeResponse),
        (status = 400, description = "Missing or invalid audio upload", body = ErrorResponse),
        (status = 500, description = "Transcription failed", body = ErrorResponse),
        (status = 502, description = "STT service unreachable", body = ErrorResponse)
    )
)]
pub async fn transcribe_audio(
    State(server): State<GatewayServer>,
    ctx: RequestContext,
    Query(params): Query<TranscribeParams>,
    mut multipart: Multipart,
) -> ApiResult<Json<TranscribeResponse>> {
    let started = Instant::now();

    info!(request_id = %ctx.request_id, "Transcription request started");

    let mut audio: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart upload: {}", e)))?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().map(|s| s.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read audio upload: {}", e)))?;
            audio = Some(bytes.to_vec());
            break;
        }
    }

    let audio = audio.ok_or_else(|| ApiError::validation("Missing audio upload field 'file'"))?;
    if audio.is_empty() {
        return Err(ApiError::validation("Uploaded audio file is empty"));
    }

    let result = server
        .stt
        .transcribe(&audio, params.language.as_deref())
        .await?;

    let privacy_mode = params.privacy_mode.unwrap_or(server.config.privacy_mode);
    let text_redacted = privacy_mode.then(|| server.redactor.redact(&result.text));

    let duration_ms = started.elapsed().as_millis() as u64;

    info!(
        request_id = %ctx.request_id,
        file_name = file_name.as_deref().unwrap_or("<unnamed>"),
        confidence = result.confidence,
        privacy_mode,
        duration_ms,
        "Transcription completed"
    );

    Ok(Json(TranscribeResponse {
        request_id: ctx.request_id,
        text: result.text,
        text_redacted,
        confidence: result.confidence,
        language: result.language,
        duration_ms,
    }))
}
