use utoipa::OpenApi;

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        // Speech-to-text endpoints
        crate::handlers::stt::transcribe_audio,

        // Intent classification endpoints
        crate::handlers::intent::route_intent,

        // Text-to-speech endpoints
        crate::handlers::tts::speak_text,

        // Health endpoints
        crate::handlers::health::health_check,
        crate::handlers::health::readiness_check,
        crate::handlers::health::service_info,
    ),
    components(
        schemas(
            crate::schemas::TranscribeResponse,
            crate::schemas::IntentRequest,
            crate::schemas::IntentResponse,
            crate::schemas::TtsRequest,
            crate::schemas::HealthResponse,
            crate::schemas::ServiceInfoResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "stt", description = "Speech-to-text transcription"),
        (name = "intent", description = "Intent classification and response generation"),
        (name = "tts", description = "Text-to-speech synthesis"),
        (name = "health", description = "Service health and readiness"),
    ),
    info(
        title = "VoiceFront Gateway API",
        version = "1.0.0",
        description = "Voice AI API for medical front office workflows. Provides speech-to-text transcription, intent recognition, and text-to-speech synthesis with privacy-focused design.",
        contact(
            name = "VoiceFront Team",
            email = "team@voicefront.dev",
            url = "https://voicefront.dev"
        ),
        license(
            name = "AGPL-3.0-only",
            url = "https://github.com/voicefront-hq/voicefront-gateway/blob/main/LICENSE"
        ),
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server"),
        (url = "https://api.voicefront.dev", description = "Production server"),
    ),
)]
pub struct ApiDoc;

/// Resolved OpenAPI document for mounting under Swagger UI.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
