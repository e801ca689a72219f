//! Request/response schemas for the gateway API
//!
//! Every wire type carries serde and utoipa derives so the OpenAPI
//! document stays in lockstep with what the handlers actually emit.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};

/// Query parameters for the transcription endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct TranscribeParams {
    /// Language code hint (e.g. "en", "es"); autodetected when omitted
    pub language: Option<String>,
    /// Enable PII redaction; defaults to the server's privacy mode
    pub privacy_mode: Option<bool>,
}

/// Response for STT transcription
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TranscribeResponse {
    /// Unique request identifier
    #[schema(example = "req_a1b2c3d4e5f6")]
    pub request_id: String,
    /// Transcribed text
    #[schema(example = "I need an appointment next Tuesday at 2 PM")]
    pub text: String,
    /// Redacted text, present when privacy mode is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_redacted: Option<String>,
    /// Transcription confidence in [0, 1]
    #[schema(example = 0.95)]
    pub confidence: f32,
    /// Detected or requested language
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "en")]
    pub language: Option<String>,
    /// Processing duration in milliseconds
    #[schema(example = 1234)]
    pub duration_ms: u64,
}

/// Request for intent classification
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IntentRequest {
    /// Text to classify
    #[schema(example = "I need an appointment next Tuesday at 2 PM")]
    pub text: String,
}

/// Response for intent classification
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IntentResponse {
    /// Unique request identifier
    #[schema(example = "req_a1b2c3d4e5f6")]
    pub request_id: String,
    /// Classified intent label
    #[schema(example = "APPOINTMENT_SCHEDULING")]
    pub intent: String,
    /// Classification confidence in [0, 1]
    #[schema(example = 0.85)]
    pub confidence: f32,
    /// Extracted entities; keys are intent-specific, absent key means
    /// "not detected"
    pub entities: HashMap<String, String>,
    /// Whether a human handoff is recommended
    pub handoff_recommended: bool,
    /// Classification reasoning
    #[schema(example = "Matched 2 keywords for APPOINTMENT_SCHEDULING")]
    pub reasoning: Option<String>,
    /// Generated natural-language reply
    pub response_text: String,
    /// Processing duration in milliseconds
    #[schema(example = 3)]
    pub duration_ms: u64,
}

/// Request for text-to-speech synthesis
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TtsRequest {
    /// Text to synthesize
    #[schema(example = "I can help you schedule an appointment. What day works best for you?")]
    pub text: String,
    /// Voice identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "en_US-lessac-medium")]
    pub voice: Option<String>,
    /// Speech rate; 0.5 = half speed, 2.0 = double speed
    #[serde(default = "default_speed")]
    #[schema(example = 1.0)]
    pub speed: f32,
}

fn default_speed() -> f32 {
    1.0
}

/// Response for health check endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Health status: "healthy", "ready", or "degraded"
    #[schema(example = "healthy")]
    pub status: String,
    /// Check timestamp in RFC3339 format
    #[schema(example = "2025-02-14T10:30:00Z")]
    pub timestamp: String,
    /// Per-provider health, reported by the readiness check only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<HashMap<String, bool>>,
}

/// Service information returned at the root path
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoResponse {
    /// Service display name
    #[schema(example = "VoiceFront Gateway")]
    pub name: String,
    /// Service version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Operational status
    #[schema(example = "operational")]
    pub status: String,
    /// Path to the interactive API documentation
    #[schema(example = "/docs")]
    pub docs: String,
    /// Path to the liveness check
    #[schema(example = "/api/healthz")]
    pub health: String,
    /// Path to the readiness check
    #[schema(example = "/api/readyz")]
    pub readiness: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tts_request_defaults_speed() {
        let request: TtsRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(request.speed, 1.0);
        assert!(request.voice.is_none());
    }

    #[test]
    fn test_transcribe_response_omits_absent_fields() {
        let response = TranscribeResponse {
            request_id: "req_abc".to_string(),
            text: "hello".to_string(),
            text_redacted: None,
            confidence: 0.9,
            language: None,
            duration_ms: 10,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("text_redacted"));
        assert!(!json.contains("language"));
    }
}
