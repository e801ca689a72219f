use serde::{Deserialize, Serialize};

/// Result from speech-to-text transcription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
    /// Transcription confidence in [0, 1]
    pub confidence: f32,
    /// Detected or requested language code, when known
    pub language: Option<String>,
    /// Wall-clock transcription duration
    pub duration_ms: u64,
}
