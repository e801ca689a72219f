use serde::{Deserialize, Serialize};

use crate::error::{SpeechError, SpeechResult};

/// Provider-specific STT configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SttProviderConfig {
    /// Faster Whisper server (self-hosted) - PREFERRED default
    FasterWhisper {
        api_url: String,
        model_size: Option<String>, // e.g. "tiny", "base", "small"
    },
    /// Vosk local recognizer - lighter, less accurate
    Vosk { model_path: String },
}

/// Provider-specific TTS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TtsProviderConfig {
    /// Piper local neural synthesis
    Piper {
        executable: String,
        model_path: String,
        voice: String, // e.g. "en_US-lessac-medium"
    },
}

/// Speech service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeechConfig {
    pub stt: SttProviderConfig,
    pub tts: TtsProviderConfig,
    pub stt_timeout_ms: u64,
    pub tts_timeout_ms: u64,
}

impl SpeechConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `STT_PROVIDER` or `TTS_PROVIDER`
    /// names a provider this build does not know.
    pub fn from_env() -> SpeechResult<Self> {
        let stt_provider = std::env::var("STT_PROVIDER").unwrap_or_else(|_| "faster_whisper".to_string());
        let stt = match stt_provider.to_lowercase().as_str() {
            "faster_whisper" | "whisper" => SttProviderConfig::FasterWhisper {
                api_url: std::env::var("WHISPER_API_URL")
                    .unwrap_or_else(|_| "http://localhost:9000".to_string()),
                model_size: std::env::var("WHISPER_MODEL_SIZE").ok(),
            },
            "vosk" => SttProviderConfig::Vosk {
                model_path: std::env::var("VOSK_MODEL_PATH")
                    .unwrap_or_else(|_| "/app/models/vosk".to_string()),
            },
            other => {
                return Err(SpeechError::Config(format!("Unknown STT provider: {}", other)));
            }
        };

        let tts_provider = std::env::var("TTS_PROVIDER").unwrap_or_else(|_| "piper".to_string());
        let tts = match tts_provider.to_lowercase().as_str() {
            "piper" => TtsProviderConfig::Piper {
                executable: std::env::var("PIPER_EXECUTABLE").unwrap_or_else(|_| "piper".to_string()),
                model_path: std::env::var("PIPER_MODEL_PATH")
                    .unwrap_or_else(|_| "/app/models/piper".to_string()),
                voice: std::env::var("PIPER_VOICE")
                    .unwrap_or_else(|_| "en_US-lessac-medium".to_string()),
            },
            other => {
                return Err(SpeechError::Config(format!("Unknown TTS provider: {}", other)));
            }
        };

        let stt_timeout_ms = std::env::var("STT_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30_000);

        let tts_timeout_ms = std::env::var("TTS_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(15_000);

        Ok(Self {
            stt,
            tts,
            stt_timeout_ms,
            tts_timeout_ms,
        })
    }
}
