pub mod piper;
pub mod vosk;
pub mod whisper;

use async_trait::async_trait;

use crate::config::{SpeechConfig, SttProviderConfig, TtsProviderConfig};
use crate::error::SpeechResult;
use crate::transcription::TranscriptionResult;

/// Trait for speech-to-text providers
///
/// Implementations can be local (Faster Whisper, Vosk) or cloud-based;
/// swapping providers never changes application logic.
#[async_trait]
pub trait SttProvider: Send + Sync {
    /// Transcribe audio bytes (WAV, MP3, etc.) to text
    async fn transcribe(&self, audio: &[u8], language: Option<&str>) -> SpeechResult<TranscriptionResult>;

    /// Check if the STT provider is operational
    async fn health_check(&self) -> bool;
}

/// Trait for text-to-speech providers
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Convert text to WAV audio bytes
    ///
    /// `speed` is the speech rate (0.5 = half speed, 2.0 = double speed).
    async fn synthesize(&self, text: &str, voice: Option<&str>, speed: f32) -> SpeechResult<Vec<u8>>;

    /// Check if the TTS provider is operational
    async fn health_check(&self) -> bool;
}

/// Create an STT provider instance based on configuration
pub fn create_stt_provider(config: &SpeechConfig) -> SpeechResult<Box<dyn SttProvider>> {
    match &config.stt {
        SttProviderConfig::FasterWhisper { .. } => {
            Ok(Box::new(whisper::FasterWhisperProvider::new(&config.stt)?))
        }
        SttProviderConfig::Vosk { .. } => Ok(Box::new(vosk::VoskProvider::new(&config.stt)?)),
    }
}

/// Create a TTS provider instance based on configuration
pub fn create_tts_provider(config: &SpeechConfig) -> SpeechResult<Box<dyn TtsProvider>> {
    match &config.tts {
        TtsProviderConfig::Piper { .. } => Ok(Box::new(piper::PiperTtsProvider::new(
            &config.tts,
            config.tts_timeout_ms,
        )?)),
    }
}
