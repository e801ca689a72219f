/// Vosk provider - lightweight alternative recognizer
///
/// Lighter than Whisper but less accurate; intended for
/// resource-constrained deployments where speed matters more than accuracy.
use async_trait::async_trait;
use tracing::warn;

use crate::config::SttProviderConfig;
use crate::error::{SpeechError, SpeechResult};
use crate::providers::SttProvider;
use crate::transcription::TranscriptionResult;

pub struct VoskProvider {
    model_path: String,
}

impl VoskProvider {
    pub fn new(config: &SttProviderConfig) -> SpeechResult<Self> {
        match config {
            SttProviderConfig::Vosk { model_path } => {
                warn!("VoskProvider is not yet implemented; transcription requests will fail");
                Ok(Self {
                    model_path: model_path.clone(),
                })
            }
            other => Err(SpeechError::Config(format!(
                "expected vosk configuration, got {:?}",
                other
            ))),
        }
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}

#[async_trait]
impl SttProvider for VoskProvider {
    async fn transcribe(&self, _audio: &[u8], _language: Option<&str>) -> SpeechResult<TranscriptionResult> {
        Err(SpeechError::Provider(
            "Vosk transcription not yet implemented; use the faster_whisper provider".to_string(),
        ))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
