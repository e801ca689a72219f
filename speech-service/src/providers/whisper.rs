/// Faster Whisper provider - open-source, self-hosted, fully private
///
/// Talks to a self-hosted faster-whisper server over its OpenAI-compatible
/// HTTP API, so no audio ever leaves the deployment.
use std::time::Instant;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::SttProviderConfig;
use crate::error::{SpeechError, SpeechResult};
use crate::providers::SttProvider;
use crate::transcription::TranscriptionResult;

/// Whisper servers do not report a usable per-utterance confidence; the
/// gateway reports this fixed value for successful transcriptions.
const WHISPER_REPORTED_CONFIDENCE: f32 = 0.95;

pub struct FasterWhisperProvider {
    client: reqwest::Client,
    api_url: String,
    model_size: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WhisperTranscription {
    text: String,
    language: Option<String>,
}

impl FasterWhisperProvider {
    pub fn new(config: &SttProviderConfig) -> SpeechResult<Self> {
        match config {
            SttProviderConfig::FasterWhisper { api_url, model_size } => Ok(Self {
                client: reqwest::Client::new(),
                api_url: api_url.trim_end_matches('/').to_string(),
                model_size: model_size.clone(),
            }),
            other => Err(SpeechError::Config(format!(
                "expected faster_whisper configuration, got {:?}",
                other
            ))),
        }
    }
}

#[async_trait]
impl SttProvider for FasterWhisperProvider {
    async fn transcribe(&self, audio: &[u8], language: Option<&str>) -> SpeechResult<TranscriptionResult> {
        let started = Instant::now();

        let mut form = reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(audio.to_vec()).file_name("audio.wav"),
        );
        if let Some(model) = &self.model_size {
            form = form.text("model", model.clone());
        }
        if let Some(language) = language {
            form = form.text("language", language.to_string());
        }

        let response = self
            .client
            .post(format!("{}/v1/audio/transcriptions", self.api_url))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpeechError::Transcription(format!(
                "whisper server returned {}",
                response.status()
            )));
        }

        let transcription: WhisperTranscription = response.json().await?;
        let duration_ms = started.elapsed().as_millis() as u64;

        debug!(duration_ms, "transcription completed");

        Ok(TranscriptionResult {
            text: transcription.text.trim().to_string(),
            confidence: WHISPER_REPORTED_CONFIDENCE,
            language: transcription.language.or_else(|| language.map(str::to_string)),
            duration_ms,
        })
    }

    async fn health_check(&self) -> bool {
        match self.client.get(format!("{}/health", self.api_url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
