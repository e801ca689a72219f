/// Piper TTS provider - fast, local neural speech synthesis
///
/// Drives the `piper` binary as a subprocess: text on stdin, WAV written to
/// a temporary output file. When the binary or the requested voice model is
/// missing the provider degrades to a generated silent WAV instead of
/// failing the request.
use std::path::PathBuf;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, error, warn};

use crate::config::TtsProviderConfig;
use crate::error::{SpeechError, SpeechResult};
use crate::providers::TtsProvider;

const FALLBACK_SAMPLE_RATE: u32 = 16_000;
const FALLBACK_DURATION_SECS: u32 = 2;
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

pub struct PiperTtsProvider {
    executable: String,
    model_path: PathBuf,
    voice: String,
    timeout_ms: u64,
}

impl PiperTtsProvider {
    pub fn new(config: &TtsProviderConfig, timeout_ms: u64) -> SpeechResult<Self> {
        let TtsProviderConfig::Piper {
            executable,
            model_path,
            voice,
        } = config;

        Ok(Self {
            executable: executable.clone(),
            model_path: PathBuf::from(model_path),
            voice: voice.clone(),
            timeout_ms,
        })
    }

    /// Silent WAV used when Piper is unavailable, so demo deployments keep
    /// answering instead of erroring.
    fn fallback_audio(&self) -> SpeechResult<Vec<u8>> {
        warn!("Piper unavailable, returning fallback silent audio");

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: FALLBACK_SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
            for _ in 0..(FALLBACK_SAMPLE_RATE * FALLBACK_DURATION_SECS) {
                writer.write_sample(0_i16)?;
            }
            writer.finalize()?;
        }

        Ok(cursor.into_inner())
    }
}

#[async_trait]
impl TtsProvider for PiperTtsProvider {
    async fn synthesize(&self, text: &str, voice: Option<&str>, speed: f32) -> SpeechResult<Vec<u8>> {
        let started = Instant::now();

        let voice_model = voice.unwrap_or(&self.voice);
        let model_file = self.model_path.join(format!("{}.onnx", voice_model));

        if !model_file.exists() {
            warn!(model = %model_file.display(), "voice model not found");
            return self.fallback_audio();
        }

        let output_file = tempfile::Builder::new()
            .prefix("piper-")
            .suffix(".wav")
            .tempfile()?;

        // Piper expresses rate as a length scale: larger is slower.
        let length_scale = 1.0 / speed.clamp(0.5, 2.0);

        let spawn_result = Command::new(&self.executable)
            .arg("--model")
            .arg(&model_file)
            .arg("--output_file")
            .arg(output_file.path())
            .arg("--length_scale")
            .arg(format!("{:.2}", length_scale))
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let mut child = match spawn_result {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(executable = %self.executable, "piper executable not found");
                return self.fallback_audio();
            }
            Err(e) => return Err(SpeechError::Io(e)),
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let output = match tokio::time::timeout(
            Duration::from_millis(self.timeout_ms),
            child.wait_with_output(),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => {
                error!(timeout_ms = self.timeout_ms, "piper synthesis timed out");
                return Err(SpeechError::SynthesisTimeout(self.timeout_ms));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!(%stderr, "piper synthesis failed");
            return Err(SpeechError::Synthesis(format!("piper exited with error: {}", stderr.trim())));
        }

        let audio_bytes = tokio::fs::read(output_file.path()).await?;

        debug!(
            duration_ms = started.elapsed().as_millis() as u64,
            audio_size = audio_bytes.len(),
            "synthesis completed"
        );

        Ok(audio_bytes)
    }

    async fn health_check(&self) -> bool {
        let probe = Command::new(&self.executable)
            .arg("--version")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .kill_on_drop(true)
            .status();

        match tokio::time::timeout(HEALTH_CHECK_TIMEOUT, probe).await {
            Ok(Ok(status)) => status.success(),
            _ => false,
        }
    }
}
