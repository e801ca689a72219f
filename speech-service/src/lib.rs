//! Speech services for the VoiceFront gateway
//!
//! Provides speech-to-text and text-to-speech behind swappable provider
//! traits, with **privacy-first** defaults: both default providers run
//! locally and no audio leaves the deployment.
//!
//! # Providers
//!
//! **STT:**
//! 1. **Faster Whisper** - self-hosted whisper server, default
//! 2. **Vosk** - lightweight alternative for constrained environments
//!
//! **TTS:**
//! 1. **Piper** - fast local neural synthesis via the `piper` binary
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use speech_service::{SpeechConfig, create_stt_provider, create_tts_provider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SpeechConfig::from_env()?;
//!
//! let stt = create_stt_provider(&config)?;
//! let tts = create_tts_provider(&config)?;
//!
//! # let audio_bytes: Vec<u8> = vec![];
//! let transcription = stt.transcribe(&audio_bytes, Some("en")).await?;
//! println!("Transcription: {}", transcription.text);
//!
//! let reply_audio = tts.synthesize("How can I help you?", None, 1.0).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod providers;
pub mod transcription;

pub use config::*;
pub use error::*;
pub use providers::*;
pub use transcription::*;
