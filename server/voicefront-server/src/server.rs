use anyhow::Result;
use std::sync::Arc;

use intent_routing_service::{IntentConfig, RuleBasedIntentRouter};
use speech_service::{create_stt_provider, create_tts_provider, SpeechConfig, SttProvider, TtsProvider};
use transcript_redaction::TranscriptRedactor;

/// Gateway configuration
///
/// Built once at process start and handed to every component; no ambient
/// settings lookup happens after construction.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Service display name
    pub app_name: String,
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Redact PII from transcripts by default
    pub privacy_mode: bool,
    /// Allowed CORS origins; "*" allows any
    pub cors_origins: Vec<String>,
    /// Intent classification settings
    pub intent: IntentConfig,
    /// STT/TTS provider settings
    pub speech: SpeechConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app_name = std::env::var("APP_NAME")
            .unwrap_or_else(|_| "VoiceFront Gateway".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000);

        let privacy_mode = std::env::var("PRIVACY_MODE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            app_name,
            host,
            port,
            privacy_mode,
            cors_origins,
            intent: IntentConfig::from_env(),
            speech: SpeechConfig::from_env()?,
        })
    }
}

/// Main gateway server state
///
/// Providers are constructed once and shared read-only across request
/// handlers; every field is cheap to clone.
#[derive(Clone)]
pub struct GatewayServer {
    /// Server configuration
    pub config: GatewayConfig,
    /// Speech-to-text provider
    pub stt: Arc<dyn SttProvider>,
    /// Text-to-speech provider
    pub tts: Arc<dyn TtsProvider>,
    /// Intent classification router
    pub intent_router: Arc<RuleBasedIntentRouter>,
    /// Transcript PII redactor
    pub redactor: Arc<TranscriptRedactor>,
}

impl GatewayServer {
    /// Create a new gateway server instance from loaded configuration
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let stt: Arc<dyn SttProvider> = Arc::from(create_stt_provider(&config.speech)?);
        let tts: Arc<dyn TtsProvider> = Arc::from(create_tts_provider(&config.speech)?);

        let intent_router = Arc::new(RuleBasedIntentRouter::from_config(&config.intent));
        let redactor = Arc::new(TranscriptRedactor::aggressive());

        Ok(Self {
            config,
            stt,
            tts,
            intent_router,
            redactor,
        })
    }

    /// Create a gateway server straight from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env()?)
    }
}
