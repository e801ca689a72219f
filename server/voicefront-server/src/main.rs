use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use speech_service::{SttProviderConfig, TtsProviderConfig};
use voicefront_server::{create_app, GatewayConfig, GatewayServer};

/// VoiceFront Gateway HTTP Server
#[derive(Parser, Debug)]
#[command(name = "voicefront-server")]
#[command(about = "Voice AI gateway for medical front office workflows")]
struct Args {
    /// Server bind address (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_tracing(args.verbose);

    let mut config = GatewayConfig::from_env().context("failed to load configuration")?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    info!("Starting {}", config.app_name);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("STT provider: {}", stt_provider_name(&config.speech.stt));
    info!("TTS provider: {}", tts_provider_name(&config.speech.tts));
    info!("Privacy mode: {}", config.privacy_mode);
    info!(
        "Intent confidence threshold: {}",
        config.intent.confidence_threshold
    );

    let app_name = config.app_name.clone();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;

    let server = GatewayServer::new(config).context("failed to initialize providers")?;
    let app = create_app(server);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    info!("VoiceFront Gateway running on http://{}", addr);
    info!("API docs available at: http://{}/docs", addr);
    info!("Health check available at: http://{}/api/healthz", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shutting down {}", app_name);

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "voicefront_server={level},intent_routing_service={level},speech_service={level},tower_http=info,hyper=info,reqwest=info"
        )
        .into()
    });

    let is_development =
        std::env::var("VOICEFRONT_ENV").unwrap_or_else(|_| "development".to_string())
            == "development";

    if is_development {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .init();
    } else {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_ansi(false).json())
            .init();
    }
}

fn stt_provider_name(config: &SttProviderConfig) -> &'static str {
    match config {
        SttProviderConfig::FasterWhisper { .. } => "faster_whisper",
        SttProviderConfig::Vosk { .. } => "vosk",
    }
}

fn tts_provider_name(config: &TtsProviderConfig) -> &'static str {
    match config {
        TtsProviderConfig::Piper { .. } => "piper",
    }
}

async fn shutdown_signal() {
    // Shutdown on ctrl-c; errors installing the handler leave the server
    // running until killed externally.
    let _ = tokio::signal::ctrl_c().await;
}
