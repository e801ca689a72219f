//! HTTP surface tests for the gateway, run against the in-memory router.
//!
//! Provider-backed paths (STT upload, TTS synthesis) are exercised only up
//! to their validation layer here; the providers themselves are unreachable
//! in the test environment and carry their own unit tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use intent_routing_service::IntentConfig;
use speech_service::{SpeechConfig, SttProviderConfig, TtsProviderConfig};
use voicefront_server::schemas::{HealthResponse, IntentResponse, ServiceInfoResponse};
use voicefront_server::{create_app, GatewayConfig, GatewayServer};

fn test_app() -> axum::Router {
    let config = GatewayConfig {
        app_name: "VoiceFront Gateway".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        privacy_mode: true,
        cors_origins: vec!["*".to_string()],
        intent: IntentConfig::default(),
        speech: SpeechConfig {
            stt: SttProviderConfig::FasterWhisper {
                // Nothing listens here; STT calls fail fast in tests
                api_url: "http://127.0.0.1:9".to_string(),
                model_size: None,
            },
            tts: TtsProviderConfig::Piper {
                executable: "piper".to_string(),
                model_path: "/nonexistent/models".to_string(),
                voice: "en_US-lessac-medium".to_string(),
            },
            stt_timeout_ms: 1_000,
            tts_timeout_ms: 1_000,
        },
    };

    let server = GatewayServer::new(config).expect("test server");
    create_app(server)
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse body")
}

fn intent_request(text: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/intent/route")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "text": text }).to_string(),
        ))
        .expect("build request")
}

#[tokio::test]
async fn test_healthz_is_alive() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/healthz")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("send request");

    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = body_json(response).await;
    assert_eq!(health.status, "healthy");
    assert!(health.providers.is_none());
}

#[tokio::test]
async fn test_responses_carry_process_time_header() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/healthz")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("send request");

    assert!(response.headers().contains_key("x-process-time-ms"));
}

#[tokio::test]
async fn test_root_reports_service_info() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("send request");

    assert_eq!(response.status(), StatusCode::OK);

    let info: ServiceInfoResponse = body_json(response).await;
    assert_eq!(info.name, "VoiceFront Gateway");
    assert_eq!(info.status, "operational");
    assert_eq!(info.docs, "/docs");
    assert_eq!(info.health, "/api/healthz");
}

#[tokio::test]
async fn test_readyz_reports_every_provider() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/readyz")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("send request");

    // Readiness always answers 200; unhealthy providers degrade the status
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = body_json(response).await;
    let providers = health.providers.expect("providers map");
    assert!(providers.contains_key("stt"));
    assert!(providers.contains_key("tts"));
    assert!(providers.contains_key("intent"));

    // The rule-based intent router is always operational
    assert_eq!(providers.get("intent"), Some(&true));
}

#[tokio::test]
async fn test_intent_route_appointment_scenario() {
    let app = test_app();

    let response = app
        .oneshot(intent_request("I need an appointment next Tuesday at 2 PM"))
        .await
        .expect("send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: IntentResponse = body_json(response).await;
    assert!(body.request_id.starts_with("req_"));
    assert_eq!(body.intent, "APPOINTMENT_SCHEDULING");
    assert!(body.confidence >= 0.3);
    assert!(body.entities.get("date").expect("date entity").contains("tuesday"));
    assert!(body
        .entities
        .get("time")
        .expect("time entity")
        .to_lowercase()
        .contains("2 pm"));
    assert!(body.response_text.contains("schedule an appointment"));
    assert_eq!(
        body.reasoning.as_deref(),
        Some("Matched 2 keywords for APPOINTMENT_SCHEDULING")
    );
}

#[tokio::test]
async fn test_intent_route_accepts_empty_text() {
    let app = test_app();

    let response = app.oneshot(intent_request("")).await.expect("send request");

    // Empty input is valid; it classifies to UNKNOWN rather than erroring
    assert_eq!(response.status(), StatusCode::OK);

    let body: IntentResponse = body_json(response).await;
    assert_eq!(body.intent, "UNKNOWN");
    assert_eq!(body.confidence, 0.0);
    assert!(body.entities.is_empty());
    assert!(body.handoff_recommended);
}

#[tokio::test]
async fn test_intent_route_trims_input_at_boundary() {
    let app = test_app();

    let response = app
        .oneshot(intent_request("   schedule an appointment   "))
        .await
        .expect("send request");

    let body: IntentResponse = body_json(response).await;
    assert_eq!(body.intent, "APPOINTMENT_SCHEDULING");
}

#[tokio::test]
async fn test_inbound_request_id_is_propagated() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/intent/route")
        .header("content-type", "application/json")
        .header("x-request-id", "req_upstream0001")
        .body(Body::from(
            serde_json::json!({ "text": "what is my copay" }).to_string(),
        ))
        .expect("build request");

    let response = app.oneshot(request).await.expect("send request");

    let body: IntentResponse = body_json(response).await;
    assert_eq!(body.request_id, "req_upstream0001");
    assert_eq!(body.intent, "FINANCIAL_CLEARANCE");
    assert_eq!(body.entities.get("query_type").map(String::as_str), Some("copay"));
}

#[tokio::test]
async fn test_tts_returns_wav_audio_with_tracking_headers() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/tts/speak")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "text": "How can I help you today?" }).to_string(),
        ))
        .expect("build request");

    let response = app.oneshot(request).await.expect("send request");

    // The missing voice model degrades to generated silence, not an error
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("audio/wav")
    );
    assert!(response.headers().contains_key("x-request-id"));
    assert!(response.headers().contains_key("x-duration-ms"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    assert_eq!(&bytes[0..4], b"RIFF");
}

#[tokio::test]
async fn test_tts_rejects_empty_text() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/tts/speak")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "text": "   " }).to_string(),
        ))
        .expect("build request");

    let response = app.oneshot(request).await.expect("send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tts_rejects_out_of_range_speed() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/tts/speak")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "text": "hello", "speed": 3.5 }).to_string(),
        ))
        .expect("build request");

    let response = app.oneshot(request).await.expect("send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stt_rejects_non_multipart_request() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/stt/transcribe")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .expect("build request");

    let response = app.oneshot(request).await.expect("send request");
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
