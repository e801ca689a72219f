//! Middleware for request processing

pub mod request_context;

pub use request_context::{generate_request_id, RequestContext};

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

/// Header carrying the wall-clock processing time of a request.
pub const PROCESS_TIME_HEADER: &str = "x-process-time-ms";

/// Build the CORS layer from the configured origin list; a literal `*`
/// entry allows any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Record wall-clock processing time on every response.
pub async fn request_timing_middleware(request: Request, next: Next) -> Response {
    let started = Instant::now();

    let mut response = next.run(request).await;

    let elapsed_ms = started.elapsed().as_millis().to_string();
    if let Ok(value) = HeaderValue::from_str(&elapsed_ms) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(PROCESS_TIME_HEADER), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origins(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cors_layer_builds_for_both_shapes() {
        // Construction must not panic for either the wildcard or an
        // explicit origin list
        let _ = cors_layer(&origins(&["*"]));
        let _ = cors_layer(&origins(&["http://localhost:5173", "http://localhost:3000"]));
    }

    #[test]
    fn test_invalid_origins_are_skipped() {
        let _ = cors_layer(&origins(&["not a header value\u{7f}"]));
    }
}
