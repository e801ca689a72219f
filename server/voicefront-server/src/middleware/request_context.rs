//! Request context extraction for tracing
//!
//! Every request gets an identifier: an inbound `X-Request-ID` header is
//! honored so upstream callers can correlate across services, otherwise a
//! fresh one is generated.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};
use std::convert::Infallible;
use uuid::Uuid;

/// Header carrying the request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generate a short request identifier of the form `req_<12 hex chars>`.
pub fn generate_request_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    let short: String = hex.chars().take(12).collect();
    format!("req_{}", short)
}

/// Per-request tracing context
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request ID, inbound or generated
    pub request_id: String,
    /// User-Agent header value
    pub user_agent: Option<String>,
}

impl RequestContext {
    /// Build a context from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .unwrap_or_else(generate_request_id);

        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        Self {
            request_id,
            user_agent,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestContext::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_generated_id_shape() {
        let id = generate_request_id();
        assert!(id.starts_with("req_"));
        assert_eq!(id.len(), "req_".len() + 12);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(generate_request_id(), generate_request_id());
    }

    #[test]
    fn test_inbound_request_id_is_honored() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req_upstream01"));

        let ctx = RequestContext::from_headers(&headers);
        assert_eq!(ctx.request_id, "req_upstream01");
    }

    #[test]
    fn test_empty_request_id_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(""));

        let ctx = RequestContext::from_headers(&headers);
        assert!(ctx.request_id.starts_with("req_"));
        assert_ne!(ctx.request_id, "req_");
    }
}
