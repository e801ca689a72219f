use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use speech_service::SpeechError;

/// Standard error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Request identifier, when one was assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "req_a1b2c3d4e5f6")]
    pub request_id: Option<String>,
    /// Error type
    #[schema(example = "provider_error")]
    pub error: String,
    /// Human-readable error message
    #[schema(example = "Transcription failed: whisper server returned 503")]
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Main API error enum
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Provider error: {message}")]
    Provider { message: String },

    #[error("Upstream service error: {message}")]
    Upstream { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },
}

impl ApiError {
    /// Create a simple validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Provider { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::Provider { .. } => "provider_error",
            ApiError::Upstream { .. } => "upstream_error",
            ApiError::Configuration { .. } => "configuration_error",
            ApiError::Internal { .. } => "internal_error",
            ApiError::ServiceUnavailable { .. } => "service_unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        // Correlate the response with the server-side log line
        error!(
            error_id = %error_id,
            error_type = %self.error_type(),
            status_code = %status_code.as_u16(),
            error = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            request_id: None,
            error: self.error_type().to_string(),
            message: self.to_string(),
            detail: Some(format!("error_id={}", error_id)),
        };

        (status_code, Json(body)).into_response()
    }
}

/// Provider failures surface their own taxonomy; map them onto the API
/// error space without leaking internals.
impl From<SpeechError> for ApiError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::Config(message) => ApiError::Configuration { message },
            SpeechError::Network(e) => ApiError::Upstream {
                message: e.to_string(),
            },
            other => ApiError::Provider {
                message: other.to_string(),
            },
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
