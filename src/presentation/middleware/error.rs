use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::infrastructure::upstream::UpstreamError;

/// Application error types that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Request too large: {message}")]
    PayloadTooLarge { message: String },

    #[error("External service error: {service}: {message}")]
    ExternalService { service: String, message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Authentication { .. } => StatusCode::UNAUTHORIZED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ExternalService { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type for logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Authentication { .. } => "authentication",
            AppError::BadRequest { .. } => "bad_request",
            AppError::PayloadTooLarge { .. } => "payload_too_large",
            AppError::ExternalService { .. } => "external_service",
            AppError::Internal { .. } => "internal",
        }
    }

    /// Check if this error should be logged as an error (vs warning)
    pub fn should_log_as_error(&self) -> bool {
        matches!(self, AppError::ExternalService { .. } | AppError::Internal { .. })
    }

    /// Message safe to show callers; infrastructure detail stays in the logs
    pub fn public_message(&self) -> String {
        match self {
            AppError::Authentication { message }
            | AppError::BadRequest { message }
            | AppError::PayloadTooLarge { message } => message.clone(),
            AppError::ExternalService { .. } => "Upstream service unavailable".to_string(),
            AppError::Internal { .. } => "Internal server error".to_string(),
        }
    }

    /// Create error response with the fixed rejection shape
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.public_message(), self.status_code())
    }
}

/// Fixed-shape JSON body written for every rejection
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Reason phrase of `status`
    pub error: String,
    pub message: String,
    pub status: u16,
    /// ISO-8601, UTC
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            status: status.as_u16(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.should_log_as_error() {
            error!(error_type = self.error_type(), "Application error: {}", self);
        } else {
            warn!(error_type = self.error_type(), "Application warning: {}", self);
        }

        self.to_error_response().into_response()
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::BodyTooLarge { size, max_size } => AppError::PayloadTooLarge {
                message: format!(
                    "Request body of {size} bytes exceeds maximum allowed size of {max_size} bytes"
                ),
            },
            UpstreamError::RequestBody(message) => AppError::BadRequest {
                message: format!("Failed to read request body: {message}"),
            },
            UpstreamError::InvalidUrl(message) => AppError::Internal { message },
            UpstreamError::Unreachable(e) | UpstreamError::ResponseBody(e) => {
                AppError::ExternalService { service: "upstream".to_string(), message: e.to_string() }
            }
        }
    }
}
