use crate::domain::entities::ValidationResult;
use crate::infrastructure::logging::{LogLevel, LogSink};
use reqwest::StatusCode;

/// Reasons a validation call did not produce a readable verdict
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Token is missing or empty")]
    EmptyToken,

    #[error("Auth service returned status {0}")]
    Status(StatusCode),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response format: {0}")]
    MalformedBody(String),

    #[error("Blocking validation task failed: {0}")]
    Blocking(String),
}

/// Turn a raw auth service response into a verdict
pub fn interpret_response(
    status: StatusCode,
    body: &[u8],
) -> Result<ValidationResult, ValidationError> {
    if !status.is_success() {
        return Err(ValidationError::Status(status));
    }

    serde_json::from_slice::<ValidationResult>(body)
        .map_err(|e| ValidationError::MalformedBody(e.to_string()))
}

/// Collapse a validation outcome to a boolean, logging why a token was refused.
///
/// An empty token and a non-success status are warnings; anything that kept the auth
/// service from answering at all is an error.
pub fn resolve_validity(
    outcome: Result<ValidationResult, ValidationError>,
    sink: &dyn LogSink,
) -> bool {
    match outcome {
        Ok(result) => {
            sink.log(
                LogLevel::Debug,
                &format!("Auth response received: validToken={}", result.valid_token),
            );
            result.valid_token
        }
        Err(e @ ValidationError::EmptyToken) => {
            sink.log(LogLevel::Warn, &e.to_string());
            false
        }
        Err(ValidationError::Status(status)) => {
            sink.log(LogLevel::Warn, &format!("Received error status from auth service: {status}"));
            false
        }
        Err(e) => {
            sink.log(LogLevel::Error, &format!("Error calling auth service: {e}"));
            false
        }
    }
}
