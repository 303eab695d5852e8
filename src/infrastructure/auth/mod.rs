pub mod blocking;
pub mod client;
pub mod response;

pub use blocking::BlockingValidationClient;
pub use client::ValidationClient;
pub use response::{ValidationError, interpret_response, resolve_validity};

use crate::domain::services::TokenValidator;
use crate::infrastructure::config::{AuthServiceConfig, ValidationMode};
use crate::infrastructure::logging::LogSink;
use std::sync::Arc;

/// Build the validator for the configured execution mode, logging refusals to `sink`
pub fn build_validator(
    config: &AuthServiceConfig,
    sink: Arc<dyn LogSink>,
) -> anyhow::Result<Arc<dyn TokenValidator>> {
    let validator: Arc<dyn TokenValidator> = match config.mode {
        ValidationMode::Async => {
            Arc::new(ValidationClient::new(config.clone())?.with_log_sink(sink))
        }
        ValidationMode::Blocking => {
            Arc::new(BlockingValidationClient::new(config.clone())?.with_log_sink(sink))
        }
    };
    Ok(validator)
}

/// Reject endpoints that can never be reached before the first request arrives
pub(crate) fn parse_endpoint(config: &AuthServiceConfig) -> anyhow::Result<reqwest::Url> {
    use anyhow::Context;

    if config.base_url.trim().is_empty() {
        anyhow::bail!("Auth service base URL is required");
    }

    reqwest::Url::parse(&config.validate_url())
        .with_context(|| format!("Invalid auth service URL: {}", config.validate_url()))
}
