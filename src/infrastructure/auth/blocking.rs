use crate::domain::entities::{ValidationRequest, ValidationResult};
use crate::domain::services::TokenValidator;
use crate::infrastructure::auth::{
    parse_endpoint,
    response::{ValidationError, interpret_response, resolve_validity},
};
use crate::infrastructure::config::AuthServiceConfig;
use crate::infrastructure::logging::{LogSink, TracingLogSink};
use async_trait::async_trait;
use reqwest::{Url, blocking::Client as BlockingHttpClient, redirect::Policy};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::debug;

/// Process-wide blocking client, built on first use from the blocking pool.
///
/// A `reqwest::blocking::Client` owns its own runtime thread and must never be created or
/// dropped on an async worker; a static is never dropped, and its pool is shared by every
/// blocking validator.
static BLOCKING_CLIENT: OnceLock<BlockingHttpClient> = OnceLock::new();

fn shared_client() -> Result<&'static BlockingHttpClient, ValidationError> {
    if let Some(client) = BLOCKING_CLIENT.get() {
        return Ok(client);
    }

    // No client-wide timeout (the blocking default is 30s); each request sets its own.
    // A 3xx is the auth service's answer, not a hop to take with the token.
    let client = BlockingHttpClient::builder()
        .timeout(None::<Duration>)
        .redirect(Policy::none())
        .build()?;
    Ok(BLOCKING_CLIENT.get_or_init(|| client))
}

/// Validation client that issues a blocking call on the blocking thread pool
#[derive(Clone)]
pub struct BlockingValidationClient {
    endpoint: Url,
    timeout: Option<Duration>,
    sink: Arc<dyn LogSink>,
}

impl BlockingValidationClient {
    pub fn new(config: AuthServiceConfig) -> anyhow::Result<Self> {
        let endpoint = parse_endpoint(&config)?;
        Ok(Self { endpoint, timeout: config.request_timeout(), sink: Arc::new(TracingLogSink) })
    }

    #[must_use]
    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Blocking call; must run on a thread where blocking is allowed
    pub fn fetch_blocking(&self, token: &str) -> Result<ValidationResult, ValidationError> {
        let request = ValidationRequest::new(token);
        if request.is_empty() {
            return Err(ValidationError::EmptyToken);
        }

        debug!(endpoint = %self.endpoint, "Calling auth service (blocking)");

        let mut call = shared_client()?.get(self.endpoint.clone()).query(&request);
        if let Some(timeout) = self.timeout {
            call = call.timeout(timeout);
        }
        let response = call.send()?;
        let status = response.status();
        let body = response.bytes()?;

        interpret_response(status, &body)
    }

    /// Run the blocking call without stalling the async worker
    pub async fn fetch(&self, token: &str) -> Result<ValidationResult, ValidationError> {
        if token.is_empty() {
            return Err(ValidationError::EmptyToken);
        }

        let client = self.clone();
        let token = token.to_string();
        tokio::task::spawn_blocking(move || client.fetch_blocking(&token))
            .await
            .map_err(|e| ValidationError::Blocking(e.to_string()))?
    }
}

#[async_trait]
impl TokenValidator for BlockingValidationClient {
    async fn validate(&self, token: &str) -> bool {
        resolve_validity(self.fetch(token).await, self.sink.as_ref())
    }
}
