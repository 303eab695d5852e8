use crate::domain::entities::{ValidationRequest, ValidationResult};
use crate::domain::services::TokenValidator;
use crate::infrastructure::auth::{
    parse_endpoint,
    response::{ValidationError, interpret_response, resolve_validity},
};
use crate::infrastructure::config::AuthServiceConfig;
use crate::infrastructure::logging::{LogSink, TracingLogSink};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Url, redirect::Policy};
use std::sync::Arc;
use tracing::debug;

/// Non-blocking validation client backed by a pooled `reqwest::Client`
#[derive(Clone)]
pub struct ValidationClient {
    endpoint: Url,
    http_client: HttpClient,
    sink: Arc<dyn LogSink>,
}

impl ValidationClient {
    pub fn new(config: AuthServiceConfig) -> Result<Self> {
        let endpoint = parse_endpoint(&config)?;

        // A 3xx is the auth service's answer, not a hop to take with the token
        let mut builder = HttpClient::builder().redirect(Policy::none());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { endpoint, http_client, sink: Arc::new(TracingLogSink) })
    }

    #[must_use]
    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Ask the auth service about a token, surfacing why it could not answer
    pub async fn fetch(&self, token: &str) -> Result<ValidationResult, ValidationError> {
        let request = ValidationRequest::new(token);
        if request.is_empty() {
            return Err(ValidationError::EmptyToken);
        }

        debug!(endpoint = %self.endpoint, "Calling auth service");

        let response = self.http_client.get(self.endpoint.clone()).query(&request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        interpret_response(status, &body)
    }
}

#[async_trait]
impl TokenValidator for ValidationClient {
    async fn validate(&self, token: &str) -> bool {
        resolve_validity(self.fetch(token).await, self.sink.as_ref())
    }
}
