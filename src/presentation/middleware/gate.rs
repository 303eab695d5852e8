use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::error::AppError;
use crate::application::use_cases::AuthorizeRequestUseCase;
use crate::domain::{
    services::TokenValidator,
    value_objects::{GateDecision, Token},
};
use crate::infrastructure::{
    config::GateConfig,
    logging::{LogLevel, LogSink},
};

/// Message returned for every denied request, whatever the reason
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid JWT token";

/// Per-request allow/deny filter in front of the next stage.
///
/// Each request moves through `pre-log → validate → forward + post-log` or
/// `pre-log → validate → reject`. Exactly one validation call is made and exactly one
/// response is produced: either the next stage's response, untouched, or a 401 body.
#[derive(Clone)]
pub struct RequestGate {
    authorize: AuthorizeRequestUseCase<dyn TokenValidator>,
    sink: Arc<dyn LogSink>,
    config: Arc<GateConfig>,
}

impl RequestGate {
    pub fn new(
        validator: Arc<dyn TokenValidator>,
        sink: Arc<dyn LogSink>,
        config: GateConfig,
    ) -> Self {
        Self { authorize: AuthorizeRequestUseCase::new(validator), sink, config: Arc::new(config) }
    }

    /// Validate the `token` header without touching the request
    pub async fn decide(&self, headers: &HeaderMap) -> GateDecision {
        let token = Token::from_headers(headers);
        self.authorize.execute(&token).await
    }

    /// Run the full gate protocol for one request
    pub async fn handle(&self, request: Request, next: Next) -> Response {
        if self.config.pre_logger {
            self.sink.log(
                LogLevel::Info,
                &format!("Pre GatewayFilter logging: {}", self.config.base_message),
            );
        }

        let decision = self.decide(request.headers()).await;

        match decision {
            GateDecision::Deny => {
                self.sink.log(LogLevel::Warn, "Token validation failed");
                // Already logged through the sink, so skip AppError's own logging
                AppError::Authentication { message: INVALID_TOKEN_MESSAGE.to_string() }
                    .to_error_response()
                    .into_response()
            }
            GateDecision::Allow => {
                self.sink.log(LogLevel::Info, "Token validated successfully");
                let response = next.run(request).await;

                if self.config.post_logger {
                    self.sink.log(
                        LogLevel::Info,
                        &format!("Post GatewayFilter logging: {}", self.config.base_message),
                    );
                }

                response
            }
        }
    }
}

/// Axum adapter for [`RequestGate`]
pub async fn gate_middleware(
    State(gate): State<RequestGate>,
    request: Request,
    next: Next,
) -> Response {
    gate.handle(request, next).await
}
