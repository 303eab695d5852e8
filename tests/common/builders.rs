use gateway_service::infrastructure::{
    auth::build_validator,
    config::{AuthServiceConfig, GateConfig, UpstreamConfig, ValidationMode},
    http::create_app,
    upstream::UpstreamClient,
};
use gateway_service::presentation::middleware::{MemoryLogSink, RequestGate};
use std::sync::Arc;

use super::test_app::TestApp;

pub fn auth_config(
    base_url: &str,
    mode: ValidationMode,
    request_timeout_seconds: Option<u64>,
) -> AuthServiceConfig {
    AuthServiceConfig {
        base_url: base_url.to_string(),
        validate_path: "/auth-service/validate".to_string(),
        mode,
        request_timeout_seconds,
    }
}

/// Assembles a gateway in front of mock services, recording the gate's and validator's log lines
pub struct GatewayBuilder {
    auth: AuthServiceConfig,
    upstream_url: String,
    filter: GateConfig,
}

impl GatewayBuilder {
    pub fn new(auth_url: &str, upstream_url: &str) -> Self {
        Self {
            auth: auth_config(auth_url, ValidationMode::Async, None),
            upstream_url: upstream_url.to_string(),
            filter: GateConfig::default(),
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.auth.mode = mode;
        self
    }

    #[must_use]
    pub fn auth_timeout(mut self, seconds: u64) -> Self {
        self.auth.request_timeout_seconds = Some(seconds);
        self
    }

    #[must_use]
    pub fn logging(mut self, base_message: &str, pre_logger: bool, post_logger: bool) -> Self {
        self.filter = GateConfig { base_message: base_message.to_string(), pre_logger, post_logger };
        self
    }

    pub fn build(self) -> (TestApp, MemoryLogSink) {
        let sink = MemoryLogSink::new();
        let validator = build_validator(&self.auth, Arc::new(sink.clone())).unwrap();
        let gate = RequestGate::new(validator, Arc::new(sink.clone()), self.filter);
        let upstream = UpstreamClient::new(
            &UpstreamConfig { base_url: self.upstream_url, request_timeout_seconds: Some(5) },
            1_000_000,
        )
        .unwrap();

        (TestApp::new(create_app(gate, Arc::new(upstream))), sink)
    }
}

/// Base URL of a local port nothing is listening on
pub fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
