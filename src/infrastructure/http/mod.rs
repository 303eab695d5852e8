use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Json,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::infrastructure::{
    auth::build_validator,
    config::AppConfig,
    logging::{LogSink, TracingLogSink},
    upstream::UpstreamClient,
};
use crate::presentation::{middleware::RequestGate, routes};

/// Value of the `service` field on every request span
pub const SERVICE_NAME: &str = "gateway-service";

/// Wire the gate, validator and upstream described by the configuration
pub fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let sink: Arc<dyn LogSink> = Arc::new(TracingLogSink);
    let validator = build_validator(&config.auth, Arc::clone(&sink))?;
    let gate = RequestGate::new(validator, sink, config.filter.clone());
    let upstream = UpstreamClient::new(&config.upstream, config.server.max_body_size)?;

    info!(
        auth_endpoint = %config.auth.validate_url(),
        validation_mode = ?config.auth.mode,
        upstream = %upstream.base_url(),
        "Gateway wired"
    );
    if config.auth.request_timeout_seconds.is_none() {
        tracing::warn!(
            "No timeout configured for auth service calls; a stalled auth service stalls \
             every gated request"
        );
    }

    Ok(create_app(gate, Arc::new(upstream)))
}

/// Create the main application router
pub fn create_app(gate: RequestGate, upstream: Arc<UpstreamClient>) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            tracing::info_span!(
                "request",
                service = SERVICE_NAME,
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }))
        .layer(PropagateRequestIdLayer::x_request_id());

    routes::create_routes(gate, upstream).layer(middleware_stack)
}

/// Health check endpoint for liveness probes
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": SERVICE_NAME
    }))
}

/// Readiness check; the gateway holds no state that needs warming up
pub async fn readiness_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// Start the HTTP server
///
/// # Errors
/// Returns an error if the gateway cannot be wired or the listener fails
pub async fn start_server(config: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&config)?;
    let addr = config.server.socket_addr()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
