use axum::{
    Router, middleware,
    routing::{any, get},
};
use std::sync::Arc;

use crate::{
    infrastructure::{
        http::{health_check, readiness_check},
        upstream::UpstreamClient,
    },
    presentation::{
        handlers,
        middleware::{RequestGate, gate_middleware},
    },
};

/// Create all application routes
///
/// Health endpoints are served by the gateway itself; every other path passes the
/// gate before being forwarded upstream.
pub fn create_routes(gate: RequestGate, upstream: Arc<UpstreamClient>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .merge(gated_routes(gate, upstream))
}

/// Catch-all forwarding routes behind the gate
fn gated_routes(gate: RequestGate, upstream: Arc<UpstreamClient>) -> Router {
    Router::new()
        .route("/", any(handlers::proxy::forward))
        .route("/{*path}", any(handlers::proxy::forward))
        .route_layer(middleware::from_fn_with_state(gate, gate_middleware))
        .with_state(upstream)
}
