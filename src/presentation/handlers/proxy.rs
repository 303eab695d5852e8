use axum::{
    extract::{Request, State},
    response::Response,
};
use std::sync::Arc;

use crate::infrastructure::upstream::UpstreamClient;
use crate::presentation::middleware::error::AppError;

/// Next stage behind the gate: relay the request to the upstream service
///
/// # Errors
/// Returns an error if the request body cannot be read or the upstream cannot be reached
pub async fn forward(
    State(upstream): State<Arc<UpstreamClient>>,
    request: Request,
) -> Result<Response, AppError> {
    Ok(upstream.forward(request).await?)
}
