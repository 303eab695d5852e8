use anyhow::Context;
use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderMap, HeaderName, header},
    response::Response,
};
use reqwest::{Client as HttpClient, Url, redirect::Policy};
use tracing::debug;

use crate::infrastructure::config::UpstreamConfig;

/// Headers that describe a single connection and are never forwarded
static HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Request body of {size} bytes exceeds limit of {max_size} bytes")]
    BodyTooLarge { size: u64, max_size: u64 },

    #[error("Failed to read request body: {0}")]
    RequestBody(String),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),

    #[error("Upstream request failed: {0}")]
    Unreachable(reqwest::Error),

    #[error("Failed to read upstream response: {0}")]
    ResponseBody(reqwest::Error),
}

/// Forwards allowed requests to the configured upstream without rewriting them
#[derive(Clone)]
pub struct UpstreamClient {
    base_url: Url,
    http_client: HttpClient,
    max_body_size: u64,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig, max_body_size: u64) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid upstream URL: {}", config.base_url))?;

        // Redirects belong to the caller, not the gateway
        let mut builder = HttpClient::builder().redirect(Policy::none());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { base_url, http_client, max_body_size })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Upstream URL for an inbound path and query
    pub fn target_url(&self, path_and_query: &str) -> Result<Url, UpstreamError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let target = format!("{base}{path_and_query}");
        Url::parse(&target).map_err(|e| UpstreamError::InvalidUrl(format!("{target}: {e}")))
    }

    /// Send the request upstream and hand back its response as-is
    pub async fn forward(&self, request: Request) -> Result<Response, UpstreamError> {
        let (parts, body) = request.into_parts();

        if let Some(size) = declared_length(&parts.headers) {
            if size > self.max_body_size {
                return Err(UpstreamError::BodyTooLarge { size, max_size: self.max_body_size });
            }
        }

        let limit = usize::try_from(self.max_body_size).unwrap_or(usize::MAX);
        let body =
            to_bytes(body, limit).await.map_err(|e| UpstreamError::RequestBody(e.to_string()))?;

        let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
        let url = self.target_url(path_and_query)?;

        let mut headers = strip_hop_by_hop(parts.headers);
        headers.remove(header::HOST);
        headers.remove(header::CONTENT_LENGTH);

        debug!(method = %parts.method, url = %url, "Forwarding request upstream");

        let upstream = self
            .http_client
            .request(parts.method, url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(UpstreamError::Unreachable)?;

        let status = upstream.status();
        let response_headers = strip_hop_by_hop(upstream.headers().clone());
        let bytes = upstream.bytes().await.map_err(UpstreamError::ResponseBody)?;

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        *response.headers_mut() = response_headers;

        Ok(response)
    }
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers.get(header::CONTENT_LENGTH)?.to_str().ok()?.parse().ok()
}

fn strip_hop_by_hop(mut headers: HeaderMap) -> HeaderMap {
    for name in &HOP_BY_HOP {
        headers.remove(name);
    }
    headers
}
