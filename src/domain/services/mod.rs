use async_trait::async_trait;

/// Capability to decide whether a token is valid.
///
/// Implementations resolve every failure to `false`; callers never see an error.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validate a single token, short-circuiting the empty token to `false`
    async fn validate(&self, token: &str) -> bool;
}
