use serde::{Deserialize, Serialize};

/// Query sent to the auth service for a single inbound request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRequest {
    pub token: String,
}

impl ValidationRequest {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

/// Auth service verdict for one token.
///
/// `validToken` is mandatory on the wire: a body without it does not deserialize and is
/// treated as a malformed response by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid_token: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
