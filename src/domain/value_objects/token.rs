use axum::http::HeaderMap;
use std::fmt;

/// Header carrying the opaque credential
pub const TOKEN_HEADER: &str = "token";

/// Opaque credential taken from the `token` header.
///
/// The value is never decoded locally; it is only forwarded to the auth service.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Token(String);

impl Token {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// First value of the `token` header.
    ///
    /// A missing header, an empty value and a value that is not visible ASCII all
    /// yield the empty token.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(TOKEN_HEADER)
            // obs-text (bytes >= 0x80) fails here and is denied without an auth call,
            // rather than reinterpreted as Latin-1 and sent on
            .and_then(|value| value.to_str().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Keep credentials out of debug output
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(len={})", self.0.len())
    }
}
