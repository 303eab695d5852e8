use std::fmt;

/// Terminal outcome of the request gate for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Forward to the next stage
    Allow,
    /// Write the rejection body and stop
    Deny,
}

impl GateDecision {
    #[must_use]
    pub fn from_validity(valid: bool) -> Self {
        if valid { Self::Allow } else { Self::Deny }
    }
}

impl fmt::Display for GateDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "ALLOW"),
            Self::Deny => write!(f, "DENY"),
        }
    }
}
