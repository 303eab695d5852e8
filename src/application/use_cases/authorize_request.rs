use std::sync::Arc;

use crate::domain::{
    services::TokenValidator,
    value_objects::{GateDecision, Token},
};

/// Use case for deciding whether a single inbound request may pass the gate
pub struct AuthorizeRequestUseCase<V>
where
    V: TokenValidator + ?Sized,
{
    validator: Arc<V>,
}

impl<V> Clone for AuthorizeRequestUseCase<V>
where
    V: TokenValidator + ?Sized,
{
    fn clone(&self) -> Self {
        Self { validator: Arc::clone(&self.validator) }
    }
}

impl<V> AuthorizeRequestUseCase<V>
where
    V: TokenValidator + ?Sized,
{
    /// Create a new authorize request use case
    pub fn new(validator: Arc<V>) -> Self {
        Self { validator }
    }

    /// Issue exactly one validation and map the verdict to a decision
    pub async fn execute(&self, token: &Token) -> GateDecision {
        let decision = GateDecision::from_validity(self.validator.validate(token.as_str()).await);
        tracing::debug!(decision = %decision, token = ?token, "Gate decision reached");
        decision
    }
}
