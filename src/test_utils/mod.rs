#[cfg(test)]
pub mod mocks {
    use async_trait::async_trait;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use crate::domain::services::TokenValidator;

    /// Validator with a fixed verdict that records every token it is asked about
    #[derive(Clone, Default)]
    pub struct StubValidator {
        valid: bool,
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl StubValidator {
        pub fn accepting() -> Self {
            Self { valid: true, ..Self::default() }
        }

        pub fn rejecting() -> Self {
            Self { valid: false, ..Self::default() }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// # Panics
        /// Panics if the internal mutex is poisoned
        pub fn seen_tokens(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TokenValidator for StubValidator {
        async fn validate(&self, token: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(token.to_string());
            // Mirror the real clients: the empty token never passes
            self.valid && !token.is_empty()
        }
    }
}
