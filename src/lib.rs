#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Allow some overly strict pedantic lints for middleware code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

//! Gateway Service
//!
//! An HTTP gateway stage that checks the `token` header of every inbound request
//! against a remote authentication service and either forwards the request upstream
//! or answers with a structured 401.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use domain::entities::*;
pub use domain::services::TokenValidator;
