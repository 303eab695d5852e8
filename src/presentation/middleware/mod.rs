//! Middleware modules for HTTP request processing
//!
//! - Token gate in front of the upstream
//! - Error responses with the fixed rejection shape

pub mod error;
pub mod gate;

// Re-export commonly used types
pub use error::{AppError, ErrorResponse};
pub use gate::{INVALID_TOKEN_MESSAGE, RequestGate, gate_middleware};
pub use crate::infrastructure::logging::{
    LogEntry, LogLevel, LogSink, MemoryLogSink, TracingLogSink,
};
