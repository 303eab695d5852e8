use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, error, info, warn};

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Destination for the gate's and the validation clients' decision logs
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

/// Sink that forwards entries to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!(target: "gateway_service::gate", "{message}"),
            LogLevel::Info => info!(target: "gateway_service::gate", "{message}"),
            LogLevel::Warn => warn!(target: "gateway_service::gate", "{message}"),
            LogLevel::Error => error!(target: "gateway_service::gate", "{message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// In-memory sink; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryLogSink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|entry| entry.message).collect()
    }

    /// Entries whose message starts with `prefix`
    pub fn matching(&self, prefix: &str) -> Vec<LogEntry> {
        self.entries().into_iter().filter(|entry| entry.message.starts_with(prefix)).collect()
    }
}

impl LogSink for MemoryLogSink {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogEntry { level, message: message.to_string() });
    }
}
