use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

/// Runtime mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Local,
    Production,
}

impl std::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!("Invalid runtime mode: {s}. Valid values: local, production")),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub mode: RuntimeMode,
    pub server: ServerConfig,
    pub auth: AuthServiceConfig,
    pub filter: GateConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: u64, // bytes
}

/// How the validation call is scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Non-blocking call awaited on the request task
    #[default]
    Async,
    /// Blocking call run on the blocking thread pool
    Blocking,
}

/// Remote authentication service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthServiceConfig {
    pub base_url: String,
    pub validate_path: String,
    pub mode: ValidationMode,
    /// Unset means the call may wait forever
    pub request_timeout_seconds: Option<u64>,
}

/// Per-filter settings; these only control logging, never the allow/deny decision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    #[serde(alias = "baseMessage")]
    pub base_message: String,
    #[serde(alias = "preLogger")]
    pub pre_logger: bool,
    #[serde(alias = "postLogger")]
    pub post_logger: bool,
}

/// Service that allowed requests are forwarded to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub request_timeout_seconds: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

impl AppConfig {
    /// Load configuration based on runtime mode
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn load() -> Result<Self, config::ConfigError> {
        // Detect runtime mode from environment (default: local)
        let mode = std::env::var("RUN_MODE")
            .unwrap_or_else(|_| "local".to_string())
            .parse::<RuntimeMode>()
            .map_err(config::ConfigError::Message)?;

        Self::load_for_mode(mode)
    }

    /// Load configuration for a specific runtime mode
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn load_for_mode(mode: RuntimeMode) -> Result<Self, config::ConfigError> {
        let file = (mode == RuntimeMode::Local).then_some("gateway");
        Self::load_from(mode, file)
    }

    /// Load configuration for a mode with an optional settings file (extension inferred)
    ///
    /// # Errors
    /// Returns an error if a source cannot be read or a value has the wrong type
    pub fn load_from(mode: RuntimeMode, file: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(name) = file {
            builder = builder.add_source(config::File::with_name(name).required(false));
        }

        // Environment variables override the file, e.g. GATEWAY_SERVICE__AUTH__BASE_URL
        builder = builder.add_source(
            config::Environment::with_prefix("GATEWAY_SERVICE").prefix_separator("__").separator("__"),
        );

        let log_format = match mode {
            RuntimeMode::Local => "pretty",
            RuntimeMode::Production => "json",
        };

        let settings = builder
            .set_default("mode", mode.to_string())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.max_body_size", 10_000_000)? // 10MB
            .set_default("auth.base_url", "http://localhost:8091")?
            .set_default("auth.validate_path", "/auth-service/validate")?
            .set_default("auth.mode", "async")?
            .set_default("filter.base_message", "")?
            .set_default("filter.pre_logger", false)?
            .set_default("filter.post_logger", false)?
            .set_default("upstream.base_url", "http://localhost:8081")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", log_format)?
            .build()?;

        settings.try_deserialize()
    }
}

impl ServerConfig {
    /// Get the socket address for binding
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl AuthServiceConfig {
    /// Full validation endpoint, tolerating a trailing slash on the base URL
    pub fn validate_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.validate_path.starts_with('/') {
            format!("{base}{}", self.validate_path)
        } else {
            format!("{base}/{}", self.validate_path)
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl UpstreamConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}
