//! Configuration loading and constants.
//!
//! Reads the listen address from environment variables and defines constants
//! for defaults, logging, and the endpoint table the service advertises.
//! `AppConfig` is the root configuration struct.

// =============================================================================
// Listen Address Defaults
// =============================================================================

/// Interface/hostname to bind when `HOST` is not set
pub const DEFAULT_HOST: &str = "localhost";

/// TCP port to bind when `PORT` is not set
pub const DEFAULT_PORT: u16 = 8080;

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "pulse=debug,tower_http=info";

/// Default log format when LOG_FORMAT is not set (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

// =============================================================================
// Endpoint Table
// =============================================================================

/// Paths the service recognizes, in the order they are advertised
pub const AVAILABLE_ENDPOINTS: [&str; 2] = ["/health", "/ping"];

/// The only method the endpoint table accepts
pub const ALLOWED_METHODS: [&str; 1] = ["GET"];

/// Probe responses must never be served stale by an intermediary
pub const CACHE_CONTROL_PROBE: &str = "no-store";

/// Listen address configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface or hostname to bind (`HOST`)
    pub host: String,
    /// TCP port to bind (`PORT`)
    pub port: u16,
}

impl AppConfig {
    /// Read `HOST`/`PORT` from the environment, falling back to
    /// `localhost:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// The `host:port` string handed to the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}': expected a TCP port number")]
    InvalidPort(String),
}

/// Log output format, selected via `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable log lines
    Text,
    /// Structured JSON log lines
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT` from the environment; anything but "json" means text.
    pub fn from_env() -> Self {
        Self::from_name(&std::env::var("LOG_FORMAT").unwrap_or_else(|_| DEFAULT_LOG_FORMAT.to_string()))
    }

    fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}
