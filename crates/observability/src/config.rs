//! Logging configuration

use std::sync::Arc;

/// Receives each formatted log line. Called from inside the tracing layer,
/// so it must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

pub const DEFAULT_SERVICE_NAME: &str = "studio";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Reported once at startup
    pub service_name: String,

    /// Filter directive such as "info" or "studio_compose=debug".
    /// Falls back to `RUST_LOG`, then "info".
    pub log_level: Option<String>,

    /// Human-readable output on stderr
    pub enable_console: bool,

    /// Optional line sink, e.g. an embedding view's debug log
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: None,
            enable_console: true,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("log_level", &self.log_level)
            .field("enable_console", &self.enable_console)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Reads:
    /// - `STUDIO_SERVICE_NAME` → service_name
    /// - `STUDIO_LOG_LEVEL` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        let service_name = std::env::var("STUDIO_SERVICE_NAME")
            .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());
        let log_level = std::env::var("STUDIO_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .filter(|level| !level.trim().is_empty());

        Self {
            service_name,
            log_level,
            ..Default::default()
        }
    }

    /// The directive actually handed to the filter.
    pub fn filter_directive(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
