//! Host configuration.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Wall-clock limit for one `run-command` round trip
    pub command_timeout_secs: u64,
    /// Shell used to interpret commands (None = platform default)
    pub shell: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            command_timeout_secs: 60,
            shell: None,
        }
    }
}

impl HostConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command_timeout(mut self, secs: u64) -> Self {
        self.command_timeout_secs = secs;
        self
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    /// Reads `STUDIO_COMMAND_TIMEOUT` and `STUDIO_SHELL`.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(timeout) = std::env::var("STUDIO_COMMAND_TIMEOUT") {
            if let Ok(val) = timeout.parse::<u64>() {
                config.command_timeout_secs = val;
            }
        }

        if let Ok(shell) = std::env::var("STUDIO_SHELL") {
            if !shell.trim().is_empty() {
                config.shell = Some(shell);
            }
        }

        config
    }
}
