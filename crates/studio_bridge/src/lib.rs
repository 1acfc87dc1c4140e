pub mod bridge;
pub mod channel;
pub mod command_channel;
pub mod config;
pub mod error;
pub mod handlers;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

pub use bridge::{Bridge, ExternalLinks};
pub use channel::MainChannel;
pub use command_channel::{CommandChannel, CommandDisplay};
pub use config::HostConfig;
pub use error::{BridgeError, Result};
pub use handlers::{
    ChannelHandler, HandlerResult, OpenExternal, OpenExternalArgs, OpenFolder, OpenFolderArgs,
    RunCommand, RunCommandArgs, RunCommandError, RunCommandExecutor,
};

/// In-process stand-in for the privileged host: routes a named channel to
/// its registered handler.
pub struct Host {
    config: HostConfig,
    handlers: HashMap<MainChannel, Arc<dyn ChannelHandler>>,
}

impl Host {
    pub fn new(config: HostConfig) -> Self {
        let mut host = Self {
            config,
            handlers: HashMap::new(),
        };
        host.register_defaults();
        host
    }

    /// A host without any handler; every channel answers `null`.
    pub fn empty(config: HostConfig) -> Self {
        Self {
            config,
            handlers: HashMap::new(),
        }
    }

    fn register_defaults(&mut self) {
        let executor = RunCommandExecutor::new()
            .with_timeout(self.config.command_timeout())
            .with_shell(self.config.shell.clone());
        self.register(RunCommand::new(executor));
        self.register(OpenExternal::new());
        self.register(OpenFolder::new());
    }

    pub fn register<T: ChannelHandler + 'static>(&mut self, handler: T) {
        self.handlers.insert(handler.channel(), Arc::new(handler));
    }

    pub fn channels(&self) -> Vec<MainChannel> {
        let mut channels: Vec<_> = self.handlers.keys().copied().collect();
        channels.sort_by_key(|c| c.as_str());
        channels
    }

    /// Registered channels with their handler descriptions, sorted by name.
    pub fn describe(&self) -> Vec<(MainChannel, &'static str)> {
        self.channels()
            .into_iter()
            .filter_map(|c| self.handlers.get(&c).map(|h| (c, h.description())))
            .collect()
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }
}

#[async_trait]
impl Bridge for Host {
    async fn invoke(&self, channel: MainChannel, payload: JsonValue) -> Result<JsonValue> {
        let Some(handler) = self.handlers.get(&channel) else {
            warn!(channel = %channel, "no handler registered");
            return Ok(JsonValue::Null);
        };

        let start = Instant::now();
        let response = handler.handle(payload).await?;
        debug!(
            channel = %channel,
            duration_ms = start.elapsed().as_millis() as u64,
            "channel handled"
        );
        Ok(response)
    }
}
