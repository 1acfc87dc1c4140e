//! The seam between views and the privileged host process.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use studio_core::{CommandRequest, CommandResult};
use tracing::warn;

use crate::channel::MainChannel;
use crate::error::Result;

/// Request/response transport to the host. A `Null` response means the host
/// had nothing to say.
#[async_trait]
pub trait Bridge: Send + Sync {
    async fn invoke(&self, channel: MainChannel, payload: JsonValue) -> Result<JsonValue>;
}

/// Typed `run-command` round trip. Transport errors and unparsable responses
/// are reported as `None`, same as a `null` reply.
pub async fn run_command(bridge: &dyn Bridge, request: &CommandRequest) -> Option<CommandResult> {
    let payload = match serde_json::to_value(request) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "failed to encode command request");
            return None;
        }
    };

    match bridge.invoke(MainChannel::RunCommand, payload).await {
        Ok(JsonValue::Null) => None,
        Ok(value) => match serde_json::from_value::<CommandResult>(value) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(error = %e, "malformed run-command response");
                None
            }
        },
        Err(e) => {
            warn!(error = %e, "run-command transport failed");
            None
        }
    }
}

/// Fire-and-forget openers (external links, project folders). Must be used
/// from within a tokio runtime.
#[derive(Clone)]
pub struct ExternalLinks {
    bridge: Arc<dyn Bridge>,
}

impl ExternalLinks {
    pub fn new(bridge: Arc<dyn Bridge>) -> Self {
        Self { bridge }
    }

    pub fn open(&self, url: impl Into<String>) {
        self.fire(MainChannel::OpenExternalWindow, JsonValue::String(url.into()));
    }

    pub fn open_folder(&self, path: impl Into<String>) {
        self.fire(MainChannel::OpenInExplorer, JsonValue::String(path.into()));
    }

    fn fire(&self, channel: MainChannel, payload: JsonValue) {
        let bridge = Arc::clone(&self.bridge);
        tokio::spawn(async move {
            if let Err(e) = bridge.invoke(channel, payload).await {
                warn!(channel = %channel, error = %e, "fire-and-forget call failed");
            }
        });
    }
}
