use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::info;

use super::opener::spawn_system_open;
use super::{ChannelHandler, HandlerResult};
use crate::channel::MainChannel;
use crate::error::BridgeError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OpenFolderArgs {
    Path(String),
    Object { path: String },
}

impl OpenFolderArgs {
    pub fn path(&self) -> &str {
        match self {
            OpenFolderArgs::Path(path) | OpenFolderArgs::Object { path } => path,
        }
    }
}

#[derive(Default)]
pub struct OpenFolder;

impl OpenFolder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChannelHandler for OpenFolder {
    fn channel(&self) -> MainChannel {
        MainChannel::OpenInExplorer
    }

    fn description(&self) -> &'static str {
        "Reveal a project folder in the system file manager"
    }

    async fn handle(&self, payload: JsonValue) -> HandlerResult {
        let args: OpenFolderArgs = serde_json::from_value(payload)?;
        let path = args.path();
        let is_dir = tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(BridgeError::Rejected(format!("not a directory: {path}")));
        }
        info!(path = %path, "revealing folder");
        spawn_system_open(path)?;
        Ok(JsonValue::Null)
    }
}
