use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::info;

use super::opener::spawn_system_open;
use super::{ChannelHandler, HandlerResult};
use crate::channel::MainChannel;
use crate::error::BridgeError;

const ALLOWED_SCHEMES: &[&str] = &["https://", "http://", "mailto:"];

/// Payload is either a bare URL string or `{ "url": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OpenExternalArgs {
    Url(String),
    Object { url: String },
}

impl OpenExternalArgs {
    pub fn url(&self) -> &str {
        match self {
            OpenExternalArgs::Url(url) | OpenExternalArgs::Object { url } => url,
        }
    }
}

pub fn is_allowed_url(url: &str) -> bool {
    let lowered = url.trim().to_ascii_lowercase();
    ALLOWED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme))
}

#[derive(Default)]
pub struct OpenExternal;

impl OpenExternal {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChannelHandler for OpenExternal {
    fn channel(&self) -> MainChannel {
        MainChannel::OpenExternalWindow
    }

    fn description(&self) -> &'static str {
        "Open a web link in the system browser"
    }

    async fn handle(&self, payload: JsonValue) -> HandlerResult {
        let args: OpenExternalArgs = serde_json::from_value(payload)?;
        let url = args.url().trim();
        if !is_allowed_url(url) {
            return Err(BridgeError::Rejected(url.to_string()));
        }
        info!(url = %url, "opening external link");
        spawn_system_open(url)?;
        Ok(JsonValue::Null)
    }
}
