mod handlers;
mod links;

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::{Bridge, BridgeError, MainChannel};

/// Bridge double answering every call with a canned reply.
pub(crate) struct ScriptedBridge {
    reply: Mutex<Result<JsonValue, String>>,
    calls: AtomicUsize,
    last: Mutex<Option<(MainChannel, JsonValue)>>,
}

impl ScriptedBridge {
    pub(crate) fn replying(value: JsonValue) -> Self {
        Self {
            reply: Mutex::new(Ok(value)),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            reply: Mutex::new(Err(message.to_string())),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub(crate) fn set_reply(&self, value: JsonValue) {
        *self.reply.lock().unwrap() = Ok(value);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last(&self) -> Option<(MainChannel, JsonValue)> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bridge for ScriptedBridge {
    async fn invoke(&self, channel: MainChannel, payload: JsonValue) -> crate::Result<JsonValue> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((channel, payload));
        match &*self.reply.lock().unwrap() {
            Ok(value) => Ok(value.clone()),
            Err(message) => Err(BridgeError::Transport(message.clone())),
        }
    }
}
