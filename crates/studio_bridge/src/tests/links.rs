use std::sync::Arc;

use serde_json::{Value as JsonValue, json};

use super::ScriptedBridge;
use crate::{ExternalLinks, MainChannel};

async fn settle(bridge: &ScriptedBridge, calls: usize) {
    for _ in 0..100 {
        if bridge.calls() >= calls {
            return;
        }
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_open_sends_url_on_external_channel() {
    let bridge = Arc::new(ScriptedBridge::replying(JsonValue::Null));
    let links = ExternalLinks::new(bridge.clone());

    links.open("https://example.com/docs");
    settle(&bridge, 1).await;

    let (channel, payload) = bridge.last().unwrap();
    assert_eq!(channel, MainChannel::OpenExternalWindow);
    assert_eq!(payload, json!("https://example.com/docs"));
}

#[tokio::test]
async fn test_open_folder_uses_explorer_channel() {
    let bridge = Arc::new(ScriptedBridge::replying(JsonValue::Null));
    let links = ExternalLinks::new(bridge.clone());

    links.open_folder("/work/site");
    settle(&bridge, 1).await;

    let (channel, payload) = bridge.last().unwrap();
    assert_eq!(channel, MainChannel::OpenInExplorer);
    assert_eq!(payload, json!("/work/site"));
}

#[tokio::test]
async fn test_transport_failure_is_swallowed() {
    let bridge = Arc::new(ScriptedBridge::failing("host gone"));
    let links = ExternalLinks::new(bridge.clone());

    links.open("https://example.com");
    settle(&bridge, 1).await;
    assert_eq!(bridge.calls(), 1);
}
