use serde_json::json;

use crate::handlers::open_external::is_allowed_url;
use crate::{BridgeError, ChannelHandler, MainChannel, OpenExternal, OpenExternalArgs};

#[test]
fn test_open_external_channel() {
    assert_eq!(OpenExternal::new().channel(), MainChannel::OpenExternalWindow);
}

#[test]
fn test_args_accept_string_or_object() {
    let bare: OpenExternalArgs = serde_json::from_value(json!("https://example.com")).unwrap();
    assert_eq!(bare.url(), "https://example.com");

    let object: OpenExternalArgs =
        serde_json::from_value(json!({"url": "https://example.com/docs"})).unwrap();
    assert_eq!(object.url(), "https://example.com/docs");
}

#[test]
fn test_allowed_schemes() {
    assert!(is_allowed_url("https://example.com"));
    assert!(is_allowed_url("HTTP://example.com"));
    assert!(is_allowed_url("mailto:team@example.com"));
    assert!(!is_allowed_url("file:///etc/passwd"));
    assert!(!is_allowed_url("javascript:alert(1)"));
}

#[tokio::test]
async fn test_rejects_non_web_url() {
    let err = OpenExternal::new()
        .handle(json!("file:///etc/passwd"))
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::Rejected(_)));
}
