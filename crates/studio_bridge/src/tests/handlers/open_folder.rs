use serde_json::json;

use crate::{BridgeError, ChannelHandler, MainChannel, OpenFolder, OpenFolderArgs};

#[test]
fn test_open_folder_channel() {
    assert_eq!(OpenFolder::new().channel(), MainChannel::OpenInExplorer);
}

#[test]
fn test_args_accept_string_or_object() {
    let bare: OpenFolderArgs = serde_json::from_value(json!("/work/site")).unwrap();
    assert_eq!(bare.path(), "/work/site");

    let object: OpenFolderArgs = serde_json::from_value(json!({"path": "/work"})).unwrap();
    assert_eq!(object.path(), "/work");
}

#[tokio::test]
async fn test_rejects_missing_folder() {
    let err = OpenFolder::new()
        .handle(json!("/definitely/not/here"))
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::Rejected(_)));
}

#[tokio::test]
async fn test_rejects_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, "x").unwrap();

    let err = OpenFolder::new()
        .handle(json!(file.to_string_lossy()))
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::Rejected(_)));
}
