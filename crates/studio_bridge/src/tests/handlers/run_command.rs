use std::time::Duration;

use serde_json::json;
use studio_core::CommandResult;

use crate::handlers::run_command::CommandOutput;
use crate::{ChannelHandler, MainChannel, RunCommand, RunCommandArgs, RunCommandExecutor};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().unwrap()
}

#[test]
fn test_run_command_channel() {
    let handler = RunCommand::default();
    assert_eq!(handler.channel(), MainChannel::RunCommand);
    assert!(handler.description().contains("shell command"));
}

#[test]
fn test_args_parsing() {
    let args: RunCommandArgs = serde_json::from_value(json!({
        "cwd": "/tmp",
        "command": "echo hello"
    }))
    .unwrap();

    assert_eq!(args.cwd, "/tmp");
    assert_eq!(args.command, "echo hello");
    assert!(args.timeout.is_none());
}

#[test]
fn test_args_require_cwd() {
    let parsed = serde_json::from_value::<RunCommandArgs>(json!({"command": "ls"}));
    assert!(parsed.is_err());
}

#[test]
fn test_output_into_result_success() {
    let output = CommandOutput {
        stdout: "hello\n".to_string(),
        stderr: "".to_string(),
        exit_code: 0,
        duration_ms: 3,
    };
    assert_eq!(output.into_result(), CommandResult::ok("hello\n"));
}

#[test]
fn test_output_into_result_prefers_stderr() {
    let output = CommandOutput {
        stdout: "".to_string(),
        stderr: "missing script\n".to_string(),
        exit_code: 1,
        duration_ms: 3,
    };
    assert_eq!(output.into_result(), CommandResult::failed("missing script"));
}

#[test]
fn test_output_into_result_silent_failure() {
    let output = CommandOutput {
        stdout: "".to_string(),
        stderr: "".to_string(),
        exit_code: 2,
        duration_ms: 3,
    };
    let result = output.into_result();
    assert_eq!(result.error.as_deref(), Some("Command exited with code 2"));
}

#[cfg(unix)]
#[test]
fn test_execute_echo_command() {
    let rt = runtime();
    rt.block_on(async {
        let dir = tempfile::tempdir().unwrap();
        let handler = RunCommand::default();
        let reply = handler
            .handle(json!({"cwd": dir.path().to_string_lossy(), "command": "echo hello"}))
            .await
            .unwrap();

        let result: CommandResult = serde_json::from_value(reply).unwrap();
        assert!(result.success);
        assert!(result.output.unwrap().contains("hello"));
    });
}

#[cfg(unix)]
#[test]
fn test_execute_runs_in_cwd() {
    let rt = runtime();
    rt.block_on(async {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();
        let handler = RunCommand::default();
        let reply = handler
            .handle(json!({"cwd": dir.path().to_string_lossy(), "command": "ls"}))
            .await
            .unwrap();

        assert!(reply["output"].as_str().unwrap().contains("marker.txt"));
    });
}

#[cfg(unix)]
#[test]
fn test_execute_failing_command() {
    let rt = runtime();
    rt.block_on(async {
        let dir = tempfile::tempdir().unwrap();
        let handler = RunCommand::default();
        let reply = handler
            .handle(json!({"cwd": dir.path().to_string_lossy(), "command": "echo nope >&2; exit 3"}))
            .await
            .unwrap();

        assert_eq!(reply["success"], false);
        assert_eq!(reply["error"], "nope");
    });
}

#[test]
fn test_execute_missing_directory() {
    let rt = runtime();
    rt.block_on(async {
        let handler = RunCommand::default();
        let reply = handler
            .handle(json!({"cwd": "/definitely/not/here", "command": "ls"}))
            .await
            .unwrap();

        assert_eq!(reply["success"], false);
        assert!(reply["error"].as_str().unwrap().contains("not found"));
    });
}

#[cfg(unix)]
#[test]
fn test_executor_timeout() {
    let rt = runtime();
    rt.block_on(async {
        let dir = tempfile::tempdir().unwrap();
        let executor = RunCommandExecutor::new().with_timeout(Duration::from_millis(200));
        let args = RunCommandArgs {
            cwd: dir.path().to_string_lossy().into_owned(),
            command: "sleep 5".to_string(),
            timeout: None,
        };
        let err = executor.run(&args).await.unwrap_err();
        assert!(err.to_string().contains("timed out"));
    });
}
