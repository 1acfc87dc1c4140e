use tokio::process::Command;

use crate::error::BridgeError;

/// Hands `target` to the platform opener without waiting for it to exit.
pub(crate) fn spawn_system_open(target: &str) -> Result<(), BridgeError> {
    let mut cmd = opener_command(target);
    cmd.spawn()
        .map(|_| ())
        .map_err(|e| BridgeError::Handler(format!("failed to launch opener: {e}")))
}

#[cfg(target_os = "macos")]
fn opener_command(target: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(target);
    cmd
}

#[cfg(windows)]
fn opener_command(target: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(target);
    cmd
}

#[cfg(all(unix, not(target_os = "macos")))]
fn opener_command(target: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}
