use std::time::{Duration, Instant};

use studio_core::CommandResult;
use tokio::process::Command;
use tracing::debug;

use super::args::RunCommandArgs;
use super::error::RunCommandError;

#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration_ms: u64,
}

impl CommandOutput {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Successful runs report stdout; failures report stderr, or a status
    /// line when stderr is empty.
    pub fn into_result(self) -> CommandResult {
        if self.is_success() {
            return CommandResult::ok(self.stdout);
        }
        let stderr = self.stderr.trim_end();
        if stderr.is_empty() {
            CommandResult::failed(
                RunCommandError::NonZeroExit {
                    code: self.exit_code,
                }
                .to_string(),
            )
        } else {
            CommandResult::failed(stderr)
        }
    }
}

pub struct RunCommandExecutor {
    timeout: Duration,
    shell: Option<String>,
}

impl Default for RunCommandExecutor {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            shell: None,
        }
    }
}

impl RunCommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_shell(mut self, shell: Option<String>) -> Self {
        self.shell = shell;
        self
    }

    pub async fn run(&self, args: &RunCommandArgs) -> Result<CommandOutput, RunCommandError> {
        let timeout = args
            .timeout
            .map(Duration::from_secs)
            .unwrap_or(self.timeout);

        let is_dir = tokio::fs::metadata(&args.cwd)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(RunCommandError::MissingDirectory(args.cwd.clone()));
        }

        let start = Instant::now();
        let mut cmd = Command::new(self.shell());
        cmd.arg(self.shell_flag())
            .arg(&args.command)
            .current_dir(&args.cwd)
            .kill_on_drop(true);

        let output = tokio::time::timeout(timeout, cmd.output())
            .await
            .map_err(|_| RunCommandError::Timeout(timeout.as_secs()))?
            .map_err(|e| RunCommandError::SpawnFailed(e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let exit_code = output.status.code().unwrap_or(-1);
        let duration_ms = start.elapsed().as_millis() as u64;
        debug!(exit_code, duration_ms, "command finished");

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
            duration_ms,
        })
    }

    fn shell(&self) -> &str {
        self.shell.as_deref().unwrap_or(default_shell())
    }

    fn shell_flag(&self) -> &'static str {
        let shell = self.shell().to_ascii_lowercase();
        if shell.ends_with("cmd") || shell.ends_with("cmd.exe") {
            "/C"
        } else {
            "-c"
        }
    }
}

#[cfg(unix)]
fn default_shell() -> &'static str {
    "/bin/sh"
}

#[cfg(windows)]
fn default_shell() -> &'static str {
    "cmd"
}
