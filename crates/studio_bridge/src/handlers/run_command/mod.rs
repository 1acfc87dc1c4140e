mod args;
mod error;
mod executor;

pub use args::RunCommandArgs;
pub use error::RunCommandError;
pub use executor::{CommandOutput, RunCommandExecutor};

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use studio_core::CommandResult;
use tracing::{info, warn};

use crate::channel::MainChannel;
use crate::handlers::{ChannelHandler, HandlerResult};

/// Host side of `run-command`. Execution problems are answered as
/// `{ success: false, error }` rather than as transport errors.
pub struct RunCommand {
    executor: RunCommandExecutor,
}

impl RunCommand {
    pub fn new(executor: RunCommandExecutor) -> Self {
        Self { executor }
    }
}

impl Default for RunCommand {
    fn default() -> Self {
        Self::new(RunCommandExecutor::default())
    }
}

#[async_trait]
impl ChannelHandler for RunCommand {
    fn channel(&self) -> MainChannel {
        MainChannel::RunCommand
    }

    fn description(&self) -> &'static str {
        "Run a shell command inside a project directory and capture its output"
    }

    async fn handle(&self, payload: JsonValue) -> HandlerResult {
        let args: RunCommandArgs = serde_json::from_value(payload)?;
        info!(cwd = %args.cwd, command = %args.command, "running command");

        let result = match self.executor.run(&args).await {
            Ok(output) => output.into_result(),
            Err(e) => {
                warn!(error = %e, "command could not run");
                CommandResult::failed(e.to_string())
            }
        };
        Ok(serde_json::to_value(result)?)
    }
}
