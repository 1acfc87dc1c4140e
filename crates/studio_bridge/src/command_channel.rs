//! Client side of `run-command` and the per-block display state.

use std::sync::Arc;

use studio_core::{CommandRequest, CommandResult, StudioEvent};
use tokio::sync::mpsc;
use tracing::{Instrument, info_span, warn};

use crate::bridge::{self, Bridge};

/// Stateless request/response wrapper over a [`Bridge`].
#[derive(Clone)]
pub struct CommandChannel {
    bridge: Arc<dyn Bridge>,
    events: Option<mpsc::Sender<StudioEvent>>,
}

impl CommandChannel {
    pub fn new(bridge: Arc<dyn Bridge>) -> Self {
        Self {
            bridge,
            events: None,
        }
    }

    /// Publishes a `command_finished` event after every run.
    pub fn with_events(mut self, events: mpsc::Sender<StudioEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Runs `command` in `cwd`. A missing or blank `cwd` fails locally
    /// without touching the bridge.
    pub async fn run(&self, cwd: Option<&str>, command: &str) -> CommandResult {
        let result = match cwd.map(str::trim).filter(|c| !c.is_empty()) {
            Some(cwd) => {
                let request = CommandRequest::new(cwd, command);
                let span = info_span!("command.run", command.cwd = %cwd);
                let response = bridge::run_command(self.bridge.as_ref(), &request)
                    .instrument(span)
                    .await;
                CommandResult::normalize(response)
            }
            None => {
                warn!("No project path found");
                CommandResult::no_project_path()
            }
        };

        if let Some(tx) = &self.events {
            let _ = tx.send(StudioEvent::command_finished(result.success)).await;
        }
        result
    }
}

/// State of one rendered command block: the latest stdout/stderr pair and a
/// running flag that disables the trigger.
///
/// Runs are serialized per block: [`CommandDisplay::run`] takes `&mut self`,
/// and a trigger while `running` or streaming is ignored.
#[derive(Debug, Clone, Default)]
pub struct CommandDisplay {
    command: String,
    stdout: Option<String>,
    stderr: Option<String>,
    running: bool,
}

impl CommandDisplay {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Default::default()
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn stdout(&self) -> Option<&str> {
        self.stdout.as_deref()
    }

    pub fn stderr(&self) -> Option<&str> {
        self.stderr.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once any result has been shown.
    pub fn has_result(&self) -> bool {
        self.stdout.is_some() || self.stderr.is_some()
    }

    pub fn can_run(&self, is_stream: bool) -> bool {
        !self.running && !is_stream
    }

    pub fn run_label(&self) -> &'static str {
        if self.stdout.is_some() {
            "Run again"
        } else {
            "Run command"
        }
    }

    /// Returns false when the trigger is disabled and nothing ran.
    pub async fn run(
        &mut self,
        channel: &CommandChannel,
        cwd: Option<&str>,
        is_stream: bool,
    ) -> bool {
        if !self.can_run(is_stream) {
            warn!(command = %self.command, "run ignored while trigger is disabled");
            return false;
        }
        self.running = true;
        let result = channel.run(cwd, &self.command).await;
        self.running = false;
        self.apply(result);
        true
    }

    /// A failure replaces stderr and leaves the last stdout in place; a
    /// success sets stdout and clears stderr.
    pub fn apply(&mut self, result: CommandResult) {
        let result = CommandResult::normalize(Some(result));
        if result.success {
            self.stdout = Some(result.output.unwrap_or_default());
            self.stderr = None;
        } else {
            self.stderr = result.error;
        }
    }
}
