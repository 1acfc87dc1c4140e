//! `studio run`: one command through the host's run-command channel.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Result, bail};
use studio_bridge::{CommandChannel, CommandDisplay, Host, HostConfig};
use studio_observability::{command_span, record_duration, record_error};
use tracing::Instrument;

use crate::output;

pub async fn handle(cwd: Option<String>, timeout: Option<u64>, command: Vec<String>) -> Result<()> {
    let line = command.join(" ");
    if line.trim().is_empty() {
        bail!("No command given");
    }

    let mut config = HostConfig::from_env();
    if let Some(secs) = timeout {
        config = config.with_command_timeout(secs);
    }
    let channel = CommandChannel::new(Arc::new(Host::new(config)));
    let mut display = CommandDisplay::new(line.clone());

    let span = command_span!(cwd.as_deref().unwrap_or(""), line.as_str());
    let spinner = output::spinner(&format!("$ {line}"));
    let start = Instant::now();
    async {
        display.run(&channel, cwd.as_deref(), false).await;
        record_duration("duration_ms", start.elapsed());
        if let Some(stderr) = display.stderr() {
            record_error(stderr);
        }
    }
    .instrument(span)
    .await;

    if let Some(stderr) = display.stderr() {
        output::spinner_error(&spinner, display.command());
        output::command_result(display.command(), display.stdout(), Some(stderr));
        bail!("{stderr}");
    }
    output::spinner_success(&spinner, display.command());
    output::command_result(display.command(), display.stdout(), None);
    Ok(())
}
