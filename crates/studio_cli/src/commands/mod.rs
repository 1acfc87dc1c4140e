//! Command dispatch.

pub mod channels;
pub mod prompt;
pub mod run;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Prompt {
            text,
            images,
            blank,
            endpoint,
        } => prompt::handle(text, images, blank, endpoint).await,
        Command::Run {
            cwd,
            timeout,
            command,
        } => run::handle(cwd, timeout, command).await,
        Command::Channels => channels::handle(),
    }
}
