pub mod open_external;
pub mod open_folder;
pub mod run_command;

mod opener;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::channel::MainChannel;

pub use open_external::{OpenExternal, OpenExternalArgs};
pub use open_folder::{OpenFolder, OpenFolderArgs};
pub use run_command::{RunCommand, RunCommandArgs, RunCommandError, RunCommandExecutor};

pub type HandlerResult = crate::error::Result<JsonValue>;

#[async_trait]
pub trait ChannelHandler: Send + Sync {
    fn channel(&self) -> MainChannel;
    fn description(&self) -> &'static str;
    async fn handle(&self, payload: JsonValue) -> HandlerResult;
}
