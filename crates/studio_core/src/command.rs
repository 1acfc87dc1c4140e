use serde::{Deserialize, Serialize};

pub const NO_PROJECT_PATH: &str = "No project path found";
pub const GENERIC_COMMAND_FAILURE: &str = "Failed to run command";

/// Wire request for the `run-command` host channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub cwd: String,
    pub command: String,
}

impl CommandRequest {
    pub fn new(cwd: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            command: command.into(),
        }
    }
}

/// Wire response of the `run-command` host channel.
///
/// `output: Some("")` is a successful run with no output and differs from
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResult {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: Some(output.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
        }
    }

    pub fn no_project_path() -> Self {
        Self::failed(NO_PROJECT_PATH)
    }

    /// Collapses the host's optional response: `None` and `success: false`
    /// without a message both become the generic failure.
    pub fn normalize(response: Option<CommandResult>) -> Self {
        match response {
            Some(res) if res.success => Self::ok(res.output.unwrap_or_default()),
            Some(res) => Self::failed(
                res.error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| GENERIC_COMMAND_FAILURE.to_string()),
            ),
            None => Self::failed(GENERIC_COMMAND_FAILURE),
        }
    }
}
