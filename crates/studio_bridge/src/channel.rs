use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Named channels understood by the privileged host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MainChannel {
    RunCommand,
    OpenExternalWindow,
    OpenInExplorer,
}

impl MainChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MainChannel::RunCommand => "run-command",
            MainChannel::OpenExternalWindow => "open-external-window",
            MainChannel::OpenInExplorer => "open-in-explorer",
        }
    }
}

impl FromStr for MainChannel {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "run-command" => Ok(MainChannel::RunCommand),
            "open-external-window" => Ok(MainChannel::OpenExternalWindow),
            "open-in-explorer" => Ok(MainChannel::OpenInExplorer),
            other => Err(BridgeError::UnknownChannel(other.to_string())),
        }
    }
}

impl std::fmt::Display for MainChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
