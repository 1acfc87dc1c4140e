use serde::{Deserialize, Serialize};

/// Observable state of the prompt-to-project flow. `Prompting` is initial.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CreationState {
    #[default]
    Prompting,
    Loading,
    Error { reason: String },
}

impl CreationState {
    pub fn is_prompting(&self) -> bool {
        matches!(self, CreationState::Prompting)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CreationState::Loading)
    }

    pub fn error_reason(&self) -> Option<&str> {
        match self {
            CreationState::Error { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreationState::Prompting => "prompting",
            CreationState::Loading => "loading",
            CreationState::Error { .. } => "error",
        }
    }
}

impl std::fmt::Display for CreationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
