use serde::{Deserialize, Serialize};

use crate::creation::CreationState;

/// Events published to views that do not hold a state handle directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StudioEvent {
    CreationChanged { state: CreationState },

    ProjectCreated,

    AttachmentsChanged { count: usize },

    DecodeFailed { display_name: String, reason: String },

    CommandFinished { success: bool },

    CancelRequested,
}

impl StudioEvent {
    pub fn creation_changed(state: CreationState) -> Self {
        StudioEvent::CreationChanged { state }
    }

    pub fn project_created() -> Self {
        StudioEvent::ProjectCreated
    }

    pub fn attachments_changed(count: usize) -> Self {
        StudioEvent::AttachmentsChanged { count }
    }

    pub fn decode_failed(display_name: impl Into<String>, reason: impl Into<String>) -> Self {
        StudioEvent::DecodeFailed {
            display_name: display_name.into(),
            reason: reason.into(),
        }
    }

    pub fn command_finished(success: bool) -> Self {
        StudioEvent::CommandFinished { success }
    }

    pub fn cancel_requested() -> Self {
        StudioEvent::CancelRequested
    }
}
