pub mod attachment;
pub mod command;
pub mod creation;
pub mod error;
pub mod event;
pub mod submission;

pub use attachment::{Attachment, AttachmentId, AttachmentKind};
pub use command::{CommandRequest, CommandResult};
pub use creation::CreationState;
pub use error::{Result, StudioError};
pub use event::StudioEvent;
pub use submission::Submission;
