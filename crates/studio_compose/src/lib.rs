pub mod attachments;
pub mod composer;
pub mod config;
pub mod creation;
pub mod error;
pub mod ingest;
pub mod keyboard;

pub use attachments::AttachmentSet;
pub use composer::{Composer, KeyOutcome, RejectReason, SubmitOutcome};
pub use config::ComposeConfig;
pub use creation::{
    ABANDONED_REASON, CreationError, CreationMachine, CreationOutcome, CreationWatch, HttpScaffolder,
    LeaveDecision, ScaffoldError, Scaffolder,
};
pub use error::{ComposeError, Result};
pub use ingest::{
    DecodeFailure, DragPayload, ImageIngestor, ImageSource, IngestReport, SourceData,
    SourceOrigin, drag_contains_image,
};
pub use keyboard::{Key, KeyAction, KeyInput};
