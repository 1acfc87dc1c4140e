//! Prompt composer: text plus pending image attachments for one prompt.

use std::sync::Arc;

use studio_core::{Attachment, StudioEvent, Submission};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::attachments::AttachmentSet;
use crate::config::ComposeConfig;
use crate::creation::{CreationError, CreationMachine, CreationOutcome};
use crate::ingest::{DragPayload, ImageIngestor, ImageSource, IngestReport, drag_contains_image};
use crate::keyboard::{self, KeyAction, KeyInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Trimmed text is shorter than the configured minimum
    TooShort,
    /// The creation flow is not accepting submissions
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(RejectReason),
    Created,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Enter was consumed; the newline must not be inserted
    Submitted(SubmitOutcome),
    CancelRequested,
    PassThrough,
}

impl KeyOutcome {
    pub fn prevents_default(&self) -> bool {
        matches!(self, KeyOutcome::Submitted(_))
    }
}

pub struct Composer {
    text: String,
    attachments: AttachmentSet,
    ingestor: ImageIngestor,
    creation: Arc<CreationMachine>,
    min_chars: usize,
    max_attachments: Option<usize>,
    dragging_image: bool,
    handling_file: bool,
    events: Option<mpsc::Sender<StudioEvent>>,
}

impl Composer {
    pub fn new(config: &ComposeConfig, creation: Arc<CreationMachine>) -> Self {
        Self {
            text: String::new(),
            attachments: AttachmentSet::new(),
            ingestor: ImageIngestor::new(config),
            creation,
            min_chars: config.min_prompt_chars,
            max_attachments: config.max_attachments,
            dragging_image: false,
            handling_file: false,
            events: None,
        }
    }

    pub fn with_events(mut self, events: mpsc::Sender<StudioEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attachments(&self) -> &AttachmentSet {
        &self.attachments
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_submittable(&self) -> bool {
        self.text.trim().chars().count() >= self.min_chars
    }

    pub fn is_dragging_image(&self) -> bool {
        self.dragging_image
    }

    /// True while a file-picker batch is being read.
    pub fn is_handling_file(&self) -> bool {
        self.handling_file
    }

    /// Hover affordance: only drags that look like images change the flag.
    pub fn set_drag_state(&mut self, payload: &DragPayload, dragging: bool) {
        if drag_contains_image(payload) {
            self.dragging_image = dragging;
        }
    }

    pub fn drag_leave(&mut self) {
        self.dragging_image = false;
    }

    pub async fn drop_images(&mut self, sources: Vec<ImageSource>) -> IngestReport {
        self.dragging_image = false;
        self.add_images(sources).await
    }

    pub async fn paste_images(&mut self, sources: Vec<ImageSource>) -> IngestReport {
        self.add_images(sources).await
    }

    pub async fn pick_images(&mut self, sources: Vec<ImageSource>) -> IngestReport {
        self.handling_file = true;
        let report = self.add_images(sources).await;
        self.handling_file = false;
        report
    }

    /// Ingests `sources` in order and appends what decoded. The returned
    /// report lists exactly the attachments that were added.
    pub async fn add_images(&mut self, sources: Vec<ImageSource>) -> IngestReport {
        let mut report = self.ingestor.ingest_batch(sources).await;

        if let Some(max) = self.max_attachments {
            let room = max.saturating_sub(self.attachments.len());
            if report.attachments.len() > room {
                let dropped = report.attachments.len() - room;
                warn!(max, dropped, "attachment limit reached, dropping images");
                report.attachments.truncate(room);
            }
        }

        for failure in &report.failures {
            self.publish(StudioEvent::decode_failed(
                failure.display_name.clone(),
                failure.reason.clone(),
            ))
            .await;
        }

        if !report.attachments.is_empty() {
            self.attachments.add(report.attachments.iter().cloned());
            self.publish(StudioEvent::attachments_changed(self.attachments.len()))
                .await;
        }
        report
    }

    pub async fn remove_image(&mut self, attachment: &Attachment) -> bool {
        let removed = self.attachments.remove(attachment);
        if removed {
            self.publish(StudioEvent::attachments_changed(self.attachments.len()))
                .await;
        }
        removed
    }

    /// Submits text and attachments. Rejected locally when the text is too
    /// short. Once the creation flow accepts the submission the composer is
    /// cleared.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.is_submittable() {
            warn!(
                chars = self.text.trim().chars().count(),
                min = self.min_chars,
                "Input is too short"
            );
            return SubmitOutcome::Rejected(RejectReason::TooShort);
        }
        if !self.creation.state().is_prompting() {
            warn!(state = %self.creation.state(), "submission ignored while creation is busy");
            return SubmitOutcome::Rejected(RejectReason::Busy);
        }

        let submission = Submission::prompt(
            std::mem::take(&mut self.text),
            self.attachments.take(),
        );
        let had_attachments = !submission.attachments().is_empty();
        info!(attachments = submission.attachments().len(), "submitting prompt");
        let outcome = self.hand_off(submission).await;
        if had_attachments {
            self.publish(StudioEvent::attachments_changed(0)).await;
        }
        outcome
    }

    /// Starts from nothing, whatever the current text or attachments.
    pub async fn submit_blank(&mut self) -> SubmitOutcome {
        info!("submitting blank project");
        self.hand_off(Submission::blank()).await
    }

    /// Applies the key contract: plain Enter outside an IME session
    /// submits, Escape asks to leave, everything else is left alone.
    pub async fn on_key(&mut self, input: &KeyInput) -> KeyOutcome {
        match keyboard::classify(input) {
            KeyAction::Submit => KeyOutcome::Submitted(self.submit().await),
            KeyAction::Cancel => {
                self.publish(StudioEvent::cancel_requested()).await;
                KeyOutcome::CancelRequested
            }
            KeyAction::PassThrough => KeyOutcome::PassThrough,
        }
    }

    async fn hand_off(&mut self, submission: Submission) -> SubmitOutcome {
        match self.creation.start_from(submission).await {
            Ok(CreationOutcome::Created) => SubmitOutcome::Created,
            Ok(CreationOutcome::Failed { reason }) => SubmitOutcome::Failed { reason },
            Err(CreationError::InvalidTransition { state, .. }) => {
                warn!(state, "creation flow rejected submission");
                SubmitOutcome::Rejected(RejectReason::Busy)
            }
        }
    }

    async fn publish(&self, event: StudioEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event).await;
        }
    }
}
