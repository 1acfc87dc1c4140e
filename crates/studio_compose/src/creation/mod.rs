//! Creation state machine: `Prompting -> Loading -> (Prompting | Error)`,
//! with `Error -> Prompting` on retry.
//!
//! The machine is the only writer of [`CreationState`]. Views observe it
//! through [`CreationWatch`] handles obtained from [`CreationMachine::subscribe`].

mod scaffold;

use std::sync::Arc;
use std::time::Instant;

use studio_core::{CreationState, StudioEvent, Submission};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tracing::{Instrument, info, info_span, warn};

pub use scaffold::{HttpScaffolder, ScaffoldError, Scaffolder};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreationError {
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

/// Result of a scaffolding attempt that was allowed to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationOutcome {
    /// The project exists; the caller navigates away.
    Created,
    /// The machine is now in `Error` carrying `reason`.
    Failed { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveDecision {
    Allowed,
    RejectedWhileLoading,
}

/// Read-only view of the creation state.
#[derive(Debug, Clone)]
pub struct CreationWatch {
    rx: watch::Receiver<CreationState>,
}

impl CreationWatch {
    pub fn current(&self) -> CreationState {
        self.rx.borrow().clone()
    }

    /// Waits for the next transition; returns `None` once the machine is gone.
    pub async fn changed(&mut self) -> Option<CreationState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

/// Reason shown when a started creation is dropped before it settles.
pub const ABANDONED_REASON: &str = "creation abandoned";

/// Armed while `start_from` owns the `Loading` state. Dropping it armed
/// (cancelled future, panicking scaffolder) moves the machine to `Error`.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<CreationState>,
    events: Option<&'a mpsc::Sender<StudioEvent>>,
    armed: bool,
}

impl LoadingGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("creation dropped while loading");
        let state = CreationState::Error {
            reason: ABANDONED_REASON.to_string(),
        };
        self.state.send_replace(state.clone());
        if let Some(tx) = self.events {
            let _ = tx.try_send(StudioEvent::creation_changed(state));
        }
    }
}

pub struct CreationMachine {
    state: watch::Sender<CreationState>,
    scaffolder: Arc<dyn Scaffolder>,
    events: Option<mpsc::Sender<StudioEvent>>,
}

impl CreationMachine {
    pub fn new(scaffolder: Arc<dyn Scaffolder>) -> Self {
        let (state, _) = watch::channel(CreationState::Prompting);
        Self {
            state,
            scaffolder,
            events: None,
        }
    }

    pub fn with_events(mut self, events: mpsc::Sender<StudioEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn state(&self) -> CreationState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> CreationWatch {
        CreationWatch {
            rx: self.state.subscribe(),
        }
    }

    /// Runs the scaffolding call for `submission`. Only valid in
    /// `Prompting`; any other state is rejected without calling out, which is
    /// also what keeps a second submit from racing the first.
    pub async fn start_from(&self, submission: Submission) -> Result<CreationOutcome, CreationError> {
        let entered = self.state.send_if_modified(|state| {
            if state.is_prompting() {
                *state = CreationState::Loading;
                true
            } else {
                false
            }
        });
        if !entered {
            let state = self.state.borrow().as_str();
            warn!(state, "submission ignored, creation already in progress");
            return Err(CreationError::InvalidTransition {
                action: "start creation",
                state,
            });
        }
        let guard = LoadingGuard {
            state: &self.state,
            events: self.events.as_ref(),
            armed: true,
        };
        self.publish(StudioEvent::creation_changed(CreationState::Loading))
            .await;

        let span = info_span!(
            "creation.scaffold",
            is_blank = submission.is_blank(),
            attachments = submission.attachments().len(),
        );
        let start = Instant::now();
        let result = self
            .scaffolder
            .send_prompt(
                submission.text(),
                submission.attachments(),
                submission.is_blank(),
            )
            .instrument(span)
            .await;
        let duration_ms = start.elapsed().as_millis() as u64;

        guard.disarm();
        match result {
            Ok(()) => {
                info!(duration_ms, "project scaffolded");
                self.state.send_replace(CreationState::Prompting);
                self.publish(StudioEvent::creation_changed(CreationState::Prompting))
                    .await;
                self.publish(StudioEvent::project_created()).await;
                Ok(CreationOutcome::Created)
            }
            Err(e) => {
                let reason = e.to_string();
                warn!(duration_ms, error = %reason, "scaffolding failed");
                let state = CreationState::Error {
                    reason: reason.clone(),
                };
                self.state.send_replace(state.clone());
                self.publish(StudioEvent::creation_changed(state)).await;
                Ok(CreationOutcome::Failed { reason })
            }
        }
    }

    /// Leaves `Error` for a fresh `Prompting`. The failed submission is not
    /// restored.
    pub async fn retry(&self) -> Result<(), CreationError> {
        let reset = self.state.send_if_modified(|state| {
            if matches!(state, CreationState::Error { .. }) {
                *state = CreationState::Prompting;
                true
            } else {
                false
            }
        });
        if !reset {
            return Err(CreationError::InvalidTransition {
                action: "retry",
                state: self.state.borrow().as_str(),
            });
        }
        self.publish(StudioEvent::creation_changed(CreationState::Prompting))
            .await;
        Ok(())
    }

    /// Whether the surrounding view may navigate away right now.
    pub fn request_leave(&self) -> LeaveDecision {
        if self.state.borrow().is_loading() {
            warn!("Cannot return to projects while loading");
            LeaveDecision::RejectedWhileLoading
        } else {
            LeaveDecision::Allowed
        }
    }

    async fn publish(&self, event: StudioEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event).await;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use studio_core::Attachment;
    use tokio::sync::Notify;

    use super::*;

    /// Scaffolder double: records calls, optionally fails, optionally waits
    /// for a release signal before answering.
    pub(crate) struct FakeScaffolder {
        pub(crate) calls: AtomicUsize,
        pub(crate) last: Mutex<Option<(String, usize, bool)>>,
        fail_with: Option<String>,
        gate: Option<Arc<Notify>>,
    }

    impl FakeScaffolder {
        pub(crate) fn succeeding() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
                fail_with: None,
                gate: None,
            }
        }

        pub(crate) fn failing(reason: &str) -> Self {
            Self {
                fail_with: Some(reason.to_string()),
                ..Self::succeeding()
            }
        }

        pub(crate) fn gated(gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::succeeding()
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Scaffolder for FakeScaffolder {
        async fn send_prompt(
            &self,
            text: &str,
            attachments: &[Attachment],
            is_blank: bool,
        ) -> Result<(), ScaffoldError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((text.to_string(), attachments.len(), is_blank));
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match &self.fail_with {
                Some(reason) => Err(ScaffoldError::Rejected(reason.clone())),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn test_initial_state_is_prompting() {
        let machine = CreationMachine::new(Arc::new(FakeScaffolder::succeeding()));
        assert_eq!(machine.state(), CreationState::Prompting);
    }

    #[tokio::test]
    async fn test_success_never_visits_error() {
        let machine = CreationMachine::new(Arc::new(FakeScaffolder::succeeding()));
        let mut watch = machine.subscribe();

        let outcome = machine
            .start_from(Submission::prompt("a portfolio site", Vec::new()))
            .await
            .unwrap();

        assert_eq!(outcome, CreationOutcome::Created);
        assert_eq!(machine.state(), CreationState::Prompting);
        let seen = watch.changed().await.unwrap();
        assert!(seen.error_reason().is_none());
    }

    #[tokio::test]
    async fn test_failure_enters_error_and_retry_returns() {
        let machine = CreationMachine::new(Arc::new(FakeScaffolder::failing("quota exceeded")));

        let outcome = machine
            .start_from(Submission::prompt("a portfolio site", Vec::new()))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            CreationOutcome::Failed {
                reason: "quota exceeded".to_string()
            }
        );
        assert_eq!(machine.state().error_reason(), Some("quota exceeded"));

        machine.retry().await.unwrap();
        assert_eq!(machine.state(), CreationState::Prompting);
    }

    #[tokio::test]
    async fn test_retry_outside_error_is_rejected() {
        let machine = CreationMachine::new(Arc::new(FakeScaffolder::succeeding()));
        let err = machine.retry().await.unwrap_err();
        assert_eq!(
            err,
            CreationError::InvalidTransition {
                action: "retry",
                state: "prompting"
            }
        );
    }

    #[tokio::test]
    async fn test_start_from_error_is_rejected() {
        let scaffolder = Arc::new(FakeScaffolder::failing("nope"));
        let machine = CreationMachine::new(scaffolder.clone());
        machine.start_from(Submission::blank()).await.unwrap();

        let err = machine.start_from(Submission::blank()).await.unwrap_err();
        assert!(matches!(err, CreationError::InvalidTransition { state: "error", .. }));
        assert_eq!(scaffolder.calls(), 1);
    }

    #[tokio::test]
    async fn test_loading_rejects_second_submission_and_leave() {
        let gate = Arc::new(Notify::new());
        let scaffolder = Arc::new(FakeScaffolder::gated(gate.clone()));
        let machine = Arc::new(CreationMachine::new(scaffolder.clone()));
        let mut watch = machine.subscribe();

        let running = {
            let machine = Arc::clone(&machine);
            tokio::spawn(async move { machine.start_from(Submission::blank()).await })
        };

        assert_eq!(watch.changed().await, Some(CreationState::Loading));
        assert_eq!(machine.request_leave(), LeaveDecision::RejectedWhileLoading);
        let second = machine.start_from(Submission::blank()).await;
        assert!(second.is_err());

        gate.notify_one();
        let outcome = running.await.unwrap().unwrap();
        assert_eq!(outcome, CreationOutcome::Created);
        assert_eq!(scaffolder.calls(), 1);
        assert_eq!(machine.request_leave(), LeaveDecision::Allowed);
    }

    #[tokio::test]
    async fn test_events_are_published() {
        let (tx, mut rx) = mpsc::channel(8);
        let machine =
            CreationMachine::new(Arc::new(FakeScaffolder::succeeding())).with_events(tx);

        machine.start_from(Submission::blank()).await.unwrap();
        drop(machine);

        let mut kinds = Vec::new();
        while let Some(event) = rx.recv().await {
            kinds.push(serde_json::to_value(&event).unwrap()["type"].as_str().unwrap().to_string());
        }
        assert_eq!(
            kinds,
            vec!["creation_changed", "creation_changed", "project_created"]
        );
    }

    #[tokio::test]
    async fn test_dropped_call_leaves_loading_for_error() {
        let gate = Arc::new(Notify::new());
        let (tx, mut rx) = mpsc::channel(8);
        let machine =
            CreationMachine::new(Arc::new(FakeScaffolder::gated(gate))).with_events(tx);

        let timed_out = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            machine.start_from(Submission::blank()),
        )
        .await;
        assert!(timed_out.is_err());

        assert_eq!(machine.state().error_reason(), Some(ABANDONED_REASON));
        assert_eq!(machine.request_leave(), LeaveDecision::Allowed);
        machine.retry().await.unwrap();
        assert_eq!(machine.state(), CreationState::Prompting);

        assert_eq!(
            rx.recv().await,
            Some(StudioEvent::creation_changed(CreationState::Loading))
        );
        assert_eq!(
            rx.recv().await,
            Some(StudioEvent::creation_changed(CreationState::Error {
                reason: ABANDONED_REASON.to_string()
            }))
        );
    }

    #[tokio::test]
    async fn test_settled_call_does_not_report_abandoned() {
        let machine = CreationMachine::new(Arc::new(FakeScaffolder::failing("quota exceeded")));
        machine.start_from(Submission::blank()).await.unwrap();
        assert_eq!(machine.state().error_reason(), Some("quota exceeded"));
    }

    #[tokio::test]
    async fn test_blank_submission_reaches_scaffolder() {
        let scaffolder = Arc::new(FakeScaffolder::succeeding());
        let machine = CreationMachine::new(scaffolder.clone());
        machine.start_from(Submission::blank()).await.unwrap();
        let last = scaffolder.last.lock().unwrap().clone();
        assert_eq!(last, Some((String::new(), 0, true)));
    }
}
