//! `studio prompt`: compose a prompt and hand it to the scaffolding service.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use studio_compose::{
    ComposeConfig, Composer, CreationMachine, HttpScaffolder, ImageSource, RejectReason,
    ScaffoldError, SourceOrigin, SubmitOutcome,
};
use studio_observability::{creation_span, record_duration, record_error};
use tracing::Instrument;

use crate::output;

pub async fn handle(
    text: String,
    images: Vec<PathBuf>,
    blank: bool,
    endpoint: Option<String>,
) -> Result<()> {
    let mut config = ComposeConfig::from_env();
    if let Some(endpoint) = endpoint {
        config = config.with_scaffold_endpoint(endpoint);
    }
    config.validate()?;

    let scaffolder = match HttpScaffolder::from_config(&config) {
        Ok(scaffolder) => scaffolder,
        Err(ScaffoldError::NotConfigured) => {
            bail!("No scaffolding endpoint: pass --endpoint or set STUDIO_SCAFFOLD_URL")
        }
        Err(e) => return Err(e).context("Failed to build scaffolding client"),
    };
    let machine = Arc::new(CreationMachine::new(Arc::new(scaffolder)));
    let mut composer = Composer::new(&config, Arc::clone(&machine));

    if !blank {
        composer.set_text(text);
        let sources: Vec<_> = images
            .into_iter()
            .map(|path| ImageSource::from_path(path, SourceOrigin::Picker))
            .collect();
        let report = composer.pick_images(sources).await;
        for failure in &report.failures {
            output::warning(&format!("Skipped {failure}"));
        }
        if report.skipped > 0 {
            output::warning(&format!("Ignored {} non-image file(s)", report.skipped));
        }
        for attachment in composer.attachments() {
            output::kv("image", &attachment.truncated_name(24));
        }
    }

    let attachments = composer.attachments().len();
    let span = creation_span!(blank, attachments);
    let spinner = output::spinner("Creating project...");
    let start = Instant::now();
    let outcome = async {
        let outcome = if blank {
            composer.submit_blank().await
        } else {
            composer.submit().await
        };
        record_duration("duration_ms", start.elapsed());
        if let SubmitOutcome::Failed { reason } = &outcome {
            record_error(reason.as_str());
        }
        outcome
    }
    .instrument(span)
    .await;

    match outcome {
        SubmitOutcome::Created => {
            output::spinner_success(&spinner, "Project created");
            Ok(())
        }
        SubmitOutcome::Failed { reason } => {
            output::spinner_error(&spinner, "Project creation failed");
            bail!("{reason}")
        }
        SubmitOutcome::Rejected(RejectReason::TooShort) => {
            output::spinner_error(&spinner, "Input is too short");
            bail!(
                "Prompt needs at least {} characters (or pass --blank)",
                config.min_prompt_chars
            )
        }
        SubmitOutcome::Rejected(RejectReason::Busy) => {
            output::spinner_error(&spinner, "Creation already in progress");
            bail!("Creation already in progress")
        }
    }
}
