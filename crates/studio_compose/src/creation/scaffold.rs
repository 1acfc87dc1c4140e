//! The external scaffolding call that turns a prompt into a project.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use studio_core::Attachment;
use thiserror::Error;

use crate::config::ComposeConfig;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("scaffolding service is not configured")]
    NotConfigured,

    #[error("scaffolding request failed: {0}")]
    Request(String),

    #[error("scaffolding service answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Rejected(String),
}

/// At most one call per submission; the caller waits for it to settle
/// before calling again.
#[async_trait]
pub trait Scaffolder: Send + Sync {
    async fn send_prompt(
        &self,
        text: &str,
        attachments: &[Attachment],
        is_blank: bool,
    ) -> Result<(), ScaffoldError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScaffoldImage<'a> {
    content: &'a str,
    mime_type: &'a str,
    display_name: &'a str,
}

#[derive(Serialize)]
struct ScaffoldRequest<'a> {
    prompt: &'a str,
    images: Vec<ScaffoldImage<'a>>,
    blank: bool,
}

/// Posts submissions as JSON to a scaffolding endpoint.
pub struct HttpScaffolder {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpScaffolder {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ScaffoldError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScaffoldError::Request(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Uses `scaffold_endpoint` and `scaffold_timeout_secs`.
    pub fn from_config(config: &ComposeConfig) -> Result<Self, ScaffoldError> {
        let endpoint = config
            .scaffold_endpoint
            .as_deref()
            .ok_or(ScaffoldError::NotConfigured)?;
        Self::new(endpoint, config.scaffold_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn request_body<'a>(text: &'a str, attachments: &'a [Attachment], is_blank: bool) -> ScaffoldRequest<'a> {
    ScaffoldRequest {
        prompt: text,
        images: attachments
            .iter()
            .map(|a| ScaffoldImage {
                content: &a.content,
                mime_type: &a.mime_type,
                display_name: &a.display_name,
            })
            .collect(),
        blank: is_blank,
    }
}

#[async_trait]
impl Scaffolder for HttpScaffolder {
    async fn send_prompt(
        &self,
        text: &str,
        attachments: &[Attachment],
        is_blank: bool,
    ) -> Result<(), ScaffoldError> {
        let body = request_body(text, attachments, is_blank);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ScaffoldError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ScaffoldError::Status {
            status: status.as_u16(),
            body: body.trim().to_string(),
        })
    }
}
