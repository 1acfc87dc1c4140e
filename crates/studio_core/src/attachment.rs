//! Normalized, self-contained image attachments.
//!
//! An [`Attachment`] always carries its payload inline as a data URI so it can
//! cross a process boundary. Identity is per entry: every attachment gets a
//! fresh [`AttachmentId`] when it is created, clones share it, and equality
//! compares ids only. Two attachments built from the same bytes are distinct.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentId(uuid::Uuid);

impl AttachmentId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for AttachmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Image,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(skip, default)]
    id: AttachmentId,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    /// `data:<mime>;base64,<payload>`
    pub content: String,
    pub display_name: String,
    pub mime_type: String,
}

impl PartialEq for Attachment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Attachment {}

impl Attachment {
    pub fn image(
        content: impl Into<String>,
        display_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            id: AttachmentId::new(),
            kind: AttachmentKind::Image,
            content: content.into(),
            display_name: display_name.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Encodes raw bytes into an image attachment.
    pub fn from_bytes(
        bytes: &[u8],
        display_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        let mime_type = mime_type.into();
        let content = data_uri(&mime_type, bytes);
        Self::image(content, display_name, mime_type)
    }

    pub fn id(&self) -> AttachmentId {
        self.id
    }

    pub fn is_same_entry(&self, other: &Attachment) -> bool {
        self.id == other.id
    }

    /// Decodes the inline payload back to bytes.
    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        let (_, payload) = split_data_uri(&self.content)?;
        BASE64
            .decode(payload)
            .map_err(|e| StudioError::Attachment(format!("invalid base64 payload: {e}")))
    }

    /// Label for pills: long names keep their extension.
    pub fn truncated_name(&self, max_chars: usize) -> String {
        truncate_name(&self.display_name, max_chars)
    }
}

pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", BASE64.encode(bytes))
}

/// Returns `(mime, base64 payload)` of a base64 data URI.
pub fn split_data_uri(uri: &str) -> Result<(&str, &str)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| StudioError::Attachment("content is not a data uri".to_string()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| StudioError::Attachment("data uri has no payload".to_string()))?;
    let mime = meta
        .strip_suffix(";base64")
        .ok_or_else(|| StudioError::Attachment("data uri is not base64".to_string()))?;
    Ok((mime, payload))
}

fn truncate_name(name: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let count = name.chars().count();
    if count <= max_chars {
        return name.to_string();
    }
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && ext.chars().count() + 2 <= max_chars => (stem, ext),
        _ => (name, ""),
    };
    let tail = if ext.is_empty() {
        String::new()
    } else {
        format!(".{ext}")
    };
    let keep = max_chars
        .saturating_sub(tail.chars().count())
        .saturating_sub(1);
    let head: String = stem.chars().take(keep).collect();
    format!("{head}…{tail}")
}
