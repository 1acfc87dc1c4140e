use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;

/// Finalized composition handed to the creation flow. Never mutated after
/// construction; fields are read through accessors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    text: String,
    attachments: Vec<Attachment>,
    is_blank: bool,
}

impl Submission {
    pub fn prompt(text: impl Into<String>, attachments: Vec<Attachment>) -> Self {
        Self {
            text: text.into(),
            attachments,
            is_blank: false,
        }
    }

    /// "Start from nothing": no text, no attachments.
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            attachments: Vec::new(),
            is_blank: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn is_blank(&self) -> bool {
        self.is_blank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_empty() {
        let s = Submission::blank();
        assert!(s.is_blank());
        assert_eq!(s.text(), "");
        assert!(s.attachments().is_empty());
    }

    #[test]
    fn test_prompt_keeps_attachment_order() {
        let a = Attachment::from_bytes(b"1", "a.png", "image/png");
        let b = Attachment::from_bytes(b"2", "b.png", "image/png");
        let s = Submission::prompt("make a landing page", vec![a.clone(), b.clone()]);
        assert!(!s.is_blank());
        assert_eq!(s.attachments(), &[a, b]);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&Submission::blank()).unwrap();
        assert!(json.contains(r#""isBlank":true"#));
    }
}
