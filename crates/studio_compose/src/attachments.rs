use studio_core::Attachment;

/// Pending attachments of one composition, in display order. Duplicates by
/// content are allowed; removal matches the entry identity.
#[derive(Debug, Clone, Default)]
pub struct AttachmentSet {
    items: Vec<Attachment>,
}

impl AttachmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attachments: impl IntoIterator<Item = Attachment>) {
        self.items.extend(attachments);
    }

    /// Removes the first entry identical to `attachment`; returns whether one
    /// was found.
    pub fn remove(&mut self, attachment: &Attachment) -> bool {
        match self.items.iter().position(|a| a.is_same_entry(attachment)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attachment> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Attachment] {
        &self.items
    }

    /// Moves every attachment out, leaving the set empty.
    pub fn take(&mut self) -> Vec<Attachment> {
        std::mem::take(&mut self.items)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a AttachmentSet {
    type Item = &'a Attachment;
    type IntoIter = std::slice::Iter<'a, Attachment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
