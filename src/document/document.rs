use serde::{Deserialize, Serialize};

/// The atomic unit of content.
///
/// Owned by the caller for the lifetime of a request; the engine never
/// mutates or persists a document, it only reads one and, when condensing,
/// produces a replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique within a single request, not globally.
    pub name: String,
    pub media_type: String,
    pub content: String,
}

impl Document {
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            content: content.into(),
        }
    }

    /// Content length in bytes, the unit used for corpus sizing and chunking.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}
