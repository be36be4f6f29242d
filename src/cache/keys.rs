use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::document::Document;

/// Deterministic fingerprint of a (question, document contents) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Derive the cache key for a question asked over a set of documents.
///
/// Each document's content is digested independently and the digests are
/// sorted before being combined, so the key tracks content alone: renaming or
/// reordering documents leaves it unchanged, while editing any one document's
/// content or the question changes it. The question digest is combined under
/// a distinct label so (question, contents) pairs cannot collide
/// structurally.
pub fn fingerprint(question: &str, documents: &[Document]) -> CacheKey {
    let mut content_digests: Vec<String> = documents
        .iter()
        .map(|doc| hex::encode(Sha256::digest(doc.content.as_bytes())))
        .collect();
    content_digests.sort();

    let mut combined = Sha256::new();
    combined.update(b"question:");
    combined.update(Sha256::digest(question.as_bytes()));
    for digest in &content_digests {
        combined.update(b"content:");
        combined.update(digest.as_bytes());
    }

    CacheKey(format!("sha256:{}", hex::encode(combined.finalize())))
}
