use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::chunking::{chunk, ChunkingOptions};
use crate::document::Document;
use crate::scoring::{KeywordScorer, Question, ScoringVocabulary};
use crate::selection::{ChunkSelector, ScoredChunk};

pub const DEFAULT_CHUNKS_PER_DOCUMENT: usize = 3;
pub const DEFAULT_PASSTHROUGH_THRESHOLD: usize = 10_000;

/// Visible separator between stitched excerpts.
const EXCERPT_DELIMITER: &str = "\n\n---\n\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreparerConfigError {
    #[error("chunks_per_document must be greater than zero")]
    ZeroChunksPerDocument,
}

/// Everything the preparer needs to decide whether and how to shrink a
/// corpus. Validated once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparerConfig {
    chunking: ChunkingOptions,
    chunks_per_document: usize,
    passthrough_threshold: usize,
    vocabulary: ScoringVocabulary,
}

impl PreparerConfig {
    pub fn new(
        chunking: ChunkingOptions,
        chunks_per_document: usize,
        passthrough_threshold: usize,
        vocabulary: ScoringVocabulary,
    ) -> Result<Self, PreparerConfigError> {
        if chunks_per_document == 0 {
            return Err(PreparerConfigError::ZeroChunksPerDocument);
        }

        Ok(Self {
            chunking,
            chunks_per_document,
            passthrough_threshold,
            vocabulary,
        })
    }

    pub fn with_chunking(chunking: ChunkingOptions) -> Self {
        Self {
            chunking,
            ..Self::default()
        }
    }

    pub fn chunking(&self) -> &ChunkingOptions {
        &self.chunking
    }

    pub fn chunks_per_document(&self) -> usize {
        self.chunks_per_document
    }

    pub fn passthrough_threshold(&self) -> usize {
        self.passthrough_threshold
    }

    pub fn vocabulary(&self) -> &ScoringVocabulary {
        &self.vocabulary
    }
}

impl Default for PreparerConfig {
    fn default() -> Self {
        Self {
            chunking: ChunkingOptions::default(),
            chunks_per_document: DEFAULT_CHUNKS_PER_DOCUMENT,
            passthrough_threshold: DEFAULT_PASSTHROUGH_THRESHOLD,
            vocabulary: ScoringVocabulary::default(),
        }
    }
}

/// Which policy branch produced the prepared corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreparationBranch {
    /// The corpus already fit; documents were returned unmodified.
    Passthrough,
    /// At least one document was condensed to its most relevant chunks.
    Condensed,
    /// Every document scored zero against the question; the original corpus
    /// was returned instead of an empty one.
    ZeroRelevanceFallback,
}

/// What the preparer decided and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparationOutcome {
    pub question: String,
    pub total_size: usize,
    pub threshold: usize,
    pub branch: PreparationBranch,
    pub documents_considered: usize,
    pub documents_condensed: usize,
    pub documents_dropped: usize,
}

/// A possibly-shrunk corpus plus the decision trail behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparationResult {
    pub documents: Vec<Document>,
    pub outcome: PreparationOutcome,
}

/// Drives chunking, scoring, and selection per document and reassembles
/// condensed documents. Pure and synchronous; safe to call from any thread.
pub struct DocumentPreparer {
    config: PreparerConfig,
    selector: ChunkSelector<KeywordScorer>,
}

impl Default for DocumentPreparer {
    fn default() -> Self {
        Self::new(PreparerConfig::default())
    }
}

impl DocumentPreparer {
    pub fn new(config: PreparerConfig) -> Self {
        let scorer = KeywordScorer::new(config.vocabulary.clone());
        Self {
            selector: ChunkSelector::new(scorer),
            config,
        }
    }

    pub fn config(&self) -> &PreparerConfig {
        &self.config
    }

    /// Shrink `documents` to the parts most relevant to `question`, or leave
    /// them alone when the corpus already fits.
    ///
    /// Degradation never loses context: a document with no relevant chunks is
    /// dropped, but if that would drop the whole corpus the originals are
    /// returned unmodified.
    pub fn prepare(&self, documents: &[Document], question: &str) -> PreparationResult {
        let total_size: usize = documents.iter().map(Document::content_len).sum();
        let threshold = self
            .config
            .passthrough_threshold
            .max(self.config.chunking.max_chunk_size());

        if total_size <= threshold {
            debug!(total_size, threshold, "corpus fits, passing documents through");
            return PreparationResult {
                documents: documents.to_vec(),
                outcome: PreparationOutcome {
                    question: question.to_string(),
                    total_size,
                    threshold,
                    branch: PreparationBranch::Passthrough,
                    documents_considered: documents.len(),
                    documents_condensed: 0,
                    documents_dropped: 0,
                },
            };
        }

        let parsed = Question::parse(
            question,
            &self.config.vocabulary,
            self.config.chunking.question_type(),
        );

        let mut condensed = Vec::with_capacity(documents.len());
        let mut dropped = 0usize;

        for document in documents {
            let chunks = chunk(document, &self.config.chunking);
            let mut selected =
                self.selector
                    .select(&chunks, &parsed, self.config.chunks_per_document);

            if selected.is_empty() {
                debug!(document = %document.name, "no relevant chunks, dropping document");
                dropped += 1;
                continue;
            }

            // Reassemble in original reading order, not score order.
            selected.sort_by_key(|scored| scored.chunk.index);
            condensed.push(reassemble(document, &selected));
        }

        if condensed.is_empty() {
            debug!("every document scored zero, returning original corpus");
            return PreparationResult {
                documents: documents.to_vec(),
                outcome: PreparationOutcome {
                    question: question.to_string(),
                    total_size,
                    threshold,
                    branch: PreparationBranch::ZeroRelevanceFallback,
                    documents_considered: documents.len(),
                    documents_condensed: 0,
                    documents_dropped: 0,
                },
            };
        }

        let outcome = PreparationOutcome {
            question: question.to_string(),
            total_size,
            threshold,
            branch: PreparationBranch::Condensed,
            documents_considered: documents.len(),
            documents_condensed: condensed.len(),
            documents_dropped: dropped,
        };

        PreparationResult {
            documents: condensed,
            outcome,
        }
    }
}

/// Stitch the selected chunks back into one condensed document. Each excerpt
/// carries a provenance header naming its position and source document.
fn reassemble(document: &Document, selected: &[ScoredChunk]) -> Document {
    let excerpts: Vec<String> = selected
        .iter()
        .map(|scored| {
            format!(
                "[Excerpt {} of {}]\n{}",
                scored.chunk.index + 1,
                scored.chunk.document_name,
                scored.chunk.content
            )
        })
        .collect();

    Document::new(
        document.name.clone(),
        document.media_type.clone(),
        excerpts.join(EXCERPT_DELIMITER),
    )
}
