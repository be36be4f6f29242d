use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_CHUNK_SIZE: usize = 5000;
pub const DEFAULT_OVERLAP_SIZE: usize = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChunkingOptionsError {
    #[error("max_chunk_size must be greater than zero")]
    ZeroMaxChunkSize,
    #[error("overlap_size ({overlap_size}) must be smaller than max_chunk_size ({max_chunk_size})")]
    OverlapTooLarge {
        overlap_size: usize,
        max_chunk_size: usize,
    },
}

/// Caller-supplied hint about the question domain.
///
/// `Financial` and `Market` force the matching scorer boost on top of the
/// vocabulary autodetection that runs against the question text; `General`
/// adds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    General,
    Financial,
    Market,
}

/// How a single document is split.
///
/// Constructed only through [`ChunkingOptions::new`], which rejects the
/// combinations the chunker cannot make progress on. Sizes are in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingOptions {
    max_chunk_size: usize,
    overlap_size: usize,
    question_type: QuestionType,
}

impl ChunkingOptions {
    pub fn new(
        max_chunk_size: usize,
        overlap_size: usize,
        question_type: QuestionType,
    ) -> Result<Self, ChunkingOptionsError> {
        if max_chunk_size == 0 {
            return Err(ChunkingOptionsError::ZeroMaxChunkSize);
        }
        if overlap_size >= max_chunk_size {
            return Err(ChunkingOptionsError::OverlapTooLarge {
                overlap_size,
                max_chunk_size,
            });
        }

        Ok(Self {
            max_chunk_size,
            overlap_size,
            question_type,
        })
    }

    pub fn with_question_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = question_type;
        self
    }

    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    pub fn overlap_size(&self) -> usize {
        self.overlap_size
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }
}

impl Default for ChunkingOptions {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            overlap_size: DEFAULT_OVERLAP_SIZE,
            question_type: QuestionType::General,
        }
    }
}
