pub mod chunker;
pub mod options;

pub use chunker::{chunk, Chunk};
pub use options::{
    ChunkingOptions, ChunkingOptionsError, QuestionType, DEFAULT_MAX_CHUNK_SIZE,
    DEFAULT_OVERLAP_SIZE,
};
