use serde::{Deserialize, Serialize};

use crate::chunking::Chunk;
use crate::scoring::{ChunkScorer, KeywordScorer, Question};

/// A chunk paired with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: u32,
}

pub struct ChunkSelector<S> {
    scorer: S,
}

impl Default for ChunkSelector<KeywordScorer> {
    fn default() -> Self {
        Self {
            scorer: KeywordScorer::default(),
        }
    }
}

impl<S> ChunkSelector<S>
where
    S: ChunkScorer,
{
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Top-`k` relevant chunks for one document, score descending, ties
    /// broken by ascending chunk index. Chunks that score zero are never
    /// returned; fewer than `k` relevant chunks means all of them.
    pub fn select(&self, chunks: &[Chunk], question: &Question, k: usize) -> Vec<ScoredChunk> {
        let mut scored: Vec<ScoredChunk> = chunks
            .iter()
            .map(|chunk| ScoredChunk {
                score: self.scorer.score(chunk, question),
                chunk: chunk.clone(),
            })
            .filter(|scored| scored.score > 0)
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.chunk.index.cmp(&b.chunk.index))
        });

        debug_assert!(scored.windows(2).all(|w| {
            w[0].score > w[1].score
                || (w[0].score == w[1].score && w[0].chunk.index <= w[1].chunk.index)
        }));

        scored.truncate(k);
        scored
    }
}
