pub mod question;
pub mod vocabulary;

pub use question::Question;
pub use vocabulary::ScoringVocabulary;

use crate::chunking::Chunk;

const KEYWORD_WEIGHT: u32 = 2;
const DOMAIN_WEIGHT: u32 = 3;

pub trait ChunkScorer {
    /// Relevance of `chunk` to `question`. Non-negative, unbounded; only the
    /// ordering of scores from one scoring pass is meaningful.
    fn score(&self, chunk: &Chunk, question: &Question) -> u32;
}

/// Reference scorer: keyword occurrences weighted 2, domain-term occurrences
/// weighted 3 when the question triggers that domain. The two boosts are
/// additive and independent — a chunk can receive both.
#[derive(Debug, Clone, Default)]
pub struct KeywordScorer {
    vocabulary: ScoringVocabulary,
}

impl KeywordScorer {
    pub fn new(vocabulary: ScoringVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &ScoringVocabulary {
        &self.vocabulary
    }
}

impl ChunkScorer for KeywordScorer {
    fn score(&self, chunk: &Chunk, question: &Question) -> u32 {
        let content = chunk.content.to_lowercase();

        let mut score = 0u32;
        for keyword in &question.keywords {
            score += KEYWORD_WEIGHT * occurrences(&content, keyword);
        }
        if question.financial {
            for term in &self.vocabulary.financial_terms {
                score += DOMAIN_WEIGHT * occurrences(&content, term);
            }
        }
        if question.market {
            for term in &self.vocabulary.market_terms {
                score += DOMAIN_WEIGHT * occurrences(&content, term);
            }
        }
        score
    }
}

/// Non-overlapping occurrences of `needle` in `haystack`.
fn occurrences(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        count += 1;
        from += pos + needle.len();
    }
    count
}
