use serde::{Deserialize, Serialize};

/// Lexical scoring configuration.
///
/// The lists are a hand-tuned product choice, not a structural requirement,
/// so they are injectable rather than hard-coded: deployments can re-tune
/// them without touching scorer code. [`ScoringVocabulary::default`] carries
/// the reference lists.
///
/// Trigger lists are matched against the question text to decide whether a
/// domain boost applies; term lists are what the boost counts inside chunk
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringVocabulary {
    /// Question words that never count as keywords.
    pub stop_words: Vec<String>,
    /// Shortest question word kept as a keyword.
    pub min_keyword_len: usize,
    pub financial_triggers: Vec<String>,
    pub financial_terms: Vec<String>,
    pub market_triggers: Vec<String>,
    pub market_terms: Vec<String>,
}

impl Default for ScoringVocabulary {
    fn default() -> Self {
        Self {
            stop_words: words(&[
                "what", "who", "where", "when", "why", "how", "the", "and", "or", "but",
            ]),
            min_keyword_len: 4,
            financial_triggers: words(&["revenue", "arr", "financial"]),
            financial_terms: words(&[
                "revenue",
                "arr",
                "financial",
                "million",
                "billion",
                "dollar",
                "usd",
                "aud",
                "eur",
                "growth",
                "profit",
            ]),
            market_triggers: words(&["market", "tam", "competitor"]),
            market_terms: words(&[
                "market",
                "tam",
                "sam",
                "som",
                "competitor",
                "customer",
                "segment",
                "growth",
            ]),
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}
