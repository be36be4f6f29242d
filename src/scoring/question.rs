use crate::chunking::QuestionType;

use super::vocabulary::ScoringVocabulary;

/// A fully parsed question.
///
/// Keyword extraction and domain detection happen once here, not per chunk:
/// - words are lowercased and trimmed of edge punctuation, then stop-words
///   and words shorter than the vocabulary minimum are dropped;
/// - a domain flag is set when the question text contains any of that
///   domain's trigger terms, or when the caller hinted the domain explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub raw: String,
    pub keywords: Vec<String>,
    pub financial: bool,
    pub market: bool,
}

impl Question {
    pub fn parse(
        raw: impl Into<String>,
        vocabulary: &ScoringVocabulary,
        hint: QuestionType,
    ) -> Self {
        let raw = raw.into();
        let lowered = raw.to_lowercase();

        let keywords = lowered
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| word.len() >= vocabulary.min_keyword_len)
            .filter(|word| !vocabulary.stop_words.iter().any(|stop| stop == word))
            .map(|word| word.to_string())
            .collect();

        let financial = hint == QuestionType::Financial
            || vocabulary
                .financial_triggers
                .iter()
                .any(|trigger| lowered.contains(trigger.as_str()));
        let market = hint == QuestionType::Market
            || vocabulary
                .market_triggers
                .iter()
                .any(|trigger| lowered.contains(trigger.as_str()));

        Self {
            raw,
            keywords,
            financial,
            market,
        }
    }
}
