use docprep_core::chunking::{chunk, Chunk, ChunkingOptions, QuestionType};
use docprep_core::document::Document;
use docprep_core::prepare::{
    DocumentPreparer, PreparationBranch, PreparationOutcome, PreparationResult,
};
use docprep_core::scoring::{Question, ScoringVocabulary};
use docprep_core::selection::ChunkSelector;

fn make_doc(name: &str, content: &str) -> Document {
    Document::new(name, "text/plain", content)
}

fn corpus() -> Vec<Document> {
    let body = format!(
        "{}Our ARR reached new highs. {}",
        "The quick brown fox jumps over the lazy dog. ".repeat(300),
        "Steady as she goes. ".repeat(40),
    );
    vec![
        make_doc("metrics.txt", &body),
        make_doc("notes.txt", &"An unrelated aside about gardening. ".repeat(100)),
    ]
}

#[test]
fn invariant_preparation_is_deterministic() {
    let docs = corpus();

    let first = DocumentPreparer::default().prepare(&docs, "What is ARR?");
    let second = DocumentPreparer::default().prepare(&docs, "What is ARR?");

    let json1 = serde_json::to_string(&first).unwrap();
    let json2 = serde_json::to_string(&second).unwrap();
    assert_eq!(json1, json2, "prepared output must be byte-identical across runs");
}

#[test]
fn invariant_chunk_select_pipeline_is_deterministic() {
    let doc = make_doc("big.txt", &"Revenue grew again this year. ".repeat(400));
    let opts = ChunkingOptions::default();
    let question = Question::parse(
        "revenue history",
        &ScoringVocabulary::default(),
        QuestionType::General,
    );
    let selector = ChunkSelector::default();

    let run = || {
        let chunks = chunk(&doc, &opts);
        selector.select(&chunks, &question, 3)
    };

    assert_eq!(run(), run());
}

#[test]
fn golden_chunk_serialization() {
    let c = Chunk {
        content: "Revenue grew.".to_string(),
        document_name: "report.pdf".to_string(),
        media_type: "application/pdf".to_string(),
        index: 2,
        start_offset: 100,
        end_offset: 113,
    };

    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(
        json,
        r#"{"content":"Revenue grew.","document_name":"report.pdf","media_type":"application/pdf","index":2,"start_offset":100,"end_offset":113}"#
    );

    let back: Chunk = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn golden_outcome_serialization() {
    let outcome = PreparationOutcome {
        question: "revenue".to_string(),
        total_size: 12000,
        threshold: 10000,
        branch: PreparationBranch::Condensed,
        documents_considered: 2,
        documents_condensed: 1,
        documents_dropped: 1,
    };

    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(
        json,
        r#"{"question":"revenue","total_size":12000,"threshold":10000,"branch":"condensed","documents_considered":2,"documents_condensed":1,"documents_dropped":1}"#
    );
}

#[test]
fn test_result_roundtrip() {
    let docs = corpus();
    let result = DocumentPreparer::default().prepare(&docs, "What is ARR?");

    let json = serde_json::to_string_pretty(&result).unwrap();
    let back: PreparationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn golden_branch_names() {
    assert_eq!(
        serde_json::to_string(&PreparationBranch::Passthrough).unwrap(),
        "\"passthrough\""
    );
    assert_eq!(
        serde_json::to_string(&PreparationBranch::ZeroRelevanceFallback).unwrap(),
        "\"zero_relevance_fallback\""
    );
}
