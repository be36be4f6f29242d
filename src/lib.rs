//! Deterministic document preparation engine with response caching.
//!
//! `docprep-core` shrinks oversized document corpora before they reach an LLM:
//! boundary-aware chunking, lexical relevance scoring, top-k chunk selection
//! per document, and reassembly into condensed documents with provenance
//! markers. A content-addressed, TTL-based response cache memoizes expensive
//! downstream answers keyed by the question and the exact document contents
//! used. All preparation passes are deterministic — identical inputs always
//! produce identical outputs, byte-for-byte.
//!
//! The crate has no network, file, or CLI surface of its own; it is a library
//! invoked by an embedding API layer that owns prompt construction and LLM
//! calls.

pub mod cache;
pub mod chunking;
pub mod document;
pub mod prepare;
pub mod scoring;
pub mod selection;
