use serde::{Deserialize, Serialize};

use crate::chunking::options::ChunkingOptions;
use crate::document::Document;

/// A bounded contiguous slice of a document's content, with positional
/// provenance.
///
/// Offsets are byte offsets into the source content and always fall on
/// `char` boundaries; `end_offset - start_offset == content.len()` holds for
/// every chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    pub document_name: String,
    pub media_type: String,
    /// 0-based, strictly increasing per document.
    pub index: usize,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Split a document into bounded, overlapping chunks.
///
/// Content no longer than `max_chunk_size` comes back as a single chunk
/// spanning the whole document. Anything larger is carved into windows of up
/// to `max_chunk_size` bytes; a window that does not reach the end of the
/// document is cut just past its last sentence terminator (`.`) or line
/// break when that point lies beyond 80% of `max_chunk_size`, and at the
/// window end otherwise. Consecutive chunks share up to `overlap_size` bytes.
///
/// Deterministic for fixed inputs and infallible for options that passed
/// construction-time validation.
pub fn chunk(document: &Document, options: &ChunkingOptions) -> Vec<Chunk> {
    let content = document.content.as_str();
    let max = options.max_chunk_size();

    if content.len() <= max {
        return vec![Chunk {
            content: content.to_string(),
            document_name: document.name.clone(),
            media_type: document.media_type.clone(),
            index: 0,
            start_offset: 0,
            end_offset: content.len(),
        }];
    }

    let overlap = options.overlap_size();
    let break_floor = (max * 4) / 5;

    let mut chunks = Vec::with_capacity(content.len() / (max - overlap) + 1);
    let mut cursor = 0usize;
    let mut index = 0usize;

    while cursor < content.len() {
        let end = if cursor + max >= content.len() {
            // Final window: emit the remainder as-is.
            content.len()
        } else {
            let window_end = prev_char_boundary(content, cursor + max);
            match break_point(&content[cursor..window_end], break_floor) {
                Some(cut) => cursor + cut,
                None => window_end,
            }
        };

        chunks.push(Chunk {
            content: content[cursor..end].to_string(),
            document_name: document.name.clone(),
            media_type: document.media_type.clone(),
            index,
            start_offset: cursor,
            end_offset: end,
        });
        index += 1;

        if end == content.len() {
            break;
        }

        // Step back for overlap, but never to or before the start of the
        // chunk just emitted: the cursor must strictly advance even when
        // overlap_size approaches max_chunk_size.
        let min_next = next_char_boundary(content, cursor + 1);
        let stepped = prev_char_boundary(content, end.saturating_sub(overlap));
        cursor = stepped.max(min_next);
    }

    chunks
}

/// Last acceptable cut inside the window: one past a `.` or line break, and
/// only when that lands beyond `floor` bytes into the window.
fn break_point(window: &str, floor: usize) -> Option<usize> {
    let pos = window.rfind(['.', '\n'])?;
    let cut = pos + 1;
    (cut > floor).then_some(cut)
}

fn prev_char_boundary(s: &str, mut i: usize) -> usize {
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char_boundary(s: &str, mut i: usize) -> usize {
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}
