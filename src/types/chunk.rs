//! Chunk type definitions.

use serde::{Deserialize, Serialize};

/// A word-bounded slice of a document.
///
/// Chunks partition the document's word sequence: reading every chunk's
/// words in `chunk_index` order yields the document's words exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Order of this chunk within its document (0-indexed)
    pub chunk_index: usize,

    /// The chunk's words joined by single spaces
    pub content: String,

    /// Number of words in this chunk
    pub word_count: usize,
}

impl Chunk {
    /// Create a new chunk from its words.
    pub fn from_words(chunk_index: usize, words: &[&str]) -> Self {
        Self {
            chunk_index,
            content: words.join(" "),
            word_count: words.len(),
        }
    }

    /// Iterate over the chunk's words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.content.split_whitespace()
    }

    /// Get the length of the chunk content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the chunk is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A chunk whose summarization call failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkFailure {
    /// Index of the failed chunk
    pub chunk_index: usize,

    /// Error reported by the summarizer
    pub error: String,
}
