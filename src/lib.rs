//! Summarizer Service Library
//!
//! Extracts text from PDF, DOCX and plain-text documents, splits it into
//! word-bounded chunks, summarizes each chunk with an external
//! sequence-to-sequence model and combines the results into one summary.

pub mod api;
pub mod chunkers;
pub mod error;
pub mod extraction;
pub mod jobs;
pub mod summarizers;
pub mod types;

pub use chunkers::{count_words, Chunker, WordChunker};
pub use error::{Result, SummarizerError};
pub use extraction::{DocumentExtractor, DocumentFormat};
pub use jobs::{SummaryPipeline, SummaryStore};
pub use summarizers::{shared_summarizer, HttpSummarizer, SummaryParams, Summarizer};
pub use types::{Chunk, ChunkFailure, SummarizerConfig, SummaryReport};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::chunkers::*;
    pub use crate::error::*;
    pub use crate::jobs::*;
    pub use crate::summarizers::*;
    pub use crate::types::*;
}

/// Default chunk size in words
pub const DEFAULT_CHUNK_WORDS: usize = 500;

/// Default maximum summary length in model tokens
pub const DEFAULT_SUMMARY_MAX_LENGTH: usize = 130;

/// Default minimum summary length in model tokens
pub const DEFAULT_SUMMARY_MIN_LENGTH: usize = 30;

/// Final chunks shorter than this many tokens are kept verbatim
pub const DEFAULT_PRESERVE_TAIL_THRESHOLD: usize = 130;

/// Maximum accepted upload size (20MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// File name offered for summary downloads
pub const SUMMARY_FILE_NAME: &str = "summary.txt";
