//! Error types for the summarizer service.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Errors raised while extracting or summarizing a document.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// The uploaded file's extension is not pdf, docx or txt.
    #[error("Unsupported file format: {0}. Please upload a PDF, DOCX, or TXT file.")]
    UnsupportedFormat(String),

    /// No text was available when summarization was requested.
    #[error("Please provide text or upload a valid file first.")]
    EmptyInput,

    /// The document could not be read.
    #[error("Failed to extract text: {0}")]
    Extraction(String),

    /// The summarization model returned an error or an unusable response.
    #[error("Summarization model error: {0}")]
    Model(String),

    /// Every chunk failed, so there is nothing to combine.
    #[error("All {0} chunks failed to summarize")]
    AllChunksFailed(usize),

    /// No stored summary with this id.
    #[error("Summary not found: {0}")]
    NotFound(uuid::Uuid),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
