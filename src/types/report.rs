//! Summary report and request/response definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ChunkFailure, FinishPolicy, TailPolicy};

/// The outcome of summarizing one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Unique identifier, used for downloads
    pub id: Uuid,

    /// The final summary text
    pub summary: String,

    /// Words in the input document
    pub original_word_count: usize,

    /// Words in the final summary
    pub final_word_count: usize,

    /// Number of chunks the document was split into
    pub chunk_count: usize,

    /// Chunks whose summaries were omitted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ChunkFailure>,

    /// Whether the joined chunk summaries went through a second model pass
    pub reduced: bool,

    pub tail_policy: TailPolicy,

    pub finish_policy: FinishPolicy,

    /// Name of the uploaded file, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    /// When this summary was produced
    pub created_at: DateTime<Utc>,
}

impl SummaryReport {
    /// Record the uploaded file this summary came from.
    pub fn with_source_name(mut self, name: &str) -> Self {
        self.source_name = Some(name.to_string());
        self
    }

    /// Check whether any chunk was skipped.
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Request to summarize pasted text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeTextRequest {
    /// The text to summarize
    pub text: String,
}
