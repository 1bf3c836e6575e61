//! Summarization model clients.

mod http_summarizer;
mod shared;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use http_summarizer::HttpSummarizer;
pub use shared::shared_summarizer;

/// Length bounds for one summarization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryParams {
    /// Maximum summary length in model tokens
    pub max_length: usize,
    /// Minimum summary length in model tokens
    pub min_length: usize,
    /// Whether input longer than the model's context window is truncated
    pub truncate: bool,
}

impl SummaryParams {
    /// Fixed bounds with truncation enabled.
    pub fn fixed(max_length: usize, min_length: usize) -> Self {
        Self {
            max_length,
            min_length,
            truncate: true,
        }
    }
}

/// An external text-to-text summarization model.
///
/// Implementations are opaque to the pipeline; any call may fail, and the
/// pipeline decides what a failure means for the document as a whole.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text` within the given length bounds.
    async fn summarize(&self, text: &str, params: SummaryParams) -> Result<String>;

    /// Length of `text` in the model's tokens.
    fn token_count(&self, text: &str) -> usize;

    /// Name of the underlying model.
    fn model_name(&self) -> &str {
        "unknown"
    }
}
