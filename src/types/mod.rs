//! Core types for the summarizer service.

mod chunk;
mod config;
mod report;

pub use chunk::{Chunk, ChunkFailure};
pub use config::{FinishPolicy, SummarizerConfig, TailPolicy};
pub use report::{SummarizeTextRequest, SummaryReport};
