//! Summarization pipeline and result storage.

mod pipeline;
mod store;

pub use pipeline::SummaryPipeline;
pub use store::SummaryStore;
