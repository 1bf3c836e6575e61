//! Process-wide summarization client.
//!
//! The model client is built on first use and reused by every request until
//! the process exits. It is read-only after construction, so no lock is
//! needed around it.

use std::sync::{Arc, OnceLock};

use tracing::info;

use super::HttpSummarizer;
use crate::error::Result;
use crate::types::SummarizerConfig;

static SHARED_SUMMARIZER: OnceLock<Arc<HttpSummarizer>> = OnceLock::new();

/// Get the shared summarizer, creating it from `config` on first call.
///
/// Later calls return the same instance and ignore `config`.
pub fn shared_summarizer(config: &SummarizerConfig) -> Result<Arc<HttpSummarizer>> {
    if let Some(existing) = SHARED_SUMMARIZER.get() {
        return Ok(Arc::clone(existing));
    }

    let summarizer = Arc::new(HttpSummarizer::new(config)?);
    let shared = SHARED_SUMMARIZER.get_or_init(|| {
        info!(
            model = %config.model_name,
            endpoint = %config.model_endpoint,
            "Loaded summarization model client"
        );
        summarizer
    });

    Ok(Arc::clone(shared))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialized_once() {
        let first = shared_summarizer(&SummarizerConfig::default()).unwrap();

        let mut other = SummarizerConfig::default();
        other.model_endpoint = "http://elsewhere:9000/summarize".to_string();
        let second = shared_summarizer(&other).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.endpoint(), first.endpoint());
    }
}
