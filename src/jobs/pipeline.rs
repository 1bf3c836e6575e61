//! Summary pipeline: extract, chunk, summarize each chunk, combine.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::chunkers::{count_words, Chunker, WordChunker};
use crate::error::{Result, SummarizerError};
use crate::extraction::DocumentExtractor;
use crate::summarizers::{SummaryParams, Summarizer};
use crate::types::{Chunk, ChunkFailure, FinishPolicy, SummarizerConfig, SummaryReport, TailPolicy};

/// Orchestrates one summarization request.
///
/// Chunks are summarized strictly in order, one call at a time, so chunk
/// summaries line up with the chunks they came from.
pub struct SummaryPipeline {
    summarizer: Arc<dyn Summarizer>,
    chunker: WordChunker,
    extractor: DocumentExtractor,
    config: SummarizerConfig,
}

impl SummaryPipeline {
    /// Create a new pipeline around a summarization model.
    pub fn new(summarizer: Arc<dyn Summarizer>, config: SummarizerConfig) -> Self {
        Self {
            summarizer,
            chunker: WordChunker::new(),
            extractor: DocumentExtractor::new(),
            config,
        }
    }

    /// Get the pipeline configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Get the underlying summarizer.
    pub fn summarizer(&self) -> &Arc<dyn Summarizer> {
        &self.summarizer
    }

    /// Extract text from an uploaded document and summarize it.
    pub async fn summarize_document(&self, file_name: &str, content: &[u8]) -> Result<SummaryReport> {
        let text = self.extractor.extract(file_name, content)?;
        if text.is_empty() {
            warn!(file = file_name, "No readable text found in the document");
        }

        let report = self.summarize_text(&text).await?;
        Ok(report.with_source_name(file_name))
    }

    /// Summarize plain text.
    ///
    /// Fails with [`SummarizerError::EmptyInput`] before any model call when
    /// the text is empty or whitespace. A chunk whose call fails is recorded
    /// in the report and left out of the summary.
    pub async fn summarize_text(&self, text: &str) -> Result<SummaryReport> {
        if text.trim().is_empty() {
            return Err(SummarizerError::EmptyInput);
        }

        let original_word_count = count_words(text);
        let chunks = self.chunker.chunk(text, self.config.chunk_words);
        let total = chunks.len();

        info!(
            words = original_word_count,
            chunks = total,
            chunker = self.chunker.name(),
            "Starting summarization"
        );

        let mut chunk_summaries = Vec::with_capacity(total);
        let mut failures = Vec::new();

        for chunk in &chunks {
            info!(chunk = chunk.chunk_index + 1, total, "Summarizing chunk");
            let is_last = chunk.chunk_index + 1 == total;

            match self.summarize_chunk(chunk, is_last).await {
                Ok(summary) => chunk_summaries.push(summary),
                Err(e) => {
                    warn!(
                        chunk = chunk.chunk_index + 1,
                        total,
                        error = %e,
                        "Failed to summarize chunk, continuing with others"
                    );
                    failures.push(ChunkFailure {
                        chunk_index: chunk.chunk_index,
                        error: e.to_string(),
                    });
                }
            }
        }

        if chunk_summaries.is_empty() {
            return Err(SummarizerError::AllChunksFailed(total));
        }

        let combined = chunk_summaries.join(" ");
        let (summary, reduced) = self.finish(combined).await;
        let final_word_count = count_words(&summary);

        info!(
            original_words = original_word_count,
            final_words = final_word_count,
            failed_chunks = failures.len(),
            reduced,
            "Summarization complete"
        );

        Ok(SummaryReport {
            id: Uuid::new_v4(),
            summary,
            original_word_count,
            final_word_count,
            chunk_count: total,
            failures,
            reduced,
            tail_policy: self.config.tail_policy,
            finish_policy: self.config.finish_policy,
            source_name: None,
            created_at: Utc::now(),
        })
    }

    /// Summarize one chunk according to the tail policy.
    async fn summarize_chunk(&self, chunk: &Chunk, is_last: bool) -> Result<String> {
        if is_last && self.config.tail_policy == TailPolicy::PreserveTail {
            let tokens = self.summarizer.token_count(&chunk.content);
            if tokens < self.config.preserve_tail_threshold {
                debug!(chunk = chunk.chunk_index + 1, tokens, "Last chunk is short, keeping it verbatim");
                return Ok(chunk.content.clone());
            }

            let params = SummaryParams {
                max_length: tokens,
                min_length: self.config.min_length.min(tokens),
                truncate: false,
            };
            return self.summarizer.summarize(&chunk.content, params).await;
        }

        self.summarizer.summarize(&chunk.content, self.fixed_params()).await
    }

    /// Turn the joined chunk summaries into the final summary.
    ///
    /// Returns the summary and whether the reduce pass produced it.
    async fn finish(&self, combined: String) -> (String, bool) {
        match self.config.finish_policy {
            FinishPolicy::Flat => (combined, false),
            FinishPolicy::Reduce => match self.summarizer.summarize(&combined, self.fixed_params()).await {
                Ok(summary) => (summary, true),
                Err(e) => {
                    warn!(error = %e, "Final reduce pass failed, returning joined chunk summaries");
                    (combined, false)
                }
            },
        }
    }

    fn fixed_params(&self) -> SummaryParams {
        SummaryParams::fixed(self.config.max_length, self.config.min_length)
    }
}
