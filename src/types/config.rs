//! Configuration types for summarization.

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_CHUNK_WORDS, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PRESERVE_TAIL_THRESHOLD,
    DEFAULT_SUMMARY_MAX_LENGTH, DEFAULT_SUMMARY_MIN_LENGTH,
};

/// How the last chunk of a document is summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailPolicy {
    /// Every chunk, including the last, uses the fixed bounds with truncation.
    FixedBudget,
    /// A short last chunk is kept verbatim; a long one is summarized without
    /// forced compression.
    PreserveTail,
}

impl TailPolicy {
    /// Parse a policy name, accepting dashes or underscores.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "fixed_budget" | "fixed" => Some(Self::FixedBudget),
            "preserve_tail" | "preserve" => Some(Self::PreserveTail),
            _ => None,
        }
    }
}

impl std::fmt::Display for TailPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TailPolicy::FixedBudget => write!(f, "fixed_budget"),
            TailPolicy::PreserveTail => write!(f, "preserve_tail"),
        }
    }
}

/// How chunk summaries become the final summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishPolicy {
    /// The joined chunk summaries are the final summary.
    Flat,
    /// The joined chunk summaries are summarized once more.
    Reduce,
}

impl FinishPolicy {
    /// Parse a policy name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "flat" | "concat" => Some(Self::Flat),
            "reduce" => Some(Self::Reduce),
            _ => None,
        }
    }
}

impl std::fmt::Display for FinishPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinishPolicy::Flat => write!(f, "flat"),
            FinishPolicy::Reduce => write!(f, "reduce"),
        }
    }
}

/// Global summarizer service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Maximum words per chunk
    pub chunk_words: usize,

    /// Maximum summary length in model tokens
    pub max_length: usize,

    /// Minimum summary length in model tokens
    pub min_length: usize,

    /// Last chunks shorter than this many tokens pass through unsummarized
    pub preserve_tail_threshold: usize,

    pub tail_policy: TailPolicy,

    pub finish_policy: FinishPolicy,

    /// URL of the summarization inference endpoint
    pub model_endpoint: String,

    /// Model identifier reported in logs and `/config`
    pub model_name: String,

    /// Bearer token for the inference endpoint
    #[serde(skip_serializing)]
    pub model_api_token: Option<String>,

    /// Per-request timeout for the inference endpoint
    pub model_timeout_secs: u64,

    /// Largest accepted upload in bytes
    pub max_upload_bytes: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            chunk_words: DEFAULT_CHUNK_WORDS,
            max_length: DEFAULT_SUMMARY_MAX_LENGTH,
            min_length: DEFAULT_SUMMARY_MIN_LENGTH,
            preserve_tail_threshold: DEFAULT_PRESERVE_TAIL_THRESHOLD,
            tail_policy: TailPolicy::PreserveTail,
            finish_policy: FinishPolicy::Reduce,
            model_endpoint: "http://localhost:8080/summarize".to_string(),
            model_name: "facebook/bart-large-cnn".to_string(),
            model_api_token: None,
            model_timeout_secs: 300,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl SummarizerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            chunk_words: std::env::var("CHUNK_WORDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.chunk_words),
            max_length: std::env::var("SUMMARY_MAX_LENGTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_length),
            min_length: std::env::var("SUMMARY_MIN_LENGTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_length),
            preserve_tail_threshold: std::env::var("PRESERVE_TAIL_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.preserve_tail_threshold),
            tail_policy: std::env::var("TAIL_POLICY")
                .ok()
                .and_then(|s| TailPolicy::parse(&s))
                .unwrap_or(defaults.tail_policy),
            finish_policy: std::env::var("FINISH_POLICY")
                .ok()
                .and_then(|s| FinishPolicy::parse(&s))
                .unwrap_or(defaults.finish_policy),
            model_endpoint: std::env::var("MODEL_ENDPOINT").unwrap_or(defaults.model_endpoint),
            model_name: std::env::var("MODEL_NAME").unwrap_or(defaults.model_name),
            model_api_token: std::env::var("MODEL_API_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
            model_timeout_secs: std::env::var("MODEL_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.model_timeout_secs),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
        }
    }

    /// Create a config with the given chunk size.
    pub fn with_chunk_words(mut self, words: usize) -> Self {
        self.chunk_words = words;
        self
    }

    /// Set the tail policy.
    pub fn with_tail_policy(mut self, policy: TailPolicy) -> Self {
        self.tail_policy = policy;
        self
    }

    /// Set the finish policy.
    pub fn with_finish_policy(mut self, policy: FinishPolicy) -> Self {
        self.finish_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SummarizerConfig::default();
        assert_eq!(config.chunk_words, 500);
        assert_eq!(config.max_length, 130);
        assert_eq!(config.min_length, 30);
        assert_eq!(config.tail_policy, TailPolicy::PreserveTail);
        assert_eq!(config.finish_policy, FinishPolicy::Reduce);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(TailPolicy::parse("fixed-budget"), Some(TailPolicy::FixedBudget));
        assert_eq!(TailPolicy::parse("PRESERVE_TAIL"), Some(TailPolicy::PreserveTail));
        assert_eq!(TailPolicy::parse("other"), None);
        assert_eq!(FinishPolicy::parse("Flat"), Some(FinishPolicy::Flat));
        assert_eq!(FinishPolicy::parse("reduce"), Some(FinishPolicy::Reduce));
        assert_eq!(FinishPolicy::parse(""), None);
    }

    #[test]
    fn test_api_token_not_serialized() {
        let mut config = SummarizerConfig::default();
        config.model_api_token = Some("secret".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
