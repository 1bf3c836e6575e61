//! HTTP client for a hosted summarization model.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::{SummaryParams, Summarizer};
use crate::chunkers::{TiktokenCounter, TokenCounter};
use crate::error::{Result, SummarizerError};
use crate::types::SummarizerConfig;

/// Client for a summarization inference endpoint.
///
/// Speaks the Hugging Face inference request shape: the text goes in
/// `inputs` and the generation bounds in `parameters`.
pub struct HttpSummarizer {
    client: Client,
    endpoint: String,
    model_name: String,
    api_token: Option<String>,
    tokenizer: TiktokenCounter,
}

/// Request payload for one summarization call.
#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_length: usize,
    min_length: usize,
    do_sample: bool,
    truncation: bool,
}

/// Response shapes returned by inference servers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SummarizeResponse {
    Batch(Vec<SummaryText>),
    Single(SummaryText),
    Error { error: String },
}

#[derive(Debug, Deserialize)]
struct SummaryText {
    summary_text: String,
}

impl SummarizeResponse {
    fn into_text(self) -> Result<String> {
        match self {
            SummarizeResponse::Batch(items) => items
                .into_iter()
                .next()
                .map(|s| s.summary_text)
                .ok_or_else(|| SummarizerError::Model("Empty response from model".to_string())),
            SummarizeResponse::Single(s) => Ok(s.summary_text),
            SummarizeResponse::Error { error } => Err(SummarizerError::Model(error)),
        }
    }
}

impl HttpSummarizer {
    /// Create a new client from the service configuration.
    pub fn new(config: &SummarizerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.model_timeout_secs))
            .build()?;
        let tokenizer = TiktokenCounter::new()
            .map_err(|e| SummarizerError::Model(format!("Failed to load tokenizer: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.model_endpoint.clone(),
            model_name: config.model_name.clone(),
            api_token: config.model_api_token.clone(),
            tokenizer,
        })
    }

    /// Get the configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check if the inference endpoint answers.
    pub async fn health_check(&self) -> bool {
        match self.client.head(&self.endpoint).send().await {
            Ok(response) => !response.status().is_server_error(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, text: &str, params: SummaryParams) -> Result<String> {
        let request = SummarizeRequest {
            inputs: text,
            parameters: GenerationParameters {
                max_length: params.max_length,
                min_length: params.min_length,
                do_sample: false,
                truncation: params.truncate,
            },
        };

        debug!(
            model = %self.model_name,
            chars = text.len(),
            max_length = params.max_length,
            min_length = params.min_length,
            truncate = params.truncate,
            "Calling summarization model"
        );

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await?;

        if response.status().is_success() {
            let result: SummarizeResponse = response.json().await?;
            result.into_text()
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "Summarization model returned an error");
            Err(SummarizerError::Model(format!("Model endpoint returned {}: {}", status, body)))
        }
    }

    fn token_count(&self, text: &str) -> usize {
        self.tokenizer.count_tokens(text)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
