//! Base trait for all chunkers, plus word and token counting.

use anyhow::Result;

use crate::types::Chunk;

/// The core trait that all chunkers must implement.
///
/// A chunker splits document text into ordered chunks small enough for the
/// summarization model's context window.
pub trait Chunker: Send + Sync {
    /// Get the name of this chunker.
    fn name(&self) -> &'static str;

    /// Chunk the given text so that no chunk exceeds `max_words` words.
    fn chunk(&self, text: &str, max_words: usize) -> Vec<Chunk>;

    /// Get the description of this chunker.
    fn description(&self) -> &'static str {
        "A text chunker"
    }
}

/// Count whitespace-delimited words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Token counter trait for counting tokens in text.
pub trait TokenCounter: Send + Sync {
    /// Count the number of tokens in the given text.
    fn count_tokens(&self, text: &str) -> usize;
}

/// Default token counter using tiktoken (cl100k_base encoding).
pub struct TiktokenCounter {
    bpe: tiktoken_rs::CoreBPE,
}

impl TiktokenCounter {
    /// Create a new token counter with the cl100k_base encoding.
    pub fn new() -> Result<Self> {
        Self::with_encoding("cl100k_base")
    }

    /// Create a token counter with a specific encoding.
    pub fn with_encoding(encoding_name: &str) -> Result<Self> {
        let bpe = match encoding_name {
            "p50k_base" => tiktoken_rs::p50k_base()?,
            "r50k_base" => tiktoken_rs::r50k_base()?,
            _ => tiktoken_rs::cl100k_base()?,
        };
        Ok(Self { bpe })
    }
}

impl TokenCounter for TiktokenCounter {
    fn count_tokens(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

/// Fallback counter that treats every word as one token.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordCounter;

impl TokenCounter for WordCounter {
    fn count_tokens(&self, text: &str) -> usize {
        count_words(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_whitespace_only() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words(" \n\t "), 0);
    }

    #[test]
    fn test_count_words_mixed_whitespace() {
        assert_eq!(count_words("one  two\tthree\nfour\r\nfive"), 5);
        // punctuation is not a separator
        assert_eq!(count_words("well-known, e.g. this."), 3);
    }

    #[test]
    fn test_tiktoken_counter() {
        let counter = TiktokenCounter::new().unwrap();
        assert_eq!(counter.count_tokens(""), 0);
        let short = counter.count_tokens("Hello");
        let long = counter.count_tokens(&"Hello world. ".repeat(20));
        assert!(short >= 1);
        assert!(long > short);
    }

    #[test]
    fn test_word_counter() {
        assert_eq!(WordCounter.count_tokens("a b  c"), 3);
    }
}
