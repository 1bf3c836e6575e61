//! Chunking strategies for splitting documents before summarization.

mod base;
mod word_chunker;

pub use base::{count_words, Chunker, TiktokenCounter, TokenCounter, WordCounter};
pub use word_chunker::WordChunker;
