//! Word-based chunker for fixed-size word chunking.

use super::base::Chunker;
use crate::types::Chunk;

/// Splits text into consecutive chunks of exactly `max_words` words.
///
/// Only the last chunk may be shorter. Words are whitespace-delimited and
/// never split; runs of whitespace collapse to a single space inside a chunk.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordChunker;

impl WordChunker {
    /// Create a new word chunker.
    pub fn new() -> Self {
        Self
    }
}

impl Chunker for WordChunker {
    fn name(&self) -> &'static str {
        "word"
    }

    fn description(&self) -> &'static str {
        "Splits text into fixed-size word chunks without overlap"
    }

    fn chunk(&self, text: &str, max_words: usize) -> Vec<Chunk> {
        let words: Vec<&str> = text.split_whitespace().collect();
        // zero would never make progress
        let size = max_words.max(1);

        words
            .chunks(size)
            .enumerate()
            .map(|(chunk_index, slice)| Chunk::from_words(chunk_index, slice))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contents(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.content.as_str()).collect()
    }

    #[test]
    fn test_empty_content() {
        let chunker = WordChunker::new();
        assert!(chunker.chunk("", 500).is_empty());
        assert!(chunker.chunk("  \n\t ", 500).is_empty());
    }

    #[test]
    fn test_five_words_by_two() {
        let chunks = WordChunker::new().chunk("a b c d e", 2);
        assert_eq!(contents(&chunks), vec!["a b", "c d", "e"]);
        assert_eq!(
            chunks.iter().map(|c| c.chunk_index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_small_content() {
        let chunks = WordChunker::new().chunk("Hello, world!", 500);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "Hello, world!");
        assert_eq!(chunks[0].word_count, 2);
    }

    #[test]
    fn test_exact_multiple_has_full_last_chunk() {
        let text = (0..12).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let chunks = WordChunker::new().chunk(&text, 4);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.word_count == 4));
    }

    #[test]
    fn test_chunk_count_and_sizes() {
        let chunker = WordChunker::new();
        for (n, t) in [(1, 1), (7, 3), (10, 10), (11, 10), (999, 500), (1000, 500), (1001, 400)] {
            let text = (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
            let chunks = chunker.chunk(&text, t);

            assert_eq!(chunks.len(), (n + t - 1) / t, "n={n} t={t}");
            for chunk in &chunks[..chunks.len() - 1] {
                assert_eq!(chunk.word_count, t);
            }
            let expected_last = if n % t == 0 { t } else { n % t };
            assert_eq!(chunks.last().unwrap().word_count, expected_last);
        }
    }

    #[test]
    fn test_words_reassemble_in_order() {
        let text = "  The quick\tbrown fox\n\njumps over\r\nthe lazy   dog. ";
        let chunks = WordChunker::new().chunk(text, 3);
        let rejoined: Vec<&str> = chunks.iter().flat_map(|c| c.words()).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_zero_threshold_is_treated_as_one() {
        let chunks = WordChunker::new().chunk("a b", 0);
        assert_eq!(contents(&chunks), vec!["a", "b"]);
    }
}
