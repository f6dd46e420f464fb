//! Sentence segmentation
//!
//! The default segmenter walks UAX #29 sentence boundaries. Callers with a
//! language-specific analyzer (e.g., a Korean morphological segmenter)
//! implement [`SentenceSegmenter`] themselves and hand the orchestrator
//! their own sentence lists.

use unicode_segmentation::UnicodeSegmentation;

/// Splits raw text into an ordered sequence of sentences.
pub trait SentenceSegmenter {
    /// Segment text into sentences, in order of appearance.
    ///
    /// Implementations return trimmed, non-empty sentences; merging of
    /// too-short sentences is the orchestrator's job, not the segmenter's.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// A Unicode-aware sentence segmenter following UAX #29
#[derive(Debug, Clone, Default)]
pub struct UnicodeSegmenter;

impl UnicodeSegmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSegmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences: Vec<String> = text
            .split_sentence_bounds()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        // If no boundaries were found, treat the entire text as one sentence
        if sentences.is_empty() && !text.trim().is_empty() {
            sentences.push(text.trim().to_string());
        }

        sentences
    }
}
