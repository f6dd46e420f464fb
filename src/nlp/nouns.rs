//! Noun extraction
//!
//! The default extractor is heuristic: it splits a sentence into unicode
//! words and keeps the ones that look like nouns after stopword and length
//! filtering. It is intentionally simple — for accurate part-of-speech
//! tagging, implement [`NounExtractor`] over a real morphological analyzer.

use super::stopwords::StopwordFilter;
use unicode_segmentation::UnicodeSegmentation;

/// Extracts the qualifying nouns of a single sentence.
pub trait NounExtractor {
    /// Return the sentence's qualifying nouns, in order of appearance.
    fn nouns(&self, sentence: &str) -> Vec<String>;
}

/// A heuristic, suffix-based noun extractor
#[derive(Debug, Clone)]
pub struct HeuristicNounExtractor {
    /// Stopword filter applied to candidate words
    stopwords: StopwordFilter,
    /// Minimum character count for a qualifying noun
    min_length: usize,
}

impl Default for HeuristicNounExtractor {
    fn default() -> Self {
        Self::new(StopwordFilter::default())
    }
}

impl HeuristicNounExtractor {
    /// Create an extractor with the given stopword filter
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            min_length: 2,
        }
    }

    /// Set the minimum noun length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Heuristic noun test on a lowercased word.
    ///
    /// Rejects words carrying common verb/adverb morphology; everything
    /// else is assumed nominal, which matches how content words distribute
    /// in practice. Scripts without such suffix morphology (e.g., CJK) pass
    /// through and rely on the stopword filter alone.
    fn looks_like_noun(word: &str) -> bool {
        // Pure numbers are not nouns for ranking purposes
        if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return false;
        }

        // Common verb suffixes
        if word.ends_with("ing") || word.ends_with("ize") {
            return false;
        }

        // Common adverb suffix
        if word.ends_with("ly") {
            return false;
        }

        true
    }
}

impl NounExtractor for HeuristicNounExtractor {
    fn nouns(&self, sentence: &str) -> Vec<String> {
        sentence
            .unicode_words()
            .filter(|w| w.chars().any(|c| c.is_alphanumeric()))
            .map(|w| w.to_lowercase())
            .filter(|w| w.chars().count() >= self.min_length)
            .filter(|w| !self.stopwords.is_stopword(w))
            .filter(|w| Self::looks_like_noun(w))
            .collect()
    }
}
