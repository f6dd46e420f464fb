//! Core types for textrank-summarizer
//!
//! This module defines the fundamental data structures shared across the
//! library: the run configuration, the per-sentence record that keeps
//! sentence text and noun content index-aligned, and the fitted vocabulary
//! mapping.

use crate::errors::{Result, SummarizerError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence Record
// ============================================================================

/// A sentence of the input together with its derived noun content.
///
/// Sentence text, noun document, and rank index are aligned by carrying them
/// in one record instead of three parallel arrays: the record's `index` is
/// the node index in the sentence similarity graph, always.
///
/// A sentence that was merged into its predecessor (because it fell under
/// the merge threshold) keeps its slot as a placeholder record with an empty
/// noun document, so the record count equals the segmented sentence count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Position of the sentence in the source text (0-based)
    pub index: usize,
    /// The sentence text (placeholder whitespace if merged away)
    pub text: String,
    /// Space-joined qualifying nouns of this sentence (may be empty)
    pub noun_document: String,
}

impl SentenceRecord {
    /// Create a new sentence record
    pub fn new(index: usize, text: impl Into<String>, noun_document: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            noun_document: noun_document.into(),
        }
    }

    /// Check whether this sentence contributed any qualifying nouns
    pub fn has_nouns(&self) -> bool {
        !self.noun_document.is_empty()
    }

    /// Check whether this slot is a merged-away placeholder
    pub fn is_placeholder(&self) -> bool {
        self.text.trim().is_empty()
    }
}

// ============================================================================
// Vocabulary Index
// ============================================================================

/// Bidirectional mapping between vocabulary terms and matrix column indices.
///
/// Fitted once per vectorizer call; column order is the lexicographic order
/// of the terms so the same corpus always yields the same matrix layout.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    /// Maps terms to their column indices
    term_to_index: FxHashMap<String, usize>,
    /// Maps column indices back to terms
    index_to_term: Vec<String>,
}

impl VocabularyIndex {
    /// Build an index from a sorted, deduplicated term list
    pub fn from_terms(terms: Vec<String>) -> Self {
        let term_to_index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self {
            term_to_index,
            index_to_term: terms,
        }
    }

    /// Get the column index for a term
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.term_to_index.get(term).copied()
    }

    /// Get the term at a column index
    pub fn term(&self, index: usize) -> Option<&str> {
        self.index_to_term.get(index).map(|s| s.as_str())
    }

    /// Iterate over terms in column order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.index_to_term.iter().map(|s| s.as_str())
    }

    /// Get the vocabulary size
    pub fn len(&self) -> usize {
        self.index_to_term.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.index_to_term.is_empty()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a summarization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Damping factor for the centrality solve (typically 0.85)
    pub damping: f64,
    /// Sentences at or under this character count are merged into their
    /// predecessor during segmentation
    pub merge_threshold: usize,
    /// Minimum character count for a noun to qualify for the graphs
    pub min_noun_length: usize,
    /// Language code for the stopword list (e.g., "ko", "en", "de")
    pub language: String,
    /// Additional stopwords extending the built-in list (e.g., domain noise
    /// like news-agency names)
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            merge_threshold: 10,
            min_noun_length: 2,
            language: "ko".to_string(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SummarizerError::invalid_argument(format!(
                "damping must be strictly between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.min_noun_length == 0 {
            return Err(SummarizerError::invalid_argument(
                "min_noun_length must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set short-sentence merge threshold
    pub fn with_merge_threshold(mut self, merge_threshold: usize) -> Self {
        self.merge_threshold = merge_threshold;
        self
    }

    /// Builder method: set minimum noun length
    pub fn with_min_noun_length(mut self, min_noun_length: usize) -> Self {
        self.min_noun_length = min_noun_length;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: set additional stopwords
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords = words.into_iter().map(Into::into).collect();
        self
    }
}
