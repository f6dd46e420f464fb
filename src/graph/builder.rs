//! Similarity graph builder
//!
//! This module converts the per-sentence noun documents of a run into the
//! two square graphs the ranker consumes: a sentence-similarity graph
//! (TF-IDF dot products between sentences) and a word co-occurrence graph
//! (dot products between column-normalized term occurrence vectors).

use crate::errors::Result;
use crate::types::{SentenceRecord, VocabularyIndex};
use crate::vectorize::{CountVectorizer, TfidfVectorizer};
use nalgebra::DMatrix;

/// Builds sentence and word similarity graphs from sentence records.
///
/// Each build call fits its own vectorizer: the sentence graph and the word
/// graph never share fitted vocabulary state, and neither do concurrent
/// runs.
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraphBuilder;

impl SimilarityGraphBuilder {
    /// Create a new graph builder
    pub fn new() -> Self {
        Self
    }

    /// Build the sentence-similarity graph.
    ///
    /// Computes the TF-IDF matrix M over the noun documents and returns
    /// M · Mᵀ: entry (i, j) is the dot product of the TF-IDF vectors of
    /// sentences i and j. The result is symmetric and non-negative, with
    /// each diagonal entry the squared norm of that sentence's vector.
    /// A sentence with no qualifying nouns yields an all-zero row and
    /// column.
    pub fn build_sentence_graph(&self, records: &[SentenceRecord]) -> Result<DMatrix<f64>> {
        let documents: Vec<&str> = records.iter().map(|r| r.noun_document.as_str()).collect();
        let (matrix, _) = TfidfVectorizer::new().fit_transform(&documents)?;
        Ok(&matrix * matrix.transpose())
    }

    /// Build the word co-occurrence graph and its vocabulary mapping.
    ///
    /// Computes the term-count matrix C, L2-normalizes each term column
    /// along the sentence axis, and returns Cᵀ · C: entry (i, j) weighs how
    /// strongly terms i and j co-occur across sentences. Fails with
    /// `EmptyVocabulary` when no sentence contributed a qualifying noun.
    pub fn build_word_graph(
        &self,
        records: &[SentenceRecord],
    ) -> Result<(DMatrix<f64>, VocabularyIndex)> {
        let documents: Vec<&str> = records.iter().map(|r| r.noun_document.as_str()).collect();
        let (mut counts, vocab) = CountVectorizer::new().fit_transform(&documents)?;

        // Unit-length term occurrence vectors across sentences
        for col in 0..counts.ncols() {
            let norm = counts.column(col).iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for row in 0..counts.nrows() {
                    counts[(row, col)] /= norm;
                }
            }
        }

        let graph = counts.transpose() * &counts;
        Ok((graph, vocab))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SummarizerError;

    fn records(docs: &[&str]) -> Vec<SentenceRecord> {
        docs.iter()
            .enumerate()
            .map(|(i, d)| SentenceRecord::new(i, format!("sentence {}", i), *d))
            .collect()
    }

    #[test]
    fn test_sentence_graph_shape_and_symmetry() {
        let records = records(&[
            "machine learning field",
            "learning network model",
            "stock market price",
        ]);
        let graph = SimilarityGraphBuilder::new()
            .build_sentence_graph(&records)
            .unwrap();

        assert_eq!(graph.nrows(), 3);
        assert_eq!(graph.ncols(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert!((graph[(i, j)] - graph[(j, i)]).abs() < 1e-12);
                assert!(graph[(i, j)] >= 0.0);
            }
        }
    }

    #[test]
    fn test_sentence_graph_diagonal_is_squared_norm() {
        // TF-IDF rows are unit length, so non-empty sentences have
        // self-similarity 1
        let records = records(&["machine learning", "stock market"]);
        let graph = SimilarityGraphBuilder::new()
            .build_sentence_graph(&records)
            .unwrap();

        assert!((graph[(0, 0)] - 1.0).abs() < 1e-10);
        assert!((graph[(1, 1)] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_sentence_graph_overlap_scores_higher() {
        let records = records(&[
            "machine learning model",
            "machine learning network",
            "stock market price",
        ]);
        let graph = SimilarityGraphBuilder::new()
            .build_sentence_graph(&records)
            .unwrap();

        // Sentences 0 and 1 share vocabulary; 0 and 2 share none
        assert!(graph[(0, 1)] > graph[(0, 2)]);
        assert_eq!(graph[(0, 2)], 0.0);
    }

    #[test]
    fn test_sentence_graph_zero_noun_sentence_is_isolated() {
        let records = records(&["machine learning", "", "machine model"]);
        let graph = SimilarityGraphBuilder::new()
            .build_sentence_graph(&records)
            .unwrap();

        for j in 0..3 {
            assert_eq!(graph[(1, j)], 0.0);
            assert_eq!(graph[(j, 1)], 0.0);
        }
    }

    #[test]
    fn test_word_graph_shape_and_vocab() {
        let records = records(&["machine learning", "learning network"]);
        let (graph, vocab) = SimilarityGraphBuilder::new()
            .build_word_graph(&records)
            .unwrap();

        assert_eq!(vocab.len(), 3);
        assert_eq!(graph.nrows(), 3);
        assert_eq!(graph.ncols(), 3);

        // Columns were normalized to unit length, so every term has
        // self-similarity 1
        for i in 0..3 {
            assert!((graph[(i, i)] - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_word_graph_cooccurrence() {
        let records = records(&["machine learning", "stock market"]);
        let (graph, vocab) = SimilarityGraphBuilder::new()
            .build_word_graph(&records)
            .unwrap();

        let machine = vocab.index_of("machine").unwrap();
        let learning = vocab.index_of("learning").unwrap();
        let stock = vocab.index_of("stock").unwrap();

        // Terms in the same sentence co-occur; terms in different
        // sentences do not
        assert!(graph[(machine, learning)] > 0.0);
        assert_eq!(graph[(machine, stock)], 0.0);
    }

    #[test]
    fn test_word_graph_empty_vocabulary() {
        let records = records(&["", " "]);
        let err = SimilarityGraphBuilder::new()
            .build_word_graph(&records)
            .unwrap_err();
        assert!(matches!(err, SummarizerError::EmptyVocabulary { .. }));
    }

    #[test]
    fn test_builds_are_independent() {
        // The two graphs must not share fitted vocabulary state: building
        // one then the other yields the same results as building in the
        // opposite order.
        let records = records(&["machine learning", "learning network"]);
        let builder = SimilarityGraphBuilder::new();

        let sent_first = builder.build_sentence_graph(&records).unwrap();
        let (word_after, _) = builder.build_word_graph(&records).unwrap();

        let (word_first, _) = builder.build_word_graph(&records).unwrap();
        let sent_after = builder.build_sentence_graph(&records).unwrap();

        assert_eq!(sent_first, sent_after);
        assert_eq!(word_after, word_first);
    }
}
