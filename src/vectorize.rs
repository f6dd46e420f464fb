//! Text vectorization adapters
//!
//! This module turns a collection of noun documents (one space-joined string
//! per sentence) into dense feature matrices: raw term counts or TF-IDF
//! weights. Tokenization is whitespace splitting only; all linguistic
//! filtering has already happened upstream.
//!
//! Both vectorizers fit their vocabulary per call. There is no cross-call
//! state, so concurrent summarization runs never share a fitted vocabulary.

use crate::errors::{Result, SummarizerError};
use crate::types::VocabularyIndex;
use nalgebra::DMatrix;

/// Fit a vocabulary over whitespace-split tokens of the documents.
///
/// Terms are sorted lexicographically so column order is deterministic for
/// a given corpus regardless of hash iteration order.
fn fit_vocabulary(documents: &[&str]) -> Result<VocabularyIndex> {
    let mut terms: Vec<String> = documents
        .iter()
        .flat_map(|doc| doc.split_whitespace())
        .map(|t| t.to_string())
        .collect();
    terms.sort_unstable();
    terms.dedup();

    if terms.is_empty() {
        return Err(SummarizerError::empty_vocabulary(
            "no terms found in any document",
        ));
    }

    Ok(VocabularyIndex::from_terms(terms))
}

/// Fill a documents-by-terms count matrix for a fitted vocabulary.
fn count_matrix(documents: &[&str], vocab: &VocabularyIndex) -> DMatrix<f64> {
    let mut matrix = DMatrix::zeros(documents.len(), vocab.len());
    for (row, doc) in documents.iter().enumerate() {
        for token in doc.split_whitespace() {
            if let Some(col) = vocab.index_of(token) {
                matrix[(row, col)] += 1.0;
            }
        }
    }
    matrix
}

/// Vectorizer producing raw term-count feature matrices.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer;

impl CountVectorizer {
    /// Create a new count vectorizer
    pub fn new() -> Self {
        Self
    }

    /// Fit a vocabulary over the documents and produce the count matrix.
    ///
    /// The matrix has shape (documents x vocabulary); entry (i, j) is the
    /// number of occurrences of term j in document i.
    pub fn fit_transform(&self, documents: &[&str]) -> Result<(DMatrix<f64>, VocabularyIndex)> {
        if documents.is_empty() {
            return Err(SummarizerError::empty_input("no documents to vectorize"));
        }

        let vocab = fit_vocabulary(documents)?;
        let matrix = count_matrix(documents, &vocab);
        Ok((matrix, vocab))
    }
}

/// Vectorizer producing TF-IDF feature matrices.
///
/// Uses smooth inverse document frequency, `ln((1 + n) / (1 + df)) + 1`,
/// and L2-normalizes each document row, matching the defaults of the
/// vectorizer library this crate's numeric contract was taken from.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer;

impl TfidfVectorizer {
    /// Create a new TF-IDF vectorizer
    pub fn new() -> Self {
        Self
    }

    /// Fit a vocabulary over the documents and produce the TF-IDF matrix.
    pub fn fit_transform(&self, documents: &[&str]) -> Result<(DMatrix<f64>, VocabularyIndex)> {
        if documents.is_empty() {
            return Err(SummarizerError::empty_input("no documents to vectorize"));
        }

        let vocab = fit_vocabulary(documents)?;
        let mut matrix = count_matrix(documents, &vocab);
        let n_docs = documents.len() as f64;

        // Smooth idf weighting per term column
        for col in 0..vocab.len() {
            let df = (0..documents.len())
                .filter(|&row| matrix[(row, col)] > 0.0)
                .count() as f64;
            let idf = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
            for row in 0..documents.len() {
                matrix[(row, col)] *= idf;
            }
        }

        // L2-normalize each document row; all-zero rows stay zero
        for row in 0..documents.len() {
            let norm = matrix.row(row).iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for col in 0..vocab.len() {
                    matrix[(row, col)] /= norm;
                }
            }
        }

        Ok((matrix, vocab))
    }
}
