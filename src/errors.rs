//! Error types for textrank-summarizer
//!
//! This module defines the error types used throughout the library.
//! All errors are terminal for the current summarization run: none of the
//! conditions they describe are transient, so there is no internal retry.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Main error type for textrank-summarizer
#[derive(Error, Debug, Clone)]
pub enum SummarizerError {
    /// Input text produced zero sentences after segmentation
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// No qualifying terms survived filtering, so no feature matrix exists
    #[error("Empty vocabulary: {message}")]
    EmptyVocabulary { message: String },

    /// The centrality linear system has no unique solution
    #[error("Singular graph: {message}")]
    SingularGraph { message: String },

    /// A caller-supplied argument is outside its valid range
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl SummarizerError {
    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an empty vocabulary error
    pub fn empty_vocabulary(message: impl Into<String>) -> Self {
        Self::EmptyVocabulary {
            message: message.into(),
        }
    }

    /// Create a singular graph error
    pub fn singular_graph(message: impl Into<String>) -> Self {
        Self::SingularGraph {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this error indicates a singular ranking system
    pub fn is_singular_graph(&self) -> bool {
        matches!(self, Self::SingularGraph { .. })
    }
}
