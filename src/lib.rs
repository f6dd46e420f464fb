//! # textrank-summarizer
//!
//! Unsupervised extractive summarization and keyword extraction using the
//! TextRank algorithm, with centrality computed by an exact closed-form
//! solve instead of power iteration.
//!
//! ## How it works
//!
//! - Sentences are segmented and reduced to per-sentence noun documents
//! - Two similarity graphs are built: TF-IDF dot products between
//!   sentences, and co-occurrence weights between words
//! - Each graph is ranked by solving the damped PageRank fixed point as a
//!   linear system
//! - `summarize(n)` returns the top sentences in original order;
//!   `keywords(n)` returns the top words in rank order
//!
//! ## Example
//!
//! ```no_run
//! use textrank_summarizer::{SummarizerConfig, TextRank};
//!
//! let text = "Machine intelligence reshapes the modern economy. \
//!     Neural networks detect subtle patterns in market data.";
//! let textrank =
//!     TextRank::with_config(text, SummarizerConfig::default().with_language("en"))?;
//!
//! let summary = textrank.summarize(3);
//! let keywords = textrank.keywords(10);
//! # Ok::<(), textrank_summarizer::SummarizerError>(())
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod rank;
pub mod summarizer;
pub mod types;
pub mod vectorize;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{SentenceRecord, SummarizerConfig, VocabularyIndex};

// Re-export main functionality
pub use graph::SimilarityGraphBuilder;
pub use nlp::{
    HeuristicNounExtractor, NounExtractor, SentenceSegmenter, StopwordFilter, UnicodeSegmenter,
};
pub use rank::{CentralityRanker, RankVector};
pub use summarizer::TextRank;
pub use vectorize::{CountVectorizer, TfidfVectorizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
