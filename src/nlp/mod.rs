//! Language collaborators: segmentation, noun extraction, stopwords
//!
//! The core pipeline only needs two things from a language stack: an
//! ordered sentence list and per-sentence noun lists. Both are trait seams
//! here so callers with a real morphological analyzer can plug their own;
//! the default implementations make the crate usable stand-alone.

pub mod nouns;
pub mod segmenter;
pub mod stopwords;

pub use nouns::{HeuristicNounExtractor, NounExtractor};
pub use segmenter::{SentenceSegmenter, UnicodeSegmenter};
pub use stopwords::StopwordFilter;
