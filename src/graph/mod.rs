//! Similarity graph construction

pub mod builder;

pub use builder::SimilarityGraphBuilder;
