//! TextRank orchestrator
//!
//! Wires segmentation and noun extraction through graph construction and
//! centrality ranking in one eager pass. Construction does all the work;
//! [`TextRank::summarize`] and [`TextRank::keywords`] are pure read
//! accessors over the precomputed rank vectors, so repeated calls return
//! identical results.
//!
//! There is no partial-failure recovery: empty input, an empty vocabulary,
//! or a singular ranking system fails the whole run.

use crate::errors::{Result, SummarizerError};
use crate::graph::SimilarityGraphBuilder;
use crate::nlp::{
    HeuristicNounExtractor, NounExtractor, SentenceSegmenter, StopwordFilter, UnicodeSegmenter,
};
use crate::rank::{CentralityRanker, RankVector};
use crate::types::{SentenceRecord, SummarizerConfig, VocabularyIndex};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled; compiles to nothing otherwise).
macro_rules! stage_span {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// A completed summarization run over one document.
#[derive(Debug, Clone)]
pub struct TextRank {
    records: Vec<SentenceRecord>,
    sentence_ranks: RankVector,
    word_ranks: RankVector,
    vocabulary: VocabularyIndex,
}

impl TextRank {
    /// Run the full pipeline over raw text with the default configuration.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, SummarizerConfig::default())
    }

    /// Run the full pipeline over raw text with the given configuration,
    /// using the built-in segmenter and noun extractor.
    pub fn with_config(text: &str, config: SummarizerConfig) -> Result<Self> {
        config.validate()?;

        let mut stopwords = StopwordFilter::new(&config.language);
        stopwords.add_stopwords(config.extra_stopwords.iter());
        let extractor =
            HeuristicNounExtractor::new(stopwords).with_min_length(config.min_noun_length);

        Self::with_collaborators(text, config, &UnicodeSegmenter::new(), &extractor)
    }

    /// Run the full pipeline with caller-supplied collaborators.
    ///
    /// This is the seam for plugging in a real sentence segmenter or
    /// morphological analyzer instead of the built-in heuristics.
    pub fn with_collaborators(
        text: &str,
        config: SummarizerConfig,
        segmenter: &dyn SentenceSegmenter,
        extractor: &dyn NounExtractor,
    ) -> Result<Self> {
        config.validate()?;

        let sentences = {
            stage_span!("segment");
            segmenter.segment(text)
        };

        Self::from_sentences(sentences, config, extractor)
    }

    /// Run the pipeline over an already-segmented sentence list.
    ///
    /// Applies the short-sentence merge rule, extracts nouns, builds both
    /// similarity graphs, and ranks them. Fails with `EmptyInput` when the
    /// sentence list is empty.
    pub fn from_sentences(
        sentences: Vec<String>,
        config: SummarizerConfig,
        extractor: &dyn NounExtractor,
    ) -> Result<Self> {
        config.validate()?;

        if sentences.is_empty() {
            return Err(SummarizerError::empty_input(
                "no sentences after segmentation",
            ));
        }

        let records = {
            stage_span!("records");
            let merged = merge_short_sentences(sentences, config.merge_threshold);
            build_records(merged, extractor)
        };

        let builder = SimilarityGraphBuilder::new();
        let ranker = CentralityRanker::new().with_damping(config.damping);

        let sentence_ranks = {
            stage_span!("sentence_graph");
            let graph = builder.build_sentence_graph(&records)?;
            ranker.rank(&graph)?
        };

        let (word_ranks, vocabulary) = {
            stage_span!("word_graph");
            let (graph, vocabulary) = builder.build_word_graph(&records)?;
            (ranker.rank(&graph)?, vocabulary)
        };

        Ok(Self {
            records,
            sentence_ranks,
            word_ranks,
            vocabulary,
        })
    }

    /// Select the top sentences of the document, in original order.
    ///
    /// Picks the `sentence_count` highest-ranked sentences (deterministic
    /// tie-break by index), then re-sorts the selection by position in the
    /// source text so the summary preserves narrative order. Counts beyond
    /// the sentence total clamp; zero returns an empty vec.
    pub fn summarize(&self, sentence_count: usize) -> Vec<String> {
        let mut indices: Vec<usize> = self
            .sentence_ranks
            .top_n(sentence_count)
            .into_iter()
            .map(|(idx, _)| idx)
            .collect();
        indices.sort_unstable();

        indices
            .into_iter()
            .map(|idx| self.records[idx].text.clone())
            .collect()
    }

    /// Select the top keywords of the document, in rank order.
    ///
    /// Counts beyond the vocabulary size clamp; zero returns an empty vec.
    pub fn keywords(&self, word_count: usize) -> Vec<String> {
        self.word_ranks
            .top_n(word_count)
            .into_iter()
            .filter_map(|(idx, _)| self.vocabulary.term(idx).map(|t| t.to_string()))
            .collect()
    }

    /// The sentence records of this run, index-aligned with the sentence
    /// rank vector.
    pub fn sentences(&self) -> &[SentenceRecord] {
        &self.records
    }

    /// The sentence centrality scores
    pub fn sentence_ranks(&self) -> &RankVector {
        &self.sentence_ranks
    }

    /// The word centrality scores
    pub fn word_ranks(&self) -> &RankVector {
        &self.word_ranks
    }

    /// The fitted word-graph vocabulary
    pub fn vocabulary(&self) -> &VocabularyIndex {
        &self.vocabulary
    }
}

/// Merge every sentence at or under the threshold into its predecessor,
/// leaving a whitespace placeholder in the slot so indices stay aligned
/// with the segmented sequence. The first sentence has no predecessor and
/// is kept regardless of length.
fn merge_short_sentences(mut sentences: Vec<String>, threshold: usize) -> Vec<String> {
    for i in 1..sentences.len() {
        if sentences[i].chars().count() <= threshold {
            let short = std::mem::replace(&mut sentences[i], " ".to_string());
            let target = &mut sentences[i - 1];
            target.push(' ');
            target.push_str(&short);
        }
    }
    sentences
}

/// Build index-aligned sentence records; placeholder slots contribute an
/// empty noun document.
fn build_records(sentences: Vec<String>, extractor: &dyn NounExtractor) -> Vec<SentenceRecord> {
    sentences
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let noun_document = if text.trim().is_empty() {
                String::new()
            } else {
                extractor.nouns(&text).join(" ")
            };
            SentenceRecord::new(index, text, noun_document)
        })
        .collect()
}
