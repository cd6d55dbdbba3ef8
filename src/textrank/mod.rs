//! TextRank keyword ranking
//!
//! Applies PageRank to a sliding-window word co-occurrence graph. The
//! tokenizer and part-of-speech tagger are external collaborators; this
//! module consumes their `(word, tag)` output.

pub mod cooccurrence;

pub use cooccurrence::CooccurrenceGraphBuilder;

use crate::error::RankError;
use crate::pagerank::{PageRank, ScoreVector};
use crate::types::{TaggedWord, TextRankConfig};

/// TextRank keyword ranker.
///
/// Composes [`CooccurrenceGraphBuilder`] with the [`PageRank`] solver. The
/// returned [`ScoreVector`] is keyed by word; use [`ScoreVector::ranked`] for
/// descending-score keyword order.
#[derive(Debug, Clone, Default)]
pub struct TextRank {
    config: TextRankConfig,
}

impl TextRank {
    /// Create a ranker with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker with a custom configuration.
    pub fn with_config(config: TextRankConfig) -> Self {
        Self { config }
    }

    /// Rank the words of a tagged document.
    pub fn run(&self, words: &[TaggedWord]) -> Result<ScoreVector<String>, RankError> {
        let graph = CooccurrenceGraphBuilder::from_config(&self.config).build(words)?;
        PageRank::new()
            .with_rsp(self.config.rsp)
            .with_epsilon(self.config.epsilon)
            .with_max_iterations(self.config.max_iterations)
            .run(&graph)
    }
}
