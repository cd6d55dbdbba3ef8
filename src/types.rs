//! Shared configuration and token types.

use serde::{Deserialize, Serialize};

/// A word paired with its part-of-speech tag, produced by an external
/// tokenizer/tagger in document order.
///
/// The crate performs no tokenization, sentence splitting, or tagging of its
/// own; this pair is the entire contract with the preprocessing pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    /// The literal word text. Words with identical text map to one node.
    pub text: String,
    /// The part-of-speech tag assigned by the external tagger.
    pub tag: String,
}

impl TaggedWord {
    /// Create a new tagged word.
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// Configuration for TextRank keyword ranking.
///
/// Every field has a serde default, so partial JSON configs deserialize with
/// the canonical values filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// Sliding co-occurrence window size (must be >= 2).
    pub window_size: usize,
    /// Part-of-speech tags whose words participate in the graph.
    pub relevant_tags: Vec<String>,
    /// Random-surfer (teleportation) probability.
    pub rsp: f64,
    /// Convergence threshold on the L1 distance between successive vectors.
    pub epsilon: f64,
    /// Maximum number of power iterations.
    pub max_iterations: usize,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            window_size: 2,
            relevant_tags: vec!["NN".to_string(), "NNP".to_string(), "ADJ".to_string()],
            rsp: 0.15,
            epsilon: 0.00001,
            max_iterations: 1000,
        }
    }
}
