//! Sliding-window co-occurrence graph construction
//!
//! Builds the undirected word graph that TextRank feeds into PageRank:
//! filtered words whose positions are within the window get an edge whose
//! weight counts their co-occurrences.

use rustc_hash::FxHashSet;

use crate::error::{EmptyDocumentError, InvalidParameterError, RankError};
use crate::graph::Graph;
use crate::types::{TaggedWord, TextRankConfig};

/// Builds a symmetric co-occurrence graph from tagged words.
///
/// Words are filtered by the part-of-speech allow-list; surviving words whose
/// positions in the filtered sequence are at most `window_size` apart get an
/// edge in both directions, incremented by 1 per co-occurrence. Duplicate
/// words map to a single node keyed by the literal word text, and self
/// co-occurrence (the same word twice within the window) creates no edge.
#[derive(Debug, Clone)]
pub struct CooccurrenceGraphBuilder {
    window_size: usize,
    relevant_tags: FxHashSet<String>,
}

impl Default for CooccurrenceGraphBuilder {
    fn default() -> Self {
        Self::from_config(&TextRankConfig::default())
    }
}

impl CooccurrenceGraphBuilder {
    /// Create a builder with an explicit window size and tag allow-list.
    pub fn new<I, S>(window_size: usize, relevant_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            window_size,
            relevant_tags: relevant_tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a builder from a [`TextRankConfig`].
    pub fn from_config(config: &TextRankConfig) -> Self {
        Self::new(config.window_size, config.relevant_tags.iter().cloned())
    }

    /// Build the co-occurrence graph for a tagged word sequence.
    ///
    /// # Errors
    ///
    /// [`InvalidParameterError`] if `window_size < 2`;
    /// [`EmptyDocumentError`] if no word matches the tag allow-list.
    pub fn build(&self, words: &[TaggedWord]) -> Result<Graph<String>, RankError> {
        if self.window_size < 2 {
            return Err(InvalidParameterError {
                name: "window_size",
                value: self.window_size as f64,
                domain: "integer >= 2",
            }
            .into());
        }

        let filtered: Vec<&str> = words
            .iter()
            .filter(|word| self.relevant_tags.contains(&word.tag))
            .map(|word| word.text.as_str())
            .collect();

        if filtered.is_empty() {
            return Err(EmptyDocumentError.into());
        }

        let mut graph = Graph::new();
        let ids: Vec<u32> = filtered
            .iter()
            .map(|&word| graph.get_or_insert(word.to_string()))
            .collect();

        for i in 0..ids.len() {
            let end = (i + self.window_size).min(ids.len() - 1);
            for j in (i + 1)..=end {
                if ids[i] == ids[j] {
                    continue; // Same word twice in the window: no self-loop.
                }
                graph.increment_edge(ids[i], ids[j], 1.0);
                graph.increment_edge(ids[j], ids[i], 1.0);
            }
        }

        Ok(graph)
    }
}
