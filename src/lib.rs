//! # walkrank
//!
//! PageRank over weighted directed graphs, plus TextRank keyword ranking on
//! word co-occurrence graphs.
//!
//! The pipeline is: a graph in mapping or sequence form is normalized into a
//! canonical, insertion-ordered [`Graph`]; a row-stochastic transition model
//! blends in the teleportation term and resolves dangling nodes; power
//! iteration converges the probability vector to the stationary distribution,
//! returned as a [`ScoreVector`]. The core holds no state across calls and is
//! safe to run concurrently with per-call inputs.
//!
//! # Examples
//!
//! Rank a small directed graph with the default parameters:
//!
//! ```
//! use walkrank::{solve, Graph};
//!
//! let graph = Graph::from_mapping(vec![
//!     ("a", vec![("b", 1.0), ("c", 1.0)]),
//!     ("b", vec![("c", 1.0)]),
//!     ("c", vec![("a", 1.0)]),
//! ])?;
//!
//! let scores = solve(&graph)?;
//! for (node, score) in scores.ranked() {
//!     println!("{node}: {score:.3}");
//! }
//! # Ok::<(), walkrank::RankError>(())
//! ```
//!
//! Rank keywords in a tagged document:
//!
//! ```
//! use walkrank::{TaggedWord, TextRank};
//!
//! let words = vec![
//!     TaggedWord::new("cat", "NN"),
//!     TaggedWord::new("mat", "NN"),
//!     TaggedWord::new("cat", "NN"),
//!     TaggedWord::new("dog", "NN"),
//!     TaggedWord::new("cat", "NN"),
//! ];
//!
//! // "cat" co-occurs with both neighbors and ranks strictly highest.
//! let scores = TextRank::new().run(&words)?;
//! assert_eq!(scores.ranked()[0].0, "cat");
//! # Ok::<(), walkrank::RankError>(())
//! ```

pub mod error;
pub mod graph;
pub mod pagerank;
pub mod textrank;
pub mod types;

pub use error::{EmptyDocumentError, InvalidParameterError, MalformedGraphError, RankError};
pub use graph::Graph;
pub use pagerank::{PageRank, ScoreVector};
pub use textrank::{CooccurrenceGraphBuilder, TextRank};
pub use types::{TaggedWord, TextRankConfig};

use std::hash::Hash;

/// Rank the nodes of a graph with the default parameters
/// (`rsp = 0.15`, `epsilon = 0.00001`, `max_iterations = 1000`).
///
/// Use [`PageRank`] directly to override any of them.
pub fn solve<N>(graph: &Graph<N>) -> Result<ScoreVector<N>, RankError>
where
    N: Clone + Eq + Hash,
{
    PageRank::new().run(graph)
}
