//! PageRank: stationary distribution of a random walk with teleportation
//!
//! [`PageRank`] is the front-end: it validates parameters, builds the
//! transition model, and runs power iteration, returning a [`ScoreVector`]
//! mapped back to the caller's node identifiers.

pub mod power;
pub mod transition;

use std::hash::Hash;

use crate::error::{InvalidParameterError, RankError};
use crate::graph::Graph;
use crate::pagerank::power::PowerIteration;
use crate::pagerank::transition::TransitionModel;

/// Scores for each node, in canonical (first-appearance) order.
///
/// The values form a probability distribution: all non-negative, summing to 1
/// within floating-point tolerance. Use [`ScoreVector::iter`] for canonical
/// order or [`ScoreVector::ranked`] for descending-score order.
#[derive(Debug, Clone)]
pub struct ScoreVector<N> {
    nodes: Vec<N>,
    scores: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Final L1 distance between successive vectors.
    pub delta: f64,
    /// Whether the solver converged within the iteration budget.
    pub converged: bool,
}

impl<N> ScoreVector<N> {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The canonical node order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Raw scores in canonical node order.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Iterate over `(node, score)` pairs in canonical node order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, f64)> {
        self.nodes.iter().zip(self.scores.iter().copied())
    }

    /// All `(node, score)` pairs sorted by descending score.
    ///
    /// Ties keep canonical order (stable sort), so ranking is deterministic.
    pub fn ranked(&self) -> Vec<(&N, f64)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
        pairs
    }

    /// The top `n` nodes by score.
    pub fn top_n(&self, n: usize) -> Vec<(&N, f64)> {
        let mut pairs = self.ranked();
        pairs.truncate(n);
        pairs
    }
}

impl<N: PartialEq> ScoreVector<N> {
    /// The score of a specific node, if present.
    pub fn score(&self, node: &N) -> Option<f64> {
        self.nodes
            .iter()
            .position(|candidate| candidate == node)
            .map(|i| self.scores[i])
    }
}

/// PageRank solver parameters.
///
/// The defaults reproduce the canonical interface exactly:
/// `rsp = 0.15`, `epsilon = 0.00001`, `max_iterations = 1000`.
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Random-surfer (teleportation) probability, in (0, 1) exclusive.
    pub rsp: f64,
    /// Convergence threshold on the L1 distance between successive vectors.
    pub epsilon: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            rsp: 0.15,
            epsilon: 0.00001,
            max_iterations: 1000,
        }
    }
}

impl PageRank {
    /// Create a solver with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random-surfer probability.
    pub fn with_rsp(mut self, rsp: f64) -> Self {
        self.rsp = rsp;
        self
    }

    /// Set the convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Rank the nodes of a graph.
    ///
    /// All parameter and structure validation happens before the iterative
    /// loop; after that the solve cannot fail. Non-convergence within the
    /// iteration budget is reported via [`ScoreVector::converged`], not as an
    /// error.
    pub fn run<N>(&self, graph: &Graph<N>) -> Result<ScoreVector<N>, RankError>
    where
        N: Clone + Eq + Hash,
    {
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(InvalidParameterError {
                name: "epsilon",
                value: self.epsilon,
                domain: "positive finite real",
            }
            .into());
        }
        if self.max_iterations == 0 {
            return Err(InvalidParameterError {
                name: "max_iterations",
                value: 0.0,
                domain: "positive integer",
            }
            .into());
        }

        let model = TransitionModel::build(graph, self.rsp)?;
        let outcome = PowerIteration {
            epsilon: self.epsilon,
            max_iterations: self.max_iterations,
        }
        .run(&model);

        Ok(ScoreVector {
            nodes: graph.nodes().to_vec(),
            scores: outcome.scores,
            iterations: outcome.iterations,
            delta: outcome.delta,
            converged: outcome.converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord_graph() -> Graph<&'static str> {
        Graph::from_mapping(vec![
            ("a", vec![("b", 1.0), ("c", 1.0)]),
            ("b", vec![("c", 1.0)]),
            ("c", vec![("a", 1.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_reference_scores() {
        // Stationary distribution of the chord graph under rsp = 0.15,
        // derived from pi = 0.05 + 0.85 * pi P:
        //   pi_a = 0.387790, pi_b = 0.214811, pi_c = 0.397399
        let result = PageRank::new().run(&chord_graph()).unwrap();

        assert!(result.converged);
        assert!((result.score(&"a").unwrap() - 0.387790).abs() < 1e-3);
        assert!((result.score(&"b").unwrap() - 0.214811).abs() < 1e-3);
        assert!((result.score(&"c").unwrap() - 0.397399).abs() < 1e-3);
    }

    #[test]
    fn test_scores_form_a_distribution() {
        let result = PageRank::new().run(&chord_graph()).unwrap();

        let sum: f64 = result.scores().iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(result.scores().iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn test_fully_dangling_graph_is_uniform() {
        // Zero edges: every node teleports unconditionally, so the walk is
        // uniform regardless of rsp.
        let graph = Graph::from_sequence(&[
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();

        for rsp in [0.05, 0.15, 0.5, 0.95] {
            let result = PageRank::new().with_rsp(rsp).run(&graph).unwrap();
            assert!(result.converged);
            for &score in result.scores() {
                assert!((score - 1.0 / 3.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_single_node_scores_one() {
        let graph = Graph::from_mapping(vec![("only", Vec::<(&str, f64)>::new())]).unwrap();
        let result = PageRank::new().run(&graph).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.scores()[0], 1.0);
    }

    #[test]
    fn test_idempotent_bit_identical() {
        let graph = chord_graph();
        let first = PageRank::new().run(&graph).unwrap();
        let second = PageRank::new().run(&graph).unwrap();

        for (a, b) in first.scores().iter().zip(second.scores()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_ranked_is_descending_and_stable() {
        let result = PageRank::new().run(&chord_graph()).unwrap();
        let ranked = result.ranked();

        assert_eq!(ranked.len(), 3);
        for window in ranked.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
        assert_eq!(*ranked[0].0, "c");
        assert_eq!(*ranked[2].0, "b");
    }

    #[test]
    fn test_top_n() {
        let result = PageRank::new().run(&chord_graph()).unwrap();
        let top = result.top_n(2);

        assert_eq!(top.len(), 2);
        assert_eq!(*top[0].0, "c");
    }

    #[test]
    fn test_parameter_validation_before_solving() {
        let graph = chord_graph();

        let err = PageRank::new().with_epsilon(0.0).run(&graph).unwrap_err();
        assert!(matches!(err, RankError::InvalidParameter(_)));

        let err = PageRank::new()
            .with_max_iterations(0)
            .run(&graph)
            .unwrap_err();
        assert!(matches!(err, RankError::InvalidParameter(_)));

        let err = PageRank::new().with_rsp(1.0).run(&graph).unwrap_err();
        assert!(matches!(err, RankError::InvalidParameter(_)));
    }

    #[test]
    fn test_self_loops_rank() {
        let graph = Graph::from_mapping(vec![
            ("a", vec![("a", 1.0), ("b", 1.0)]),
            ("b", vec![("b", 1.0), ("a", 1.0)]),
        ])
        .unwrap();

        let result = PageRank::new().run(&graph).unwrap();
        let sum: f64 = result.scores().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sequence_and_mapping_forms_agree() {
        let mapping = PageRank::new().run(&chord_graph()).unwrap();
        let sequence = PageRank::new()
            .run(
                &Graph::from_sequence(&[
                    vec![0.0, 1.0, 1.0],
                    vec![0.0, 0.0, 1.0],
                    vec![1.0, 0.0, 0.0],
                ])
                .unwrap(),
            )
            .unwrap();

        for (a, b) in mapping.scores().iter().zip(sequence.scores()) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
