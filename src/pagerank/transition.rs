//! Row-stochastic transition model with teleportation
//!
//! Turns an arbitrary weighted graph into a well-formed ergodic Markov
//! transition matrix: rows are normalized over outgoing weight, dangling
//! nodes teleport unconditionally, and the random-surfer term is blended in.

use std::hash::Hash;

use crate::error::{InvalidParameterError, MalformedGraphError, RankError};
use crate::graph::adjacency::check_weight;
use crate::graph::Graph;

/// A dense square row-stochastic matrix over the canonical node order.
///
/// Row `i` holds the transition probabilities out of node `i`, including the
/// teleportation mass. Sparse storage is deliberately not used: the model is
/// built once per solve and discarded, and dense rows keep the power
/// iteration branch-free.
#[derive(Debug, Clone)]
pub struct TransitionModel {
    n: usize,
    rows: Vec<f64>,
}

impl TransitionModel {
    /// Build the transition model for a graph and a teleportation probability.
    ///
    /// For a node with positive outgoing weight, entry `(i, j)` is
    /// `(1 - rsp) * weight(i, j) / out_weight(i) + rsp / n`. A dangling node
    /// (out-degree 0) gets the uniform row `1/n`: its walk teleports
    /// unconditionally, which keeps the matrix row-stochastic and the chain
    /// irreducible.
    ///
    /// Raw weights must not be pre-normalized by the caller; normalization is
    /// owned here.
    ///
    /// # Errors
    ///
    /// [`InvalidParameterError`] if `rsp` is outside (0, 1) exclusive;
    /// [`MalformedGraphError`] if the graph is empty or an edge weight is
    /// negative.
    pub fn build<N>(graph: &Graph<N>, rsp: f64) -> Result<Self, RankError>
    where
        N: Clone + Eq + Hash,
    {
        if graph.is_empty() {
            return Err(MalformedGraphError::Empty.into());
        }
        if !(rsp > 0.0 && rsp < 1.0) {
            return Err(InvalidParameterError {
                name: "rsp",
                value: rsp,
                domain: "(0, 1) exclusive",
            }
            .into());
        }

        let n = graph.node_count();
        let uniform = 1.0 / n as f64;
        let teleport = rsp / n as f64;
        let mut rows = vec![0.0; n * n];

        for i in 0..n {
            let mut total = 0.0;
            for (j, weight) in graph.outgoing(i as u32) {
                check_weight(i, j as usize, weight)?;
                total += weight;
            }

            let row = &mut rows[i * n..(i + 1) * n];
            if total > 0.0 {
                row.fill(teleport);
                for (j, weight) in graph.outgoing(i as u32) {
                    row[j as usize] += (1.0 - rsp) * weight / total;
                }
            } else {
                // Dangling node: unconditional teleport.
                row.fill(uniform);
            }
        }

        Ok(Self { n, rows })
    }

    /// Number of nodes (the matrix is `n x n`).
    pub fn n(&self) -> usize {
        self.n
    }

    /// Transition probabilities out of node `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i * self.n..(i + 1) * self.n]
    }
}
