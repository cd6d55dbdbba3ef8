//! Error types for graph construction and ranking.
//!
//! The taxonomy mirrors the three failure classes of the public API:
//! structurally invalid graph input, out-of-domain solver parameters, and
//! documents with no rankable words. Non-convergence is deliberately *not* an
//! error; the solver reports it via [`ScoreVector::converged`](crate::ScoreVector).

use thiserror::Error;

/// Structurally invalid graph input.
///
/// Node positions in the error refer to the canonical (first-appearance)
/// node order of the graph being built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedGraphError {
    /// The input describes zero nodes.
    #[error("graph has no nodes")]
    Empty,

    /// A sequence-form graph has rows of differing length.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An edge carries a negative weight.
    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    /// An edge carries a NaN or infinite weight.
    #[error("non-finite weight {weight} on edge {from} -> {to}")]
    NonFiniteWeight { from: usize, to: usize, weight: f64 },
}

/// A solver or builder parameter is outside its valid domain.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{name} = {value} is outside its valid domain ({domain})")]
pub struct InvalidParameterError {
    /// Parameter name as it appears in the public API.
    pub name: &'static str,
    /// The rejected value (integer parameters are widened to f64).
    pub value: f64,
    /// Human-readable description of the valid domain.
    pub domain: &'static str,
}

/// No words survived the part-of-speech tag filter, so there is nothing to rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no words matched the relevant-tag filter")]
pub struct EmptyDocumentError;

/// Any error the crate can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    #[error(transparent)]
    MalformedGraph(#[from] MalformedGraphError),

    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    #[error(transparent)]
    EmptyDocument(#[from] EmptyDocumentError),
}
