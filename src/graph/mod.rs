//! Graph construction and representation
//!
//! This module provides the canonical weighted-graph representation
//! consumed by the PageRank solver.

pub mod adjacency;

pub use adjacency::Graph;
