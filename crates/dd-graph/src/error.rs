//! Graph-subsystem error type.

use thiserror::Error;

use dd_core::NodeId;

/// Errors produced by `dd-graph`.
///
/// An unreachable target is not an error; see [`ShortestPath::reachable`](crate::ShortestPath).
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("distance matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row:      usize,
        len:      usize,
        expected: usize,
    },

    #[error("negative distance {weight} on edge {from} -> {to}")]
    NegativeWeight { from: NodeId, to: NodeId, weight: f64 },

    #[error("non-finite distance on edge {from} -> {to}")]
    NonFiniteWeight { from: NodeId, to: NodeId },

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("the depot cannot receive orders")]
    DepotOrder,
}

pub type GraphResult<T> = Result<T, GraphError>;
