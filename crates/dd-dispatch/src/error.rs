use dd_core::{NodeId, RobotId};
use dd_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("robot {0} has zero carrying capacity")]
    ZeroCapacity(RobotId),

    #[error("order of {quantity} at node {node} exceeds robot {robot} capacity {capacity}")]
    OrderExceedsCapacity {
        robot:    RobotId,
        node:     NodeId,
        quantity: u32,
        capacity: u32,
    },

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
