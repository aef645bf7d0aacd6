use dd_core::DdError;
use dd_dispatch::DispatchError;
use dd_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] DdError),

    #[error("graph has {got} nodes but configuration expects {expected}")]
    NodeCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("distance matrix parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

pub type SimResult<T> = Result<T, SimError>;
