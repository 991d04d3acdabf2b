//! error type shared by generation, coloring and reporting

use thiserror::Error;

use crate::graph::IndexT;

pub type Result<T> = std::result::Result<T, ColoringError>;

#[derive(Error, Debug)]
pub enum ColoringError {
    /// Caller supplied a node count or probability outside the accepted range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An externally supplied edge is a self-loop or names a vertex outside [0, num_nodes)
    #[error("invalid edge ({from}, {to}) for a graph with {num_nodes} nodes")]
    InvalidEdge {
        from: IndexT,
        to: IndexT,
        num_nodes: usize,
    },

    /// A uniform source ended before producing the requested number of draws
    #[error("uniform source produced {drawn} of {expected} requested draws")]
    ExhaustedSource { expected: usize, drawn: usize },

    /// No color in [1, num_nodes] was free for `vertex`
    #[error("no free color in [1, {num_nodes}] for vertex {vertex}")]
    InternalInconsistency { vertex: IndexT, num_nodes: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ColoringError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        ColoringError::InvalidParameter(message.into())
    }
}
