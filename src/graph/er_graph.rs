//! the immutable output of the Erdős–Rényi generator

use crate::graph::{AdjacencyGraph, IndexT};

/// A generated undirected graph.
///
/// Edges are stored once each as `(i, j)` with `i < j`, in row-major order of
/// the draw matrix they came from. The graph cannot be modified after
/// generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ErGraph {
    num_nodes: usize,
    edges: Vec<(IndexT, IndexT)>,
    node_features: Vec<f32>,
}

impl ErGraph {
    pub(crate) fn from_parts(num_nodes: usize, edges: Vec<(IndexT, IndexT)>) -> ErGraph {
        debug_assert!(edges
            .iter()
            .all(|&(i, j)| i < j && (j as usize) < num_nodes));
        ErGraph {
            num_nodes,
            edges,
            node_features: vec![0.0; num_nodes],
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn edges(&self) -> &[(IndexT, IndexT)] {
        &self.edges
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// placeholder per-vertex features, always zero
    pub fn node_features(&self) -> &[f32] {
        &self.node_features
    }

    /// Graph density: |E| / (|V| * (|V| - 1) / 2)
    pub fn density(&self) -> f64 {
        if self.num_nodes <= 1 {
            return 0.0;
        }
        (2.0 * self.edges.len() as f64) / (self.num_nodes * (self.num_nodes - 1)) as f64
    }

    /// materializes the neighbor lists for this graph
    pub fn adjacency(&self) -> AdjacencyGraph {
        AdjacencyGraph::from_valid_edges(self.num_nodes, &self.edges)
    }
}
