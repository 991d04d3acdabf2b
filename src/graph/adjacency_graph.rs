//! a vertex -> neighbor-list view derived from an undirected edge list

use log::{debug, warn};

use crate::error::{ColoringError, Result};
use crate::graph::IndexT;

use super::{Graph, MutableGraph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighborhoods: Vec<Vec<IndexT>>,
}

impl AdjacencyGraph {
    /// constructs a new AdjacencyGraph with the given number of nodes and no edges
    pub fn empty(n: usize) -> AdjacencyGraph {
        AdjacencyGraph {
            neighborhoods: vec![Vec::new(); n],
        }
    }

    pub fn new(neighborhoods: Vec<Vec<IndexT>>) -> AdjacencyGraph {
        AdjacencyGraph { neighborhoods }
    }

    /// Builds the symmetric adjacency view of an undirected edge list.
    ///
    /// Every edge (u, v) makes u a neighbor of v and v a neighbor of u.
    /// Self-loops and endpoints outside `[0, num_nodes)` are rejected with
    /// [`ColoringError::InvalidEdge`]. Repeated edges are collapsed, since
    /// they cannot change which colors a vertex sees.
    pub fn from_edges(num_nodes: usize, edges: &[(IndexT, IndexT)]) -> Result<AdjacencyGraph> {
        check_vertex_count(num_nodes)?;

        for &(from, to) in edges {
            if from == to || from as usize >= num_nodes || to as usize >= num_nodes {
                return Err(ColoringError::InvalidEdge {
                    from,
                    to,
                    num_nodes,
                });
            }
        }

        let mut graph = Self::from_valid_edges(num_nodes, edges);

        let before = graph.total_edges();
        for neighborhood in graph.neighborhoods.iter_mut() {
            neighborhood.sort_unstable();
            neighborhood.dedup();
        }
        let removed = before - graph.total_edges();
        if removed > 0 {
            warn!("edge list contained {} duplicate adjacency entries", removed);
        }

        Ok(graph)
    }

    /// builds the adjacency view of edges already known to be in range and loop-free
    pub(crate) fn from_valid_edges(num_nodes: usize, edges: &[(IndexT, IndexT)]) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::empty(num_nodes);
        for &(u, v) in edges {
            graph.add_neighbor(u, v);
            graph.add_neighbor(v, u);
        }
        debug!(
            "built adjacency for {} nodes from {} edges",
            num_nodes,
            edges.len()
        );
        graph
    }

    /// returns the number of nodes in the graph
    pub fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    /// returns the neighborhood of a node
    pub fn get_neighborhood(&self, i: IndexT) -> &[IndexT] {
        assert!(i < self.n() as IndexT);
        &self.neighborhoods[i as usize]
    }

    /// sum of degrees of all nodes, i.e. twice the number of undirected edges
    pub fn total_edges(&self) -> usize {
        self.neighborhoods.iter().map(|n| n.len()).sum()
    }

    /// maximum degree of the graph
    pub fn max_degree(&self) -> usize {
        self.neighborhoods
            .iter()
            .map(|n| n.len())
            .max()
            .unwrap_or(0)
    }
}

/// vertex ids must fit in `IndexT`
pub(crate) fn check_vertex_count(num_nodes: usize) -> Result<()> {
    if num_nodes > IndexT::MAX as usize {
        return Err(ColoringError::invalid_parameter(format!(
            "num_nodes = {} exceeds the supported maximum of {}",
            num_nodes,
            IndexT::MAX
        )));
    }
    Ok(())
}

impl Graph for AdjacencyGraph {
    fn n(&self) -> usize {
        self.n()
    }

    fn neighbors(&self, i: IndexT) -> &[IndexT] {
        self.get_neighborhood(i)
    }

    fn max_degree(&self) -> usize {
        self.max_degree()
    }
}

impl MutableGraph for AdjacencyGraph {
    fn add_neighbor(&mut self, from: IndexT, to: IndexT) {
        assert!(from < self.n() as IndexT && to < self.n() as IndexT);
        self.neighborhoods[from as usize].push(to);
    }
}
