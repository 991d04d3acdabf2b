//! summary statistics of a graph's degree structure

use crate::graph::{Graph, IndexT};
use crate::util::DSU;

#[derive(Debug, Clone, PartialEq)]
pub struct DegreeStats {
    pub num_nodes: usize,
    /// undirected edges, each counted once
    pub num_edges: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub average_degree: f64,
    pub density: f64,
    pub num_components: usize,
}

impl DegreeStats {
    /// Assumes a symmetric adjacency view, as built by `AdjacencyGraph::from_edges`.
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> DegreeStats {
        let n = graph.n();
        let mut total_degree = 0;
        let mut min_degree = usize::MAX;
        let mut max_degree = 0;
        let mut components = DSU::new(n);

        for i in 0..n {
            let neighbors = graph.neighbors(i as IndexT);
            total_degree += neighbors.len();
            min_degree = min_degree.min(neighbors.len());
            max_degree = max_degree.max(neighbors.len());
            for &j in neighbors {
                components.union(i, j as usize);
            }
        }

        let num_edges = total_degree / 2;
        let (average_degree, density) = if n <= 1 {
            (0.0, 0.0)
        } else {
            (
                total_degree as f64 / n as f64,
                (2 * num_edges) as f64 / (n * (n - 1)) as f64,
            )
        };

        DegreeStats {
            num_nodes: n,
            num_edges,
            min_degree: if n == 0 { 0 } else { min_degree },
            max_degree,
            average_degree,
            density,
            num_components: components.num_sets(),
        }
    }
}
