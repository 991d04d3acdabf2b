//! greedy sequential (first-fit) vertex coloring

use log::debug;

use crate::coloring::{ColorT, Coloring, UNCOLORED};
use crate::error::{ColoringError, Result};
use crate::graph::{check_vertex_count, AdjacencyGraph, ErGraph, Graph, IndexT};

/// Colors the vertices of `graph` in index order, giving each vertex the
/// smallest color in `1..=n` that none of its neighbors holds.
///
/// Neighbors later in the order are still uncolored and contribute
/// [`UNCOLORED`], which is never a candidate. The result uses at most
/// `max_degree + 1` colors but is not guaranteed to be optimal.
///
/// Self-loops and out-of-range neighbors are reported as
/// [`ColoringError::InvalidEdge`]. If no candidate is free the run aborts with
/// [`ColoringError::InternalInconsistency`] instead of skipping the vertex.
pub fn greedy_sequential<G: Graph + ?Sized>(graph: &G) -> Result<Coloring> {
    let n = graph.n();
    check_vertex_count(n)?;

    let mut colors: Vec<ColorT> = vec![UNCOLORED; n];
    // taken[c] == v marks color c as held by a neighbor of v
    let mut taken: Vec<usize> = vec![usize::MAX; n + 1];

    for v in 0..n {
        for &u in graph.neighbors(v as IndexT) {
            if u as usize == v {
                return Err(ColoringError::InvalidEdge {
                    from: u,
                    to: u,
                    num_nodes: n,
                });
            }
            let neighbor_color = colors.get(u as usize).ok_or(ColoringError::InvalidEdge {
                from: v as IndexT,
                to: u,
                num_nodes: n,
            })?;
            taken[*neighbor_color as usize] = v;
        }

        let color = (1..=n as ColorT)
            .find(|&c| taken[c as usize] != v)
            .ok_or(ColoringError::InternalInconsistency {
                vertex: v as IndexT,
                num_nodes: n,
            })?;
        colors[v] = color;
    }

    let coloring = Coloring::from_colors(colors);
    debug!(
        "greedy coloring of {} nodes used {} colors",
        n,
        coloring.num_colors()
    );
    Ok(coloring)
}

/// Colors a graph given as a node count and an undirected edge list.
///
/// Edges may be given in either orientation; self-loops and endpoints
/// outside `[0, num_nodes)` are rejected before any vertex is colored.
pub fn color(num_nodes: usize, edges: &[(IndexT, IndexT)]) -> Result<Coloring> {
    let adjacency = AdjacencyGraph::from_edges(num_nodes, edges)?;
    greedy_sequential(&adjacency)
}

/// Colors a generated graph.
pub fn color_graph(graph: &ErGraph) -> Result<Coloring> {
    greedy_sequential(&graph.adjacency())
}
