//! Graph representations and associated functionality


mod adjacency_graph;
mod er_graph;
mod graph_traits;

pub(crate) use adjacency_graph::check_vertex_count;
pub use adjacency_graph::*;
pub use er_graph::*;
pub use graph_traits::*;
