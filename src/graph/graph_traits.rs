//! Traits for graph interfaces

pub type IndexT = u32;

pub trait Graph {
    /// number of vertices
    fn n(&self) -> usize;

    fn neighbors(&self, i: IndexT) -> &[IndexT];

    fn degree(&self, i: IndexT) -> usize {
        self.neighbors(i).len()
    }

    /// maximum degree over all vertices, 0 for an empty graph
    fn max_degree(&self) -> usize {
        (0..self.n())
            .map(|i| self.degree(i as IndexT))
            .max()
            .unwrap_or(0)
    }
}

pub trait MutableGraph {
    fn add_neighbor(&mut self, from: IndexT, to: IndexT);
}
