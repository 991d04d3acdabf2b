pub mod report;
pub mod stats;
pub mod trials;

/// Union-find over vertex ids, used to count connected components.
pub struct DSU {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DSU {
    /// `n` singleton sets
    pub fn new(n: usize) -> Self {
        DSU {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// representative of the set containing `x`, halving paths as it goes
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// merges the sets of `x` and `y`; returns false if they were already joined
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (mut a, mut b) = (self.find(x), self.find(y));
        if a == b {
            return false;
        }
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] += 1;
        }
        self.sets -= 1;
        true
    }

    pub fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// number of disjoint sets remaining
    pub fn num_sets(&self) -> usize {
        self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::DSU;

    #[test]
    fn merges_and_counts_sets() {
        let mut dsu = DSU::new(5);
        assert_eq!(dsu.num_sets(), 5);
        assert!(dsu.union(0, 1));
        assert!(dsu.union(3, 4));
        assert!(!dsu.union(1, 0));
        assert_eq!(dsu.num_sets(), 3);
        assert!(dsu.same(0, 1));
        assert!(!dsu.same(1, 3));
        assert!(dsu.union(1, 4));
        assert!(dsu.same(0, 3));
        assert_eq!(dsu.num_sets(), 2);
    }

    #[test]
    fn empty_dsu_has_no_sets() {
        assert_eq!(DSU::new(0).num_sets(), 0);
    }
}
