//! a finished vertex coloring

use itertools::Itertools;
use rayon::prelude::*;

use crate::graph::IndexT;

pub type ColorT = u32;

/// placeholder held by a vertex before the colorer reaches it
pub const UNCOLORED: ColorT = 0;

/// Vertex -> color assignment; colors are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<ColorT>,
}

impl Coloring {
    pub(crate) fn from_colors(colors: Vec<ColorT>) -> Coloring {
        debug_assert!(colors.iter().all(|&c| c != UNCOLORED));
        Coloring { colors }
    }

    /// colors indexed by vertex id
    pub fn colors(&self) -> &[ColorT] {
        &self.colors
    }

    pub fn color_of(&self, v: IndexT) -> ColorT {
        assert!((v as usize) < self.colors.len());
        self.colors[v as usize]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// number of distinct colors used
    pub fn num_colors(&self) -> usize {
        self.colors.iter().unique().count()
    }

    /// largest color assigned, 0 for an empty coloring
    pub fn max_color(&self) -> ColorT {
        self.colors.iter().copied().max().unwrap_or(UNCOLORED)
    }

    /// Counts edges whose endpoints share a color.
    ///
    /// Panics if an endpoint is not a vertex of this coloring.
    pub fn conflicts(&self, edges: &[(IndexT, IndexT)]) -> usize {
        edges
            .par_iter()
            .filter(|&&(u, v)| self.color_of(u) == self.color_of(v))
            .count()
    }

    pub fn is_proper(&self, edges: &[(IndexT, IndexT)]) -> bool {
        self.conflicts(edges) == 0
    }

    pub fn into_colors(self) -> Vec<ColorT> {
        self.colors
    }
}
