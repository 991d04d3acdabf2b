//! Erdős–Rényi G(n, p) graph generation

use log::debug;

use crate::error::{ColoringError, Result};
use crate::generation::{ChaChaSource, UniformSource};
use crate::graph::{check_vertex_count, ErGraph, IndexT};

/// Parameters of a single G(n, p) draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub num_nodes: usize,
    pub edge_probability: f64,
    pub seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            num_nodes: 10,
            edge_probability: 0.3,
            seed: 0,
        }
    }
}

impl GenerationConfig {
    pub fn new(num_nodes: usize, edge_probability: f64, seed: u64) -> Self {
        GenerationConfig {
            num_nodes,
            edge_probability,
            seed,
        }
    }

    /// Rejects probabilities outside [0, 1] (including NaN) and node counts
    /// whose ids or draw matrix cannot be represented.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(ColoringError::invalid_parameter(format!(
                "edge_probability = {} is outside [0, 1]",
                self.edge_probability
            )));
        }
        check_vertex_count(self.num_nodes)?;
        self.num_draws().map(|_| ())
    }

    /// number of uniform draws the generator consumes: one per cell of the n x n matrix
    pub fn num_draws(&self) -> Result<usize> {
        self.num_nodes
            .checked_mul(self.num_nodes)
            .ok_or_else(|| {
                ColoringError::invalid_parameter(format!(
                    "num_nodes = {} needs more than usize::MAX draws",
                    self.num_nodes
                ))
            })
    }
}

/// Generates a G(n, p) graph with the default ChaCha8 source.
pub fn generate(config: &GenerationConfig) -> Result<ErGraph> {
    generate_with(&ChaChaSource, config)
}

/// Generates a G(n, p) graph from the given uniform source.
///
/// The source is asked for `n * n` draws, read as an n x n matrix in
/// row-major order. Edge `(i, j)` exists iff `i < j` and the draw at cell
/// `(i, j)` is strictly below `edge_probability`. Diagonal and lower-triangle
/// draws are consumed and ignored, so the edge set for a fixed `(seed, n)`
/// does not depend on how the upper triangle is traversed.
pub fn generate_with<S: UniformSource>(source: &S, config: &GenerationConfig) -> Result<ErGraph> {
    config.validate()?;

    let n = config.num_nodes;
    let p = config.edge_probability;
    let expected = config.num_draws()?;

    let mut draws = source.uniform_draws(config.seed, expected);
    let mut drawn = 0;
    let mut edges: Vec<(IndexT, IndexT)> = Vec::new();

    for i in 0..n {
        for j in 0..n {
            let value = draws
                .next()
                .ok_or(ColoringError::ExhaustedSource { expected, drawn })?;
            drawn += 1;
            if j > i && value < p {
                edges.push((i as IndexT, j as IndexT));
            }
        }
    }

    debug!(
        "generated G({}, {}) with seed {}: {} edges from {} draws",
        n,
        p,
        config.seed,
        edges.len(),
        drawn
    );

    Ok(ErGraph::from_parts(n, edges))
}
