//! random graph generation

pub mod erdos_renyi;
pub mod uniform;

pub use erdos_renyi::{generate, generate_with, GenerationConfig};
pub use uniform::{ChaChaDraws, ChaChaSource, UniformSource};
