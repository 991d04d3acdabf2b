pub mod coloring;
pub mod error;
pub mod generation;
pub mod graph;
pub mod util;

pub use error::{ColoringError, Result};
