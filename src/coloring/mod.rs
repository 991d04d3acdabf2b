//! vertex coloring

mod assignment;
pub mod greedy;

#[cfg(test)]
mod tests;

pub use assignment::{ColorT, Coloring, UNCOLORED};
pub use greedy::{color, color_graph, greedy_sequential};
