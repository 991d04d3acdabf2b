//! CSV output for sweep results

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::util::trials::TrialSummary;

pub const HEADER: [&str; 6] = [
    "num_nodes",
    "edge_probability",
    "seed",
    "num_edges",
    "max_degree",
    "num_colors",
];

/// Writes one CSV row per trial, preceded by [`HEADER`].
pub fn write_summaries<W: Write>(writer: W, summaries: &[TrialSummary]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for summary in summaries {
        csv_writer.write_record(&[
            summary.num_nodes.to_string(),
            summary.edge_probability.to_string(),
            summary.seed.to_string(),
            summary.num_edges.to_string(),
            summary.max_degree.to_string(),
            summary.num_colors.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_summaries_to_path(path: &Path, summaries: &[TrialSummary]) -> Result<()> {
    let file = File::create(path)?;
    write_summaries(BufWriter::new(file), summaries)
}
