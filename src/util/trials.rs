//! repeated generate-and-color runs over many seeds

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::coloring::greedy_sequential;
use crate::error::Result;
use crate::generation::{generate, GenerationConfig};

/// Outcome of coloring one generated graph.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSummary {
    pub num_nodes: usize,
    pub edge_probability: f64,
    pub seed: u64,
    pub num_edges: usize,
    pub max_degree: usize,
    pub num_colors: usize,
}

/// Aggregate over all seeds sharing one edge probability.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilitySummary {
    pub edge_probability: f64,
    pub trials: usize,
    pub mean_edges: f64,
    pub mean_colors: f64,
    pub min_colors: usize,
    pub max_colors: usize,
}

pub fn run_trial(config: &GenerationConfig) -> Result<TrialSummary> {
    let graph = generate(config)?;
    let adjacency = graph.adjacency();
    let coloring = greedy_sequential(&adjacency)?;
    debug_assert!(coloring.is_proper(graph.edges()));

    Ok(TrialSummary {
        num_nodes: config.num_nodes,
        edge_probability: config.edge_probability,
        seed: config.seed,
        num_edges: graph.num_edges(),
        max_degree: adjacency.max_degree(),
        num_colors: coloring.num_colors(),
    })
}

/// Runs one trial per (probability, seed) pair.
///
/// Trials are independent and run in parallel; each one generates and
/// colors its own graph sequentially. Results come back ordered by
/// probability, then seed, in the order given.
pub fn run_sweep(
    num_nodes: usize,
    probabilities: &[f64],
    seeds: &[u64],
    show_progress: bool,
) -> Result<Vec<TrialSummary>> {
    let configs: Vec<GenerationConfig> = probabilities
        .iter()
        .flat_map(|&p| {
            seeds
                .iter()
                .map(move |&seed| GenerationConfig::new(num_nodes, p, seed))
        })
        .collect();

    // reject bad parameters before any work is scheduled
    for config in &configs {
        config.validate()?;
    }

    let pb = if show_progress {
        ProgressBar::new(configs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {wide_bar:.green/gray} {pos}/{len} [{elapsed_precise}]({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.set_message("Coloring graphs");

    let summaries = configs
        .par_iter()
        .progress_with(pb.clone())
        .map(run_trial)
        .collect::<Result<Vec<TrialSummary>>>()?;

    pb.finish_and_clear();
    info!(
        "ran {} trials on {} nodes in {:?}",
        summaries.len(),
        num_nodes,
        pb.elapsed()
    );

    Ok(summaries)
}

/// Groups trials by edge probability, in order of first appearance.
pub fn summarize_by_probability(summaries: &[TrialSummary]) -> Vec<ProbabilitySummary> {
    let mut groups: Vec<(f64, Vec<&TrialSummary>)> = Vec::new();
    for summary in summaries {
        match groups
            .iter_mut()
            .find(|(p, _)| *p == summary.edge_probability)
        {
            Some((_, group)) => group.push(summary),
            None => groups.push((summary.edge_probability, vec![summary])),
        }
    }

    groups
        .into_iter()
        .map(|(edge_probability, group)| {
            let trials = group.len();
            ProbabilitySummary {
                edge_probability,
                trials,
                mean_edges: group.iter().map(|s| s.num_edges).sum::<usize>() as f64
                    / trials as f64,
                mean_colors: group.iter().map(|s| s.num_colors).sum::<usize>() as f64
                    / trials as f64,
                min_colors: group.iter().map(|s| s.num_colors).min().unwrap_or(0),
                max_colors: group.iter().map(|s| s.num_colors).max().unwrap_or(0),
            }
        })
        .collect()
}
