use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use log::info;
use rand_distr::num_traits::ToPrimitive;

use er_coloring::util::report::write_summaries_to_path;
use er_coloring::util::trials::{run_sweep, summarize_by_probability};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("color_sweep")
        .about("Greedily color many random graphs and summarize the colors used")
        .arg(
            Arg::new("nodes")
                .long("nodes")
                .short('n')
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("100")
                .help("Number of vertices per graph"),
        )
        .arg(
            Arg::new("probabilities")
                .long("probabilities")
                .short('p')
                .value_name("P,...")
                .value_parser(clap::value_parser!(f64))
                .value_delimiter(',')
                .num_args(1..)
                .default_values(["0.1", "0.3", "0.5"])
                .help("Comma-separated edge probabilities"),
        )
        .arg(
            Arg::new("seeds")
                .long("seeds")
                .value_name("COUNT")
                .value_parser(clap::value_parser!(u64))
                .default_value("20")
                .help("Number of seeds per probability"),
        )
        .arg(
            Arg::new("start_seed")
                .long("start-seed")
                .value_name("SEED")
                .value_parser(clap::value_parser!(u64))
                .default_value("0")
                .help("First seed; seeds are consecutive from here"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Write per-trial results as CSV"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Hide the progress bar"),
        )
        .get_matches();

    let num_nodes = *matches.get_one::<usize>("nodes").context("missing --nodes")?;
    let probabilities: Vec<f64> = matches
        .get_many::<f64>("probabilities")
        .context("missing --probabilities")?
        .copied()
        .collect();
    let num_seeds = *matches.get_one::<u64>("seeds").context("missing --seeds")?;
    let start_seed = *matches
        .get_one::<u64>("start_seed")
        .context("missing --start-seed")?;
    let seeds: Vec<u64> = (start_seed..start_seed.saturating_add(num_seeds)).collect();

    info!(
        "coloring {} graphs of {} nodes",
        probabilities.len() * seeds.len(),
        num_nodes
    );

    let start = Instant::now();
    let summaries = run_sweep(num_nodes, &probabilities, &seeds, !matches.get_flag("quiet"))
        .context("sweep failed")?;
    let elapsed = start.elapsed();
    println!(
        "ran {} trials in {:?} ({:.1} trials/s)",
        summaries.len(),
        elapsed,
        summaries.len().to_f64().unwrap_or(0.0) / elapsed.as_secs_f64()
    );

    for group in summarize_by_probability(&summaries) {
        println!(
            "p={}: {} trials, mean edges {:.1}, colors mean {:.2} min {} max {}",
            group.edge_probability,
            group.trials,
            group.mean_edges,
            group.mean_colors,
            group.min_colors,
            group.max_colors
        );
    }

    if let Some(output) = matches.get_one::<String>("output").map(PathBuf::from) {
        write_summaries_to_path(&output, &summaries)
            .with_context(|| format!("failed to write {}", output.display()))?;
        println!("wrote {} rows to {}", summaries.len(), output.display());
    }

    Ok(())
}
