use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use log::info;

use er_coloring::coloring::greedy_sequential;
use er_coloring::generation::{generate, GenerationConfig};
use er_coloring::util::stats::DegreeStats;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let defaults = GenerationConfig::default();
    let matches = Command::new("main")
        .about("Generate an Erdős–Rényi graph and color it greedily")
        .arg(
            Arg::new("nodes")
                .long("nodes")
                .short('n')
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("10")
                .help("Number of vertices"),
        )
        .arg(
            Arg::new("probability")
                .long("probability")
                .short('p')
                .value_name("P")
                .value_parser(clap::value_parser!(f64))
                .default_value("0.3")
                .help("Probability of each edge, in [0, 1]"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .value_parser(clap::value_parser!(u64))
                .default_value("0")
                .help("Random seed"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .action(ArgAction::SetTrue)
                .help("Also print degree statistics"),
        )
        .get_matches();

    let config = GenerationConfig::new(
        *matches.get_one::<usize>("nodes").unwrap_or(&defaults.num_nodes),
        *matches
            .get_one::<f64>("probability")
            .unwrap_or(&defaults.edge_probability),
        *matches.get_one::<u64>("seed").unwrap_or(&defaults.seed),
    );

    let mut start = Instant::now();
    let graph = generate(&config).context("failed to generate graph")?;
    info!(
        "generated {} nodes and {} edges in {:?}",
        graph.num_nodes(),
        graph.num_edges(),
        start.elapsed()
    );

    start = Instant::now();
    let adjacency = graph.adjacency();
    let coloring = greedy_sequential(&adjacency).context("failed to color graph")?;
    info!("colored graph in {:?}", start.elapsed());

    println!("node_features={:?}", graph.node_features());
    println!("edges={:?}", graph.edges());
    println!("colored_nodes={:?}", coloring.colors());
    println!("num_colors={}", coloring.num_colors());

    if matches.get_flag("stats") {
        let stats = DegreeStats::from_graph(&adjacency);
        println!("Average degree: {:.2}", stats.average_degree);
        println!("Minimum degree: {}", stats.min_degree);
        println!("Maximum degree: {}", stats.max_degree);
        println!("Density: {:.4}", stats.density);
        println!("Connected components: {}", stats.num_components);
    }

    Ok(())
}
