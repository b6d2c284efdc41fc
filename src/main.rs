//! u-coloring: graph coloring by genetic search [command line].
//!
//! `solve` loads a DIMACS `.col` file (or a JSON graph), runs the search and
//! writes the result; `generate` writes a random graph for experiments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use u_coloring::ga::{ColoringRunner, SolverConfig};
use u_coloring::graph::dimacs::parse_dimacs_file;
use u_coloring::graph::Graph;
use u_coloring::random::{create_rng, entropy_seed};
use u_coloring::Error;

#[derive(Parser)]
#[command(name = "u-coloring")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Color a graph and save the best coloring found
    Solve {
        /// Graph file, DIMACS `.col` unless `--json-graph` is given
        graph: PathBuf,
        /// Read the graph as JSON (`AdjecencyList` / `Colors`)
        #[arg(long)]
        json_graph: bool,
        /// Number of colors
        #[arg(short, long, default_value_t = 7)]
        colors: usize,
        /// Maximum number of generations
        #[arg(short, long, default_value_t = 100_000)]
        iterations: usize,
        /// Population size
        #[arg(short, long, default_value_t = 200)]
        population: usize,
        /// Generations between progress reports
        #[arg(long, default_value_t = 100)]
        progress: usize,
        /// Random seed, drawn from entropy when omitted
        #[arg(short, long)]
        seed: Option<u64>,
        /// Solution output
        #[arg(short, long, value_name = "FILE", default_value = "result.json")]
        output: PathBuf,
        /// Graphviz output of the colored graph
        #[arg(long, value_name = "FILE")]
        viz: Option<PathBuf>,
    },
    /// Generate a random graph and save it as JSON
    Generate {
        /// Number of nodes
        #[arg(short, long, default_value_t = 1000)]
        nodes: usize,
        /// Expected average degree
        #[arg(short, long, default_value_t = 3.0)]
        avg_degree: f64,
        /// Random seed, drawn from entropy when omitted
        #[arg(short, long)]
        seed: Option<u64>,
        /// Graph output
        #[arg(short, long, value_name = "FILE", default_value = "graph.json")]
        output: PathBuf,
        /// Graphviz output
        #[arg(long, value_name = "FILE")]
        viz: Option<PathBuf>,
    },
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Command::Solve {
            graph,
            json_graph,
            colors,
            iterations,
            population,
            progress,
            seed,
            output,
            viz,
        } => {
            let mut g = if json_graph {
                Graph::load_json(&graph)?
            } else {
                parse_dimacs_file(&graph)?
            };
            info!(path = %graph.display(), nodes = g.node_count(), "graph loaded");

            let mut config = SolverConfig::default()
                .with_num_colors(colors)
                .with_population_size(population)
                .with_max_iterations(iterations)
                .with_progress_interval(progress);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }

            let solution = ColoringRunner::try_run(&g, &config)?;
            solution.save_json(&output)?;

            if let Some(viz) = viz {
                g.apply_coloring(&solution.coloring);
                g.save_dot(&viz)?;
            }

            info!(
                score = solution.score,
                path = %output.display(),
                "best coloring saved"
            );
        }
        Command::Generate {
            nodes,
            avg_degree,
            seed,
            output,
            viz,
        } => {
            let seed = seed.unwrap_or_else(entropy_seed);
            let mut rng = create_rng(seed);
            let probability = if nodes == 0 {
                0.0
            } else {
                avg_degree / nodes as f64
            };
            let g = Graph::random(nodes, probability, &mut rng);
            g.save_json(&output)?;
            if let Some(viz) = viz {
                g.save_dot(&viz)?;
            }
            info!(
                nodes,
                edges = g.edge_count(),
                seed,
                path = %output.display(),
                "random graph saved"
            );
        }
    }
    Ok(())
}
