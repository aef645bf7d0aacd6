//! neighbourhood: one depot, ten houses, a few days of deliveries.
//!
//! Generates (or loads) a distance matrix, then for each simulated day draws
//! random orders, batches them by robot capacity, and prints the route of
//! every delivery.
//!
//! ```text
//! cargo run -p neighbourhood -- --days 2 --capacity 3 --show-matrix
//! ```

mod printer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use dd_core::SimConfig;
use dd_output::{CsvWriter, SimOutputObserver};
use dd_sim::{DeliverySim, DistanceMatrix, generate_distance_matrix, load_matrix_csv};

use printer::RoutePrinter;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Nodes including the depot (ignored with --matrix)
    #[arg(short, long, default_value_t = 11)]
    nodes: usize,

    /// Probability of an extra random connection between two nodes
    #[arg(short, long, default_value_t = 0.1)]
    connectivity: f64,

    /// Master seed for the matrix and daily orders
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Days to simulate
    #[arg(long, default_value_t = 3)]
    days: u64,

    /// Packages one robot carries per run
    #[arg(long, default_value_t = 3)]
    capacity: u32,

    /// Robots sharing each day's orders
    #[arg(long, default_value_t = 1)]
    robots: u32,

    /// Load the distance matrix from a headerless CSV instead of generating one
    #[arg(short, long)]
    matrix: Option<PathBuf>,

    /// Also write delivery_legs.csv and day_summaries.csv to this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the distance matrix before simulating
    #[arg(long)]
    show_matrix: bool,

    /// Log at debug level (order draws, task batching)
    #[arg(short, long)]
    debug: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let loaded = match &cli.matrix {
        Some(path) => Some(
            load_matrix_csv(path)
                .with_context(|| format!("loading distance matrix from {}", path.display()))?,
        ),
        None => None,
    };

    let config = SimConfig {
        node_count:     loaded.as_ref().map_or(cli.nodes, DistanceMatrix::size),
        connectivity:   cli.connectivity,
        seed:           cli.seed,
        days:           cli.days,
        robot_capacity: cli.capacity,
        robot_count:    cli.robots,
    };
    config.validate().context("invalid configuration")?;

    let matrix = match loaded {
        Some(m) => m,
        None => generate_distance_matrix(config.node_count, config.connectivity, config.seed)?,
    };
    if cli.show_matrix {
        print!("{matrix}");
        println!();
    }

    let graph = matrix.to_graph().context("building neighbourhood graph")?;
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "graph ready");

    let mut sim = DeliverySim::new(config, graph)?;

    let csv = match &cli.output {
        Some(dir) => Some(SimOutputObserver::new(
            CsvWriter::new(dir).with_context(|| format!("creating output in {}", dir.display()))?,
        )),
        None => None,
    };
    let mut printer = RoutePrinter::new(csv);
    let summary = sim.run(&mut printer)?;

    if let Some(e) = printer.take_output_error() {
        error!(error = %e, "failed to write CSV output");
    }

    println!();
    println!(
        "{} days, {} tasks, {} packages, total distance {:.2}",
        summary.days, summary.tasks, summary.packages, summary.distance
    );
    if summary.unreachable > 0 {
        println!("{} stops could not be reached", summary.unreachable);
    }

    Ok(())
}
