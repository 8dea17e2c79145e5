//! `rgg` - generates a random graph with an exact number of edges and persists it as JSON.

use std::{
    path::PathBuf,
    process::ExitCode,
    time::{Instant, SystemTime, UNIX_EPOCH},
};

use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::info;
use trigraph::{
    debug_time, error::Result, gens::*, io::*, logging, prelude::*, repr::digest::GraphDigest,
};

#[derive(Debug, Parser)]
#[command(
    name = "rgg",
    version,
    about = "Generate a random undirected graph with an exact number of edges"
)]
struct Cli {
    /// Number of vertices (at least 2)
    vertices: NumNodes,

    /// Number of edges, between `vertices - 1` and `vertices * (vertices - 1) / 2`
    edges: NumEdges,

    /// File the graph is written to
    #[arg(short, long, default_value = "graph.json")]
    output: PathBuf,

    /// Seed of the random generator; taken from the system clock if absent
    #[arg(long, env = "TRIGRAPH_SEED")]
    seed: Option<u64>,

    /// Give up after this many rejected random draws
    #[arg(long, env = "TRIGRAPH_MAX_RETRIES")]
    max_retries: Option<u64>,

    /// Print the lower-triangular adjacency matrix
    #[arg(long)]
    print_matrix: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log level or filter directives, e.g. `info` or `trigraph=trace`
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn run(cli: &Cli) -> Result<()> {
    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, "seeding random generator");
    let mut rng = Pcg64Mcg::seed_from_u64(seed);

    let mut builder = RandomGraphBuilder::new()
        .nodes(cli.vertices)
        .edges(cli.edges);
    builder.set_max_retries(cli.max_retries);

    let strategy = builder.strategy()?;
    let start = Instant::now();
    let graph = builder.build(&mut rng)?;
    debug_time!(start, "build", edges = graph.number_of_edges());
    info!(?strategy, vertices = cli.vertices, edges = cli.edges, "graph built");

    graph.try_write_json_file(&cli.output)?;
    info!(path = %cli.output.display(), "graph written");

    if cli.print_matrix {
        println!("{}", graph.matrix_display());
    }
    println!(
        "{} vertices, {} edges, seed {seed}, sha256 {}",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        graph.digest_sha256()
    );

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(
        "rgg",
        cli.verbose,
        cli.log_level.as_deref(),
        cli.log_json,
    ) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
