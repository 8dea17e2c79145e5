//! `shortest-path` - loads a graph written by `rgg` and reports hop distances.

use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use itertools::Itertools;
use tracing::info;
use trigraph::{
    algo::*, error::Result, io::*, logging, prelude::*, repr::digest::GraphDigest,
};

#[derive(Debug, Parser)]
#[command(
    name = "shortest-path",
    version,
    about = "Compute unweighted shortest paths on a persisted graph"
)]
struct Cli {
    /// Graph file written by `rgg`
    graph: PathBuf,

    /// Source vertex of a single query
    #[arg(long, requires = "to")]
    from: Option<Node>,

    /// Target vertex of a single query
    #[arg(long, requires = "from")]
    to: Option<Node>,

    /// Also print the vertices of each shortest path
    #[arg(long)]
    route: bool,

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

fn print_route(graph: &TriangularGraph, source: Node, target: Node) -> Result<()> {
    if let Some(route) = graph.shortest_route(source, target)? {
        println!("  {}", route.iter().join(" -> "));
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let graph = TriangularGraph::try_read_json_file(&cli.graph)?;
    info!(
        path = %cli.graph.display(),
        vertices = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "graph loaded"
    );

    println!(
        "{} vertices, {} edges, sha256 {}",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        graph.digest_sha256()
    );
    if cli.print_matrix {
        println!("{}", graph.matrix_display());
    }

    if let (Some(source), Some(target)) = (cli.from, cli.to) {
        let outcome = graph.shortest_path(source, target)?;
        println!(
            "{}",
            PairDistance {
                source,
                target,
                outcome
            }
        );
        if cli.route {
            print_route(&graph, source, target)?;
        }
        return Ok(());
    }

    let start = Instant::now();
    let mut pairs = 0usize;
    let mut unreachable = 0usize;
    for pair in graph.all_pairs_shortest_paths() {
        pairs += 1;
        println!("{pair}");

        if !pair.outcome.is_found() {
            unreachable += 1;
        } else if cli.route {
            print_route(&graph, pair.source, pair.target)?;
        }
    }
    info!(pairs, unreachable, elapsed = ?start.elapsed(), "all pairs computed");

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(
        "shortest_path",
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
