mod input;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use mst_solver::{compute_mst, total_weight, Edge, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mst-runner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Minimum spanning trees of hand-built graphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read edges and print the minimum spanning tree
    Solve {
        /// `kruskal` or `prim`
        #[arg(short, long, default_value = "kruskal")]
        algorithm: Strategy,

        /// Fail on edges with a blank vertex label instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Edge file with one `VERTEX VERTEX WEIGHT` per line; stdin if omitted
        file: Option<PathBuf>,
    },
    /// Compare both algorithms on random connected graphs
    Check {
        #[arg(long, default_value_t = 1000)]
        graphs: u64,

        #[arg(long, default_value_t = 10)]
        vertices: usize,

        #[arg(long, default_value_t = 15)]
        extra_edges: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            algorithm,
            strict,
            file,
        } => solve(algorithm, strict, file),
        Command::Check {
            graphs,
            vertices,
            extra_edges,
            seed,
        } => check(graphs, vertices, extra_edges, seed),
    }
}

fn solve(algorithm: Strategy, strict: bool, file: Option<PathBuf>) -> anyhow::Result<()> {
    let graph = match &file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            input::read_graph(BufReader::new(file), strict)?
        }
        None => input::read_graph(io::stdin().lock(), strict)?,
    };

    let mst = graph.compute_mst(algorithm)?;
    log::info!("{algorithm} selected {} edges", mst.len());

    let mut out = io::stdout().lock();
    writeln!(out, "Minimum Spanning Tree:")?;
    for edge in &mst {
        writeln!(out, "{edge}")?;
    }
    writeln!(out, "Total weight: {}", total_weight(&mst))?;
    Ok(())
}

/// Outcome of running both algorithms on one random graph.
struct Comparison {
    seed: u64,
    kruskal: (usize, i64),
    prim: (usize, i64),
}

fn check(graphs: u64, vertices: usize, extra_edges: usize, seed: u64) -> anyhow::Result<()> {
    if vertices == 0 {
        bail!("--vertices must be at least 1");
    }

    let now = Instant::now();
    let comparisons = (0..graphs)
        .into_par_iter()
        .map(|index| -> anyhow::Result<Comparison> {
            let graph_seed = seed.wrapping_add(index);
            let edges = generate_connected_graph(graph_seed, vertices, extra_edges);
            let summary = |strategy: Strategy| -> anyhow::Result<(usize, i64)> {
                let mst = compute_mst(strategy, &edges)?;
                Ok((mst.len(), total_weight(&mst)))
            };
            Ok(Comparison {
                seed: graph_seed,
                kruskal: summary(Strategy::Kruskal)?,
                prim: summary(Strategy::Prim)?,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let running_time = now.elapsed();

    let mismatches: Vec<_> = comparisons
        .iter()
        .filter(|comparison| comparison.kruskal != comparison.prim)
        .collect();
    for comparison in &mismatches {
        log::error!(
            "Seed {}: Kruskal gave {:?}, Prim gave {:?}",
            comparison.seed,
            comparison.kruskal,
            comparison.prim
        );
    }

    println!("Checked {graphs} graphs in {running_time:?}");
    println!("Mismatches: {}", mismatches.len());
    if !mismatches.is_empty() {
        bail!("{} graphs disagree between Kruskal and Prim", mismatches.len());
    }
    Ok(())
}

/// A random spanning tree over `vertices` labels plus `extra_edges` random edges.
fn generate_connected_graph(seed: u64, vertices: usize, extra_edges: usize) -> Vec<Edge> {
    let mut rng = StdRng::seed_from_u64(seed);
    let label = |index: usize| format!("V{index}");

    let mut edges = Vec::with_capacity(vertices + extra_edges);
    // Start with a self-loop so that a one-vertex graph still has an edge.
    edges.push(Edge::new(label(0), label(0), rng.gen_range(-100..=100)));
    for vertex in 1..vertices {
        let parent = rng.gen_range(0..vertex);
        edges.push(Edge::new(label(vertex), label(parent), rng.gen_range(-100..=100)));
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..vertices);
        let b = rng.gen_range(0..vertices);
        edges.push(Edge::new(label(a), label(b), rng.gen_range(-100..=100)));
    }
    edges
}
