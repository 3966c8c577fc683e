use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use st_core::StResult;
use st_graph::Graph;
use st_mst::minimum_spanning_forest;

#[derive(Parser)]
#[command(name = "st-cli")]
#[command(about = "spantree CLI - adjacency-matrix graphs and Kruskal spanning trees", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a graph file and print its adjacency matrix
    Show {
        /// Path to the graph text file
        input: PathBuf,
    },
    /// Compute and print the minimum spanning tree
    Mst {
        /// Path to the graph text file
        input: PathBuf,
        /// Also print the adjacency matrix before the tree
        #[arg(long)]
        matrix: bool,
    },
}

fn main() -> StResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { input } => cmd_show(&input),
        Commands::Mst { input, matrix } => cmd_mst(&input, matrix),
    }
}

fn cmd_show(input: &Path) -> StResult<()> {
    let graph = Graph::from_path(input)?;
    print!("{graph}");
    Ok(())
}

fn cmd_mst(input: &Path, show_matrix: bool) -> StResult<()> {
    let graph = Graph::from_path(input)?;
    if show_matrix {
        print!("{graph}");
        println!();
    }

    let forest = minimum_spanning_forest(&graph)?;
    println!("Edges in the Minimum Spanning Tree:");
    println!("{forest}");

    if !forest.is_spanning_tree(graph.vertex_count()) {
        eprintln!(
            "warning: graph is disconnected ({} components); result is a spanning forest",
            forest.component_count(graph.vertex_count())
        );
    }
    Ok(())
}
