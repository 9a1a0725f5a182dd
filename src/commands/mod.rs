//! Command implementations for the pom-graph CLI
//!
//! pom-graph has a single command: scan, build the graph, write it.

pub mod graph;

use miette::Result;

use crate::cli::Cli;

/// Execute the command described by the parsed CLI input
pub fn execute_command(command: Cli) -> Result<()> {
    graph::execute_graph_command(command)
}
