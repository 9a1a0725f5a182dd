//! # pom-graph - Maven Module Dependency Graphs
//!
//! pom-graph scans directory trees for Maven `pom.xml` descriptors, reads
//! each module's identity (`groupId:artifactId`), its parent and its declared
//! dependencies, and writes the result as a directed graph in GraphML, DOT
//! or node-link JSON.
//!
//! ## Main Components
//!
//! - **Discovery**: Walks root directories for `pom.xml` files
//! - **Parser**: Turns one descriptor into a [`core::ModuleRecord`]
//! - **Graph**: Deduplicates modules into nodes and adds dependency and
//!   parent edges
//! - **Renderer**: Serializes the finished graph
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use pom_graph::analyzer::ModuleAnalyzer;
//! use pom_graph::cli::GraphFormat;
//! use pom_graph::graph::{DependencyGraphBuilder, GraphRenderer, ParentEdgeBuilder};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Parse every pom.xml below the repository root
//! let mut analyzer = ModuleAnalyzer::new();
//! analyzer.discover_modules(&[PathBuf::from("/path/to/maven/repo")], None)?;
//!
//! // Step 2: One node per module, one edge per declared dependency
//! let mut builder = DependencyGraphBuilder::new();
//! builder.build_dependency_graph(analyzer.records(), None);
//!
//! // Step 3 (optional): Link modules to their parents
//! ParentEdgeBuilder::new(&mut builder).build_parent_edges(analyzer.records());
//!
//! // Step 4: Write GraphML
//! let mut output = Vec::new();
//! GraphRenderer::new().render(GraphFormat::Graphml, builder.graph(), &mut output)?;
//! std::fs::write("modules.graphml", output).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod module_discovery;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod graph;
pub mod logging;
pub mod pom_parser;

pub use module_discovery::DescriptorDiscovery;
pub use progress::ProgressReporter;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init_logging(&cli.logging);

    execute_command(cli)
}
