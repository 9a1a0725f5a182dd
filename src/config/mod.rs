//! # Configuration Module
//!
//! This module provides the validated configuration for a pom-graph run,
//! built through a builder so the CLI and library callers construct it the
//! same way.
//!
//! ## Example
//!
//! ```
//! use pom_graph::cli::GraphFormat;
//! use pom_graph::common::ConfigBuilder;
//! use pom_graph::config::GraphOptions;
//!
//! let options = GraphOptions::builder()
//!     .with_paths(vec!["services".into(), "libraries".into()])
//!     .with_output("modules.graphml")
//!     .with_format(GraphFormat::Graphml)
//!     .with_include_parent_edges(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.paths.len(), 2);
//! ```

pub mod graph;

pub use graph::GraphOptions;
