//! # Graph Construction and Rendering Module
//!
//! This module turns parsed module records into a directed graph and
//! serializes it.
//!
//! ## Components
//!
//! ### Graph Building
//! - **ModuleNodeStore**: Guarantees one node per module identity
//! - **DependencyGraphBuilder**: Adds a node per module and an edge per
//!   declared dependency
//! - **ParentEdgeBuilder**: Optional second pass adding module → parent edges
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders graphs as GraphML, DOT or node-link JSON
//!
//! ## Example
//!
//! ```
//! use pom_graph::cli::GraphFormat;
//! use pom_graph::core::{ModuleIdentity, ModuleRecord};
//! use pom_graph::graph::{DependencyGraphBuilder, GraphRenderer, ParentEdgeBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let records = vec![
//!     ModuleRecord::new(ModuleIdentity::new("org.example", "app"), "app/pom.xml")
//!         .with_parent(Some(ModuleIdentity::new("org.example", "parent")))
//!         .with_dependencies([ModuleIdentity::new("org.example", "core")]),
//!     ModuleRecord::new(ModuleIdentity::new("org.example", "core"), "core/pom.xml"),
//! ];
//!
//! let mut builder = DependencyGraphBuilder::new();
//! builder.build_dependency_graph(&records, None);
//! ParentEdgeBuilder::new(&mut builder).build_parent_edges(&records);
//!
//! assert_eq!(builder.graph().node_count(), 3);
//! assert_eq!(builder.graph().edge_count(), 2);
//!
//! let mut output = Vec::new();
//! GraphRenderer::new().render(GraphFormat::Graphml, builder.graph(), &mut output)?;
//!
//! let graphml = String::from_utf8(output)?;
//! assert!(graphml.contains("org.example:app"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod parent;
mod renderer;
mod store;
mod types;

pub use builder::DependencyGraphBuilder;
pub use parent::ParentEdgeBuilder;
pub use renderer::GraphRenderer;
pub use store::ModuleNodeStore;
pub use types::{EdgeKind, ModuleEdge, ModuleGraph, ModuleNode};
