//! Core graph types
//!
//! This module contains the node and edge weights stored in the module graph.

use std::fmt;

use petgraph::graph::DiGraph;

use crate::core::ModuleIdentity;

/// The graph produced by a run: modules as nodes, relations as edges
pub type ModuleGraph = DiGraph<ModuleNode, ModuleEdge>;

/// Represents one Maven module in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    identity: ModuleIdentity,
    label: String,
}

impl ModuleNode {
    pub fn new(identity: ModuleIdentity) -> Self {
        let label = identity.label();
        Self { identity, label }
    }

    pub fn identity(&self) -> &ModuleIdentity {
        &self.identity
    }

    /// `<group>:<artifact>`
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Represents a relation between two modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleEdge {
    kind: EdgeKind,
}

impl ModuleEdge {
    pub fn new(kind: EdgeKind) -> Self {
        Self { kind }
    }

    pub fn dependency() -> Self {
        Self::new(EdgeKind::Dependency)
    }

    pub fn parent() -> Self {
        Self::new(EdgeKind::Parent)
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }
}

/// Which descriptor relation produced an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeKind {
    /// Module declares the target in `<dependencies>`
    Dependency,
    /// Module names the target in its `<parent>` block
    Parent,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Dependency => write!(f, "dependency"),
            EdgeKind::Parent => write!(f, "parent"),
        }
    }
}
