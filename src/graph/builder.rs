use petgraph::graph::{EdgeIndex, NodeIndex};
use tracing::debug;

use super::store::ModuleNodeStore;
use super::types::{ModuleEdge, ModuleGraph};
use crate::core::{ModuleIdentity, ModuleRecord};
use crate::progress::ProgressReporter;

/// Builder for constructing the module dependency graph
///
/// Owns both the graph and the node store so that every node, whichever pass
/// created it, goes through the same identity lookup.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraphBuilder {
    graph: ModuleGraph,
    store: ModuleNodeStore,
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node for every module and every dependency it declares, and a
    /// `dependency` edge from the module to each of them.
    ///
    /// Edges are never merged: calling this twice with the same records
    /// doubles every edge.
    pub fn build_dependency_graph(
        &mut self,
        records: &[ModuleRecord],
        progress: Option<&ProgressReporter>,
    ) -> &ModuleGraph {
        for record in records {
            if let Some(p) = progress {
                p.update_graph_progress(&record.identity().label());
            }

            let module = self.node_for(record.identity());
            for dependency in record.dependencies() {
                let target = self.node_for(dependency);
                self.graph.add_edge(module, target, ModuleEdge::dependency());
            }
        }

        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "dependency pass complete"
        );

        &self.graph
    }

    pub fn graph(&self) -> &ModuleGraph {
        &self.graph
    }

    pub fn into_graph(self) -> ModuleGraph {
        self.graph
    }

    pub fn store(&self) -> &ModuleNodeStore {
        &self.store
    }

    /// Look up or create the node for `identity`
    pub(crate) fn node_for(&mut self, identity: &ModuleIdentity) -> NodeIndex {
        self.store.get_or_create_node(&mut self.graph, identity)
    }

    pub(crate) fn add_edge(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        edge: ModuleEdge,
    ) -> EdgeIndex {
        self.graph.add_edge(from, to, edge)
    }
}
