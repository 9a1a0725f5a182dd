use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use tracing::trace;

use super::types::{ModuleGraph, ModuleNode};
use crate::core::ModuleIdentity;

/// Maps each module identity to exactly one node of a [`ModuleGraph`].
///
/// Nodes are created lazily on first reference. Every node that ends up in
/// the graph must be obtained through the same store, otherwise two nodes
/// could represent one identity.
#[derive(Debug, Clone, Default)]
pub struct ModuleNodeStore {
    indices: HashMap<ModuleIdentity, NodeIndex>,
}

impl ModuleNodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create_node(
        &mut self,
        graph: &mut ModuleGraph,
        identity: &ModuleIdentity,
    ) -> NodeIndex {
        if let Some(&index) = self.indices.get(identity) {
            return index;
        }

        let index = graph.add_node(ModuleNode::new(identity.clone()));
        trace!(module = %identity, index = index.index(), "created node");
        self.indices.insert(identity.clone(), index);
        index
    }

    pub fn node_for(&self, identity: &ModuleIdentity) -> Option<NodeIndex> {
        self.indices.get(identity).copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_identity_returns_same_node() {
        let mut graph = ModuleGraph::new();
        let mut store = ModuleNodeStore::new();

        let first = store.get_or_create_node(&mut graph, &ModuleIdentity::new("g", "a"));
        let second = store.get_or_create_node(&mut graph, &ModuleIdentity::new("g", "a"));

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph[first].label(), "g:a");
    }

    #[test]
    fn test_distinct_identities_get_distinct_nodes() {
        let mut graph = ModuleGraph::new();
        let mut store = ModuleNodeStore::new();

        let a = store.get_or_create_node(&mut graph, &ModuleIdentity::new("g", "a"));
        let b = store.get_or_create_node(&mut graph, &ModuleIdentity::new("g", "b"));
        let other_group = store.get_or_create_node(&mut graph, &ModuleIdentity::new("h", "a"));

        assert_ne!(a, b);
        assert_ne!(a, other_group);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_node_for_does_not_create() {
        let mut graph = ModuleGraph::new();
        let mut store = ModuleNodeStore::new();
        let identity = ModuleIdentity::new("g", "a");

        assert!(store.is_empty());
        assert_eq!(store.node_for(&identity), None);

        let index = store.get_or_create_node(&mut graph, &identity);
        assert_eq!(store.node_for(&identity), Some(index));
        assert_eq!(graph.node_count(), 1);
    }
}
