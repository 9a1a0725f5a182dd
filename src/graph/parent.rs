use tracing::debug;

use super::builder::DependencyGraphBuilder;
use super::types::ModuleEdge;
use crate::core::ModuleRecord;

/// Second pass that links modules to their parent modules.
///
/// Borrows the [`DependencyGraphBuilder`] so parents already seen as modules
/// or dependencies reuse their existing nodes.
pub struct ParentEdgeBuilder<'a> {
    builder: &'a mut DependencyGraphBuilder,
}

impl<'a> ParentEdgeBuilder<'a> {
    pub fn new(builder: &'a mut DependencyGraphBuilder) -> Self {
        Self { builder }
    }

    /// Add a `parent` edge module → parent for every record that declares
    /// one, returning the number of edges added
    pub fn build_parent_edges(&mut self, records: &[ModuleRecord]) -> usize {
        let mut added = 0;

        for record in records {
            let Some(parent) = record.parent() else {
                continue;
            };

            let module = self.builder.node_for(record.identity());
            let parent = self.builder.node_for(parent);
            self.builder.add_edge(module, parent, ModuleEdge::parent());
            added += 1;
        }

        debug!(edges = added, "parent pass complete");
        added
    }
}
