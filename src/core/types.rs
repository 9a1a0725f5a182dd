//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Identity of a Maven module: its `groupId` and `artifactId`.
///
/// Version is deliberately not part of the identity, so two descriptors
/// that differ only by version collapse onto the same graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleIdentity {
    group_id: String,
    artifact_id: String,
}

impl ModuleIdentity {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Label used for the module's node, `<group>:<artifact>`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Everything the graph needs to know about one parsed `pom.xml`
#[derive(Debug, Clone)]
pub struct ModuleRecord {
    identity: ModuleIdentity,
    parent: Option<ModuleIdentity>,
    dependencies: BTreeSet<ModuleIdentity>,
    source: PathBuf,
}

impl ModuleRecord {
    pub fn new(identity: ModuleIdentity, source: impl Into<PathBuf>) -> Self {
        Self {
            identity,
            parent: None,
            dependencies: BTreeSet::new(),
            source: source.into(),
        }
    }

    pub fn with_parent(mut self, parent: Option<ModuleIdentity>) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_dependencies(
        mut self,
        dependencies: impl IntoIterator<Item = ModuleIdentity>,
    ) -> Self {
        self.dependencies.extend(dependencies);
        self
    }

    pub fn identity(&self) -> &ModuleIdentity {
        &self.identity
    }

    pub fn parent(&self) -> Option<&ModuleIdentity> {
        self.parent.as_ref()
    }

    pub fn dependencies(&self) -> &BTreeSet<ModuleIdentity> {
        &self.dependencies
    }

    /// Descriptor file this record was parsed from
    pub fn source(&self) -> &Path {
        &self.source
    }
}

// Records compare by identity only; parent, dependencies and source path
// do not participate.
impl PartialEq for ModuleRecord {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for ModuleRecord {}

impl std::hash::Hash for ModuleRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}
