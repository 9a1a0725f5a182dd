//! # Module Analysis
//!
//! Drives descriptor discovery and parsing, and keeps the resulting module
//! records in memory so later graph passes can replay them.

use std::path::PathBuf;

use tracing::info;

use crate::core::ModuleRecord;
use crate::error::PomGraphError;
use crate::module_discovery::DescriptorDiscovery;
use crate::pom_parser;
use crate::progress::ProgressReporter;

#[derive(Debug, Clone, Default)]
pub struct ModuleAnalyzer {
    discovery: DescriptorDiscovery,
    records: Vec<ModuleRecord>,
}

impl ModuleAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_discovery(discovery: DescriptorDiscovery) -> Self {
        Self {
            discovery,
            records: Vec::new(),
        }
    }

    /// Parse every descriptor below `paths`.
    ///
    /// Stops at the first descriptor that cannot be read or parsed; records
    /// collected so far are discarded in that case.
    pub fn discover_modules(
        &mut self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<(), PomGraphError> {
        let mut records = Vec::new();

        for descriptor in self.discovery.discover(paths) {
            if let Some(p) = progress {
                p.parsing_descriptor(&descriptor);
            }

            records.push(pom_parser::parse_file(&descriptor)?);
        }

        info!(modules = records.len(), "module discovery complete");
        self.records = records;

        Ok(())
    }

    pub fn records(&self) -> &[ModuleRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ModuleRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;

    fn write_pom(dir: &Path, group: &str, artifact: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join("pom.xml"),
            format!(
                r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
  <groupId>{group}</groupId>
  <artifactId>{artifact}</artifactId>
</project>"#
            ),
        )
        .unwrap();
    }

    #[test]
    fn test_discover_modules_collects_records() {
        let temp = TempDir::new().unwrap();
        write_pom(&temp.path().join("a"), "g", "a");
        write_pom(&temp.path().join("b"), "g", "b");

        let mut analyzer = ModuleAnalyzer::new();
        analyzer
            .discover_modules(&[temp.path().to_path_buf()], None)
            .unwrap();

        let labels: Vec<String> = analyzer
            .records()
            .iter()
            .map(|r| r.identity().label())
            .collect();
        assert_eq!(labels, vec!["g:a", "g:b"]);
    }

    #[test]
    fn test_first_bad_descriptor_aborts() {
        let temp = TempDir::new().unwrap();
        write_pom(&temp.path().join("a"), "g", "a");
        fs::create_dir_all(temp.path().join("b")).unwrap();
        fs::write(
            temp.path().join("b/pom.xml"),
            r#"<project xmlns="http://maven.apache.org/POM/4.0.0"><groupId>g</groupId></project>"#,
        )
        .unwrap();

        let mut analyzer = ModuleAnalyzer::new();
        let err = analyzer
            .discover_modules(&[temp.path().to_path_buf()], None)
            .unwrap_err();

        assert!(matches!(err, PomGraphError::MissingArtifactId { .. }));
        assert!(analyzer.records().is_empty());
    }

    #[test]
    fn test_latin1_descriptor_is_analyzed() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("legacy")).unwrap();
        fs::write(
            temp.path().join("legacy/pom.xml"),
            b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\
              <project xmlns=\"http://maven.apache.org/POM/4.0.0\">\
              <name>Caf\xE9</name><groupId>g</groupId><artifactId>a</artifactId></project>",
        )
        .unwrap();

        let mut analyzer = ModuleAnalyzer::new();
        analyzer
            .discover_modules(&[temp.path().to_path_buf()], None)
            .unwrap();

        assert_eq!(analyzer.records().len(), 1);
        assert_eq!(analyzer.records()[0].identity().label(), "g:a");
    }

    #[test]
    fn test_respects_skip_dirs() {
        let temp = TempDir::new().unwrap();
        write_pom(&temp.path().join("a"), "g", "a");
        write_pom(&temp.path().join("a/target/copy"), "g", "copy");

        let discovery = DescriptorDiscovery::new().with_skip_dirs(vec!["target".to_string()]);
        let mut analyzer = ModuleAnalyzer::with_discovery(discovery);
        analyzer
            .discover_modules(&[temp.path().to_path_buf()], None)
            .unwrap();

        assert_eq!(analyzer.records().len(), 1);
    }
}
