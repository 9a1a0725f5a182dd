//! Graph command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::error::PomGraphError;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub paths: Vec<PathBuf>,
    pub output: PathBuf,
    pub format: GraphFormat,
    pub include_parent_edges: bool,
    pub skip_dirs: Vec<String>,
    pub quiet: bool,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    paths: Option<Vec<PathBuf>>,
    output: Option<PathBuf>,
    format: Option<GraphFormat>,
    include_parent_edges: bool,
    skip_dirs: Vec<String>,
    quiet: bool,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_include_parent_edges(mut self, include_parent_edges: bool) -> Self {
        self.include_parent_edges = include_parent_edges;
        self
    }

    pub fn with_skip_dirs(mut self, skip_dirs: Vec<String>) -> Self {
        self.skip_dirs = skip_dirs;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, PomGraphError> {
        let paths = self
            .paths
            .ok_or_else(|| PomGraphError::ConfigurationError {
                message: "Missing required field: paths".to_string(),
            })?;

        if paths.is_empty() {
            return Err(PomGraphError::ConfigurationError {
                message: "At least one directory to scan is required".to_string(),
            });
        }

        Ok(GraphOptions {
            paths,
            output: self
                .output
                .ok_or_else(|| PomGraphError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                })?,
            format: self.format.unwrap_or(GraphFormat::Graphml),
            include_parent_edges: self.include_parent_edges,
            skip_dirs: self.skip_dirs,
            quiet: self.quiet,
        })
    }
}
