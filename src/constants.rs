//! Configuration constants for pom-graph
//!
//! This module contains the fixed names and defaults used throughout the
//! application.

/// Maven descriptor conventions
pub mod maven {
    /// File name every module descriptor must have
    pub const DESCRIPTOR_FILE_NAME: &str = "pom.xml";

    /// Namespace all POM elements are read from
    pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
}

/// Progress display configuration
pub mod progress {
    /// Spinner frames shown while descriptors are scanned
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

/// Output formatting configuration
pub mod output {
    /// Default graph format when not specified
    pub const DEFAULT_FORMAT: &str = "graphml";
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding a `tracing` filter directive
    pub const LOG_ENV_VAR: &str = "POM_GRAPH_LOG";

    pub const DEFAULT_FILTER: &str = "pom_graph=warn";
    pub const VERBOSE_FILTER: &str = "pom_graph=debug";
    pub const QUIET_FILTER: &str = "pom_graph=error";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maven_constants() {
        assert_eq!(maven::DESCRIPTOR_FILE_NAME, "pom.xml");
        assert!(maven::POM_NAMESPACE.starts_with("http://maven.apache.org/POM/"));
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "graphml");
        assert_eq!(progress::SPINNER_FRAMES.len(), 4);
    }
}
