use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid XML in '{file}'")]
#[diagnostic(
    code(pom_graph::xml_parse_error),
    help("Check the markup near the highlighted position")
)]
pub struct XmlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("malformed markup here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: roxmltree::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum PomGraphError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(pom_graph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write graph to '{path}'")]
    #[diagnostic(
        code(pom_graph::write_error),
        help("Check that the parent directory exists and is writable")
    )]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode '{path}' as {encoding}")]
    #[diagnostic(
        code(pom_graph::decode_error),
        help("Make the encoding in the XML declaration match the file's actual bytes")
    )]
    DecodeError { path: PathBuf, encoding: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    XmlParseError(Box<XmlParseError>),

    #[error("Missing groupId in '{path}'")]
    #[diagnostic(
        code(pom_graph::missing_group_id),
        help("Declare <groupId> on the project or on its <parent> block")
    )]
    MissingGroupId { path: PathBuf },

    #[error("Missing artifactId in '{path}'")]
    #[diagnostic(
        code(pom_graph::missing_artifact_id),
        help("Every project must declare its own <artifactId>")
    )]
    MissingArtifactId { path: PathBuf },

    #[error("Missing parent groupId in '{path}'")]
    #[diagnostic(
        code(pom_graph::missing_parent_group_id),
        help("The <parent> block names an artifactId but no groupId")
    )]
    MissingParentGroupId { path: PathBuf },

    #[error("Missing dependency {field} in '{path}' (dependency #{index})")]
    #[diagnostic(
        code(pom_graph::missing_dependency_field),
        help(
            "Each <dependency> needs both <groupId> and <artifactId>; entries without a \
             complete identity are rejected instead of being graphed under a placeholder"
        )
    )]
    MissingDependencyField {
        path: PathBuf,
        field: &'static str,
        index: usize,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(pom_graph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(pom_graph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(pom_graph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl From<XmlParseError> for PomGraphError {
    fn from(error: XmlParseError) -> Self {
        PomGraphError::XmlParseError(Box::new(error))
    }
}
