use std::path::PathBuf;

use clap::Parser;

use crate::common::LoggingArgs;

#[derive(Parser, Debug)]
#[command(
    name = "pom-graph",
    about = "Build a module dependency graph from Maven pom.xml files",
    long_about = "pom-graph recursively searches the given directories for pom.xml files, reads \
                  each module's groupId and artifactId together with its declared dependencies, \
                  and writes the resulting directed graph to a file. Every module and every \
                  dependency becomes exactly one node labeled <groupId>:<artifactId>. The first \
                  malformed descriptor aborts the run and no output is written.",
    version
)]
pub struct Cli {
    /// The generated graph is written to this file
    #[arg(value_name = "GRAPH_OUTPUT_FILE")]
    pub output: PathBuf,

    /// Directories which will be recursively searched for pom.xml files
    #[arg(value_name = "MAVEN_MODULE_DIR", required = true)]
    pub paths: Vec<PathBuf>,

    /// Add each module's relation to its parent module as an edge
    #[arg(long, env = "POM_GRAPH_INCLUDE_PARENT_EDGES")]
    pub include_parent_edges: bool,

    /// Graph format
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_FORMAT,
        env = "POM_GRAPH_FORMAT"
    )]
    pub format: GraphFormat,

    /// Directory name to leave out of the search (repeatable)
    #[arg(long = "skip-dir", value_name = "DIR_NAME")]
    pub skip_dirs: Vec<String>,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum GraphFormat {
    Graphml,
    Dot,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal_arguments() {
        let cli = Cli::try_parse_from(["pom-graph", "out.graphml", "repo"]).unwrap();

        assert_eq!(cli.output, PathBuf::from("out.graphml"));
        assert_eq!(cli.paths, vec![PathBuf::from("repo")]);
        assert_eq!(cli.format, GraphFormat::Graphml);
        assert!(cli.skip_dirs.is_empty());
    }

    #[test]
    fn test_parse_all_arguments() {
        let cli = Cli::try_parse_from([
            "pom-graph",
            "--include-parent-edges",
            "--format",
            "dot",
            "--skip-dir",
            "target",
            "--skip-dir",
            ".git",
            "-v",
            "graph.dot",
            "one",
            "two",
        ])
        .unwrap();

        assert!(cli.include_parent_edges);
        assert_eq!(cli.format, GraphFormat::Dot);
        assert_eq!(cli.skip_dirs, vec!["target", ".git"]);
        assert_eq!(cli.paths.len(), 2);
        assert!(cli.logging.verbose);
    }

    #[test]
    fn test_scan_root_is_required() {
        let err = Cli::try_parse_from(["pom-graph", "out.graphml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
