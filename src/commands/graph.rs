//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::PomGraphError;

impl FromCommand for GraphOptions {
    fn from_command(command: Cli) -> Result<Self, PomGraphError> {
        let Cli {
            output,
            paths,
            include_parent_edges,
            format,
            skip_dirs,
            logging,
        } = command;

        GraphOptions::builder()
            .with_paths(paths)
            .with_output(output)
            .with_format(format)
            .with_include_parent_edges(include_parent_edges)
            .with_skip_dirs(skip_dirs)
            .with_quiet(logging.quiet)
            .build()
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command for writing the module graph
pub fn execute_graph_command(command: Cli) -> Result<()> {
    let config = GraphOptions::from_command(command)
        .wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
