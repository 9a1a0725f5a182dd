//! Graph command executor

use console::style;
use miette::{Result, WrapErr};
use tracing::info;

use crate::analyzer::ModuleAnalyzer;
use crate::config::GraphOptions;
use crate::executors::CommandExecutor;
use crate::graph::{DependencyGraphBuilder, GraphRenderer, ParentEdgeBuilder};
use crate::module_discovery::DescriptorDiscovery;
use crate::progress::ProgressReporter;
use crate::utils::fs::write_atomically;
use crate::utils::string::pluralize;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let mut progress = ProgressReporter::for_stderr(config.quiet);

        // Discover and parse every descriptor up front so the parent pass
        // can replay the same records
        let discovery = DescriptorDiscovery::new().with_skip_dirs(config.skip_dirs.clone());
        let mut analyzer = ModuleAnalyzer::with_discovery(discovery);

        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }
        analyzer
            .discover_modules(&config.paths, progress.as_ref())
            .wrap_err("Failed to read Maven modules")?;
        if let Some(p) = progress.as_mut() {
            p.finish_discovery(analyzer.records().len());
            p.start_graph_building(analyzer.records().len());
        }

        let mut builder = DependencyGraphBuilder::new();
        builder.build_dependency_graph(analyzer.records(), progress.as_ref());

        if config.include_parent_edges {
            let added = ParentEdgeBuilder::new(&mut builder).build_parent_edges(analyzer.records());
            info!(edges = added, "added parent edges");
        }

        if let Some(p) = progress.as_mut() {
            p.finish_graph_building();
        }

        // Render fully in memory, then swap the file in: a failed run never
        // leaves a truncated graph behind
        let mut rendered = Vec::new();
        GraphRenderer::new()
            .render(config.format, builder.graph(), &mut rendered)
            .wrap_err("Failed to render graph")?;

        write_atomically(&config.output, &rendered)?;

        let graph = builder.graph();
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph written to {}",
            config.output.display()
        );

        if !config.quiet {
            eprintln!(
                "{} Graph written to {} ({} {}, {} {})",
                style("✓").green(),
                style(config.output.display()).bold(),
                graph.node_count(),
                pluralize("node", graph.node_count()),
                graph.edge_count(),
                pluralize("edge", graph.edge_count())
            );
        }

        Ok(())
    }
}
