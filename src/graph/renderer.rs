use std::io::Write;

use petgraph::visit::EdgeRef;
use quick_xml::escape::escape;
use serde::Serialize;

use crate::cli::GraphFormat;
use crate::error::PomGraphError;
use crate::graph::{EdgeKind, ModuleGraph};

const GRAPHML_NAMESPACE: &str = "http://graphml.graphdrawing.org/xmlns";
const GRAPHML_SCHEMA_LOCATION: &str = "http://graphml.graphdrawing.org/xmlns \
                                       http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd";

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(PomGraphError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(PomGraphError::from)
    };
}

/// Serializes a [`ModuleGraph`] into one of the supported interchange
/// formats.
///
/// Node ids are `n<index>` and edge ids `e<index>` in every format, so the
/// same graph rendered twice is byte-identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphRenderer;

#[derive(Serialize)]
struct JsonGraph<'a> {
    directed: bool,
    multigraph: bool,
    nodes: Vec<JsonNode<'a>>,
    edges: Vec<JsonEdge>,
}

#[derive(Serialize)]
struct JsonNode<'a> {
    id: String,
    label: &'a str,
}

#[derive(Serialize)]
struct JsonEdge {
    id: String,
    source: String,
    target: String,
    kind: String,
}

impl GraphRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        format: GraphFormat,
        graph: &ModuleGraph,
        output: &mut dyn Write,
    ) -> Result<(), PomGraphError> {
        match format {
            GraphFormat::Graphml => self.render_graphml(graph, output),
            GraphFormat::Dot => self.render_dot(graph, output),
            GraphFormat::Json => self.render_json(graph, output),
        }
    }

    pub fn render_graphml(
        &self,
        graph: &ModuleGraph,
        output: &mut dyn Write,
    ) -> Result<(), PomGraphError> {
        writeln_out!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln_out!(
            output,
            r#"<graphml xmlns="{}" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="{}">"#,
            GRAPHML_NAMESPACE,
            GRAPHML_SCHEMA_LOCATION
        )?;
        writeln_out!(
            output,
            r#"  <key id="label" for="node" attr.name="label" attr.type="string"/>"#
        )?;
        writeln_out!(
            output,
            r#"  <key id="kind" for="edge" attr.name="kind" attr.type="string"/>"#
        )?;
        writeln_out!(output, r#"  <graph id="G" edgedefault="directed">"#)?;

        for index in graph.node_indices() {
            writeln_out!(output, r#"    <node id="n{}">"#, index.index())?;
            writeln_out!(
                output,
                r#"      <data key="label">{}</data>"#,
                escape(graph[index].label())
            )?;
            writeln_out!(output, "    </node>")?;
        }

        for edge in graph.edge_references() {
            writeln_out!(
                output,
                r#"    <edge id="e{}" source="n{}" target="n{}">"#,
                edge.id().index(),
                edge.source().index(),
                edge.target().index()
            )?;
            writeln_out!(
                output,
                r#"      <data key="kind">{}</data>"#,
                edge.weight().kind()
            )?;
            writeln_out!(output, "    </edge>")?;
        }

        writeln_out!(output, "  </graph>")?;
        writeln_out!(output, "</graphml>")?;

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &ModuleGraph,
        output: &mut dyn Write,
    ) -> Result<(), PomGraphError> {
        writeln_out!(output, "digraph modules {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;

        if graph.node_count() > 0 {
            writeln_out!(output)?;
        }
        for index in graph.node_indices() {
            writeln_out!(
                output,
                r#"    n{} [label="{}"];"#,
                index.index(),
                dot_escape(graph[index].label())
            )?;
        }

        if graph.edge_count() > 0 {
            writeln_out!(output)?;
        }
        for edge in graph.edge_references() {
            let kind = edge.weight().kind();
            let style = match kind {
                EdgeKind::Dependency => "solid",
                EdgeKind::Parent => "dashed",
            };
            writeln_out!(
                output,
                r#"    n{} -> n{} [kind="{}", style={}];"#,
                edge.source().index(),
                edge.target().index(),
                kind,
                style
            )?;
        }

        writeln_out!(output, "}}")?;

        Ok(())
    }

    pub fn render_json(
        &self,
        graph: &ModuleGraph,
        output: &mut dyn Write,
    ) -> Result<(), PomGraphError> {
        let document = JsonGraph {
            directed: true,
            multigraph: true,
            nodes: graph
                .node_indices()
                .map(|index| JsonNode {
                    id: format!("n{}", index.index()),
                    label: graph[index].label(),
                })
                .collect(),
            edges: graph
                .edge_references()
                .map(|edge| JsonEdge {
                    id: format!("e{}", edge.id().index()),
                    source: format!("n{}", edge.source().index()),
                    target: format!("n{}", edge.target().index()),
                    kind: edge.weight().kind().to_string(),
                })
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *output, &document)?;
        writeln_out!(output)?;

        Ok(())
    }
}

fn dot_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
