use crate::domain::classify::{ClassifiedEdges, exclude_types, keep_edge};
use crate::domain::edge::{EdgeKind, Relation};
use crate::domain::metatype::Metatype;
use crate::domain::snapshot::TypeSnapshot;
use crate::dot::{BodyStyle, RenderOptions, indent_lines, write_subgraph};
use std::collections::HashSet;
use std::fmt::Write;
use tracing::debug;

/// Counts of what made it into the output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub nodes: Vec<(Metatype, usize)>,
    pub edges: Vec<(EdgeKind, usize)>,
    pub excluded: usize,
}

impl RenderSummary {
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(|(_, n)| n).sum()
    }

    pub fn edge_count(&self, kind: EdgeKind) -> usize {
        self.edges
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

pub struct RenderOutput {
    pub dot: String,
    pub summary: RenderSummary,
}

/// DOT renderer - turns a snapshot into the fixed subgraph layout
pub struct DotRenderer {
    options: RenderOptions,
}

impl DotRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, snapshot: &TypeSnapshot) -> RenderOutput {
        let edges = ClassifiedEdges::classify(snapshot);
        let excluded = exclude_types(snapshot, &edges);
        let mut summary = RenderSummary {
            excluded: excluded.len(),
            ..Default::default()
        };

        let mut dot = String::with_capacity(4096);
        let _ = writeln!(dot, "digraph G {{");
        let _ = writeln!(dot, "    graph [sep=0.5];");

        for metatype in Metatype::ALL {
            let lines = self.node_lines(snapshot.types(metatype), &excluded);
            summary.nodes.push((metatype, lines.len()));
            let _ = writeln!(dot);
            write_subgraph(
                &mut dot,
                metatype.as_str(),
                node_attrs(metatype),
                &indent_lines(&lines),
                BodyStyle::Live,
            );
        }

        for kind in [
            EdgeKind::Extends,
            EdgeKind::InterfaceExtends,
            EdgeKind::Implements,
            EdgeKind::Reference,
        ] {
            let lines = self.edge_lines(edges.get(kind), &excluded);
            summary.edges.push((kind, lines.len()));
            let (name, attrs, style) = edge_section(kind);
            let _ = writeln!(dot);
            write_subgraph(&mut dot, name, attrs, &indent_lines(&lines), style);
        }

        let _ = writeln!(dot, "}}");

        debug!(
            nodes = summary.node_count(),
            excluded = summary.excluded,
            "Rendered DOT graph"
        );
        RenderOutput { dot, summary }
    }

    fn node_lines(&self, names: &HashSet<String>, excluded: &HashSet<&str>) -> Vec<String> {
        let mut kept: Vec<&String> = names
            .iter()
            .filter(|name| !excluded.contains(name.as_str()))
            .collect();
        kept.sort();
        kept.into_iter().map(|name| self.options.node_line(name)).collect()
    }

    fn edge_lines(&self, relations: &HashSet<Relation>, excluded: &HashSet<&str>) -> Vec<String> {
        let mut kept: Vec<&Relation> = relations
            .iter()
            .filter(|relation| keep_edge(excluded, relation))
            .collect();
        kept.sort();
        kept.into_iter()
            .map(|(source, target)| self.options.edge_line(source, target))
            .collect()
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Render with default options.
pub fn render_dot(snapshot: &TypeSnapshot) -> String {
    DotRenderer::default().render(snapshot).dot
}

const CLASS_ATTRS: &[&str] = &["node [shape=box];"];
const ABSTRACT_CLASS_ATTRS: &[&str] = &["node [shape=box, style=bold];"];
const ENUM_ATTRS: &[&str] = &["node [style=dotted];"];

fn node_attrs(metatype: Metatype) -> &'static [&'static str] {
    match metatype {
        Metatype::Interface => &[],
        Metatype::Class => CLASS_ATTRS,
        Metatype::AbstractClass => ABSTRACT_CLASS_ATTRS,
        Metatype::Enum => ENUM_ATTRS,
    }
}

const EXTENDS_ATTRS: &[&str] = &["edge [weight=2.0];", "edge [style=bold];"];
const INTERFACE_EXTENDS_ATTRS: &[&str] = &["edge [len=1.0, weight=5.0];"];
const IMPLEMENTS_ATTRS: &[&str] = &["edge [len=1.0, weight=1.0];"];
const REFERENCES_ATTRS: &[&str] = &["edge [color=gray, weight=0];"];

fn edge_section(kind: EdgeKind) -> (&'static str, &'static [&'static str], BodyStyle) {
    match kind {
        EdgeKind::Extends => ("extends", EXTENDS_ATTRS, BodyStyle::Live),
        EdgeKind::InterfaceExtends => {
            ("interface_extends", INTERFACE_EXTENDS_ATTRS, BodyStyle::Live)
        }
        EdgeKind::Implements => ("implements", IMPLEMENTS_ATTRS, BodyStyle::Live),
        // Usage edges stay in the file for inspection but are not laid out.
        EdgeKind::Reference => ("references", REFERENCES_ATTRS, BodyStyle::Commented),
    }
}
