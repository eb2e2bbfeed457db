//! DOT text helpers: name escaping and the subgraph writer.

use std::fmt::Write;

/// Java package root collapsed in labels.
pub const DEFAULT_PACKAGE_PREFIX: &str = "org.bbaw.bts";

/// Marker that replaces the package root.
pub const DEFAULT_MARKER: &str = "*";

/// Indentation of lines inside a subgraph body.
const BODY_INDENT: &str = "        ";

/// Name formatting options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix collapsed to `marker` in every emitted name. Empty disables collapsing.
    pub package_prefix: String,
    pub marker: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            package_prefix: DEFAULT_PACKAGE_PREFIX.to_string(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl RenderOptions {
    /// Quote a type name, collapsing the package prefix.
    ///
    /// `org.bbaw.bts.foo.Bar` becomes `"*.foo.Bar"` with the defaults.
    pub fn escape(&self, name: &str) -> String {
        if self.package_prefix.is_empty() {
            return format!("\"{}\"", name);
        }
        format!("\"{}\"", name.replace(&self.package_prefix, &self.marker))
    }

    /// `"<name>";`
    pub fn node_line(&self, name: &str) -> String {
        format!("{};", self.escape(name))
    }

    /// `"<source>" -> "<target>";`
    pub fn edge_line(&self, source: &str, target: &str) -> String {
        format!("{} -> {};", self.escape(source), self.escape(target))
    }
}

/// Join lines into a subgraph body, each indented. No lines gives an empty body.
pub fn indent_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("{BODY_INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// How a subgraph body is embedded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStyle {
    Live,
    /// Wrapped in `/* ... */` so the renderer ignores it
    Commented,
}

/// Write one `subgraph <name> { ... }` block.
pub fn write_subgraph(
    output: &mut String,
    name: &str,
    attrs: &[&str],
    body: &str,
    style: BodyStyle,
) {
    let _ = writeln!(output, "    subgraph {name} {{");
    for attr in attrs {
        let _ = writeln!(output, "{BODY_INDENT}{attr}");
    }
    match style {
        BodyStyle::Live => {
            let _ = writeln!(output, "{body}");
        }
        BodyStyle::Commented => {
            let _ = writeln!(output, "/* {body} */");
        }
    }
    let _ = writeln!(output, "    }}");
}
