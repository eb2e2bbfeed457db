use crate::adapters::open_source;
use crate::domain::render::{DotRenderer, RenderSummary};
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::info;

/// Load the relationship store at `db_path`, render it and write the DOT text to `output_path`.
///
/// The whole document is rendered before the output file is touched, so a
/// failed load never leaves a partial file behind.
pub fn render_to_file(db_path: &Path, output_path: &Path) -> Result<RenderSummary> {
    let snapshot = open_source(db_path)
        .load()
        .with_context(|| format!("Failed to load type snapshot from {}", db_path.display()))?;
    info!(
        interfaces = snapshot.interfaces.len(),
        classes = snapshot.classes.len(),
        abstract_classes = snapshot.abstract_classes.len(),
        enums = snapshot.enums.len(),
        extends = snapshot.extends.len(),
        implements = snapshot.implements.len(),
        references = snapshot.references.len(),
        "Snapshot loaded"
    );

    let output = DotRenderer::default().render(&snapshot);

    std::fs::write(output_path, &output.dot)
        .with_context(|| format!("Failed to write DOT output: {}", output_path.display()))?;

    let summary = output.summary;
    info!(
        path = %output_path.display(),
        nodes = summary.node_count(),
        excluded = summary.excluded,
        "DOT graph written"
    );
    Ok(summary)
}
