// Handlers for CLI subcommands. main.rs parses arguments and dispatches here.

pub mod route;
pub mod shell;
pub mod stats;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use pathfinder_lib::{load_graph, resolve_graph_path, Graph};

/// Resolve the graph location and load it.
pub(crate) fn load_resolved(target: Option<&Path>) -> Result<(Graph<String, f64>, PathBuf)> {
    let path = resolve_graph_path(target).context("failed to resolve the graph file location")?;
    let (graph, report) = load_graph(&path)
        .with_context(|| format!("failed to load graph from {}", path.display()))?;
    debug!(
        edges = report.edges_read,
        skipped = report.lines_skipped,
        "graph ready"
    );
    Ok((graph, path))
}
