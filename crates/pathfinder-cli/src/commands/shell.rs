//! Interactive shell command handler.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use pathfinder_lib::resolve_graph_path;

use crate::commands::load_resolved;
use pathfinder_cli::output::OutputFormat;
use pathfinder_cli::shell::{run_shell, Session};

/// Start the shell, preloading the resolved graph when the file exists.
pub fn handle_shell(target: Option<&Path>, format: OutputFormat) -> Result<()> {
    let mut session = Session::new(format);

    let path = resolve_graph_path(target).context("failed to resolve the graph file location")?;
    if path.exists() {
        let (graph, path) = load_resolved(Some(&path))?;
        session = session.with_graph(graph, path);
    } else {
        info!(path = %path.display(), "no graph preloaded; use 'load <path>'");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(&mut session, stdin.lock(), &mut stdout.lock())
}
