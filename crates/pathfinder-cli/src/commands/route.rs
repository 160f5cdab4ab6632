//! Route command handler.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use pathfinder_lib::shortest_path;

use crate::commands::load_resolved;
use pathfinder_cli::output::{write_path, OutputFormat};

pub fn handle_route(
    target: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let (graph, _) = load_resolved(target)?;
    let found = shortest_path(&graph, from, to)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_path(&mut out, format, &found)?;
    out.flush()?;
    Ok(())
}
