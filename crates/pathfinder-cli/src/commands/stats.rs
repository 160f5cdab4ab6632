use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use pathfinder_lib::GraphStatistics;

use crate::commands::load_resolved;
use pathfinder_cli::output::{write_statistics, OutputFormat};

/// Print totals for the graph, counting each undirected edge once.
pub fn handle_stats(target: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (graph, _) = load_resolved(target)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_statistics(&mut out, format, &GraphStatistics::undirected(&graph))?;
    out.flush()?;
    Ok(())
}
