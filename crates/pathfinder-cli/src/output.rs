//! Output formatting for paths and graph statistics.
//!
//! Text output is meant for people; JSON output mirrors the library's
//! serializable types so scripts can consume it directly.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use pathfinder_lib::{GraphStatistics, ShortestPath};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Path shape produced by graph files.
pub type NamedPath = ShortestPath<String, f64>;

/// Write a path in the requested format.
pub fn write_path<W: Write>(
    out: &mut W,
    format: OutputFormat,
    found: &NamedPath,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_path_text(out, found),
        OutputFormat::Json => write_json(out, found),
    }
}

/// Write graph statistics in the requested format.
pub fn write_statistics<W: Write>(
    out: &mut W,
    format: OutputFormat,
    stats: &GraphStatistics,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", stats),
        OutputFormat::Json => write_json(out, stats),
    }
}

fn write_path_text<W: Write>(out: &mut W, found: &NamedPath) -> io::Result<()> {
    writeln!(out, "Shortest path: {}", found.path.join(" -> "))?;
    if found.hop_count() > 0 {
        writeln!(out, "Steps:")?;
        for (index, (from, to, cost)) in found.steps().enumerate() {
            writeln!(out, "  {}. {} -> {}: {:.2}", index + 1, from, to, cost)?;
        }
    }
    writeln!(out, "Total cost: {:.2}", found.total_cost)
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path() -> NamedPath {
        ShortestPath {
            path: vec!["D".to_string(), "A".to_string(), "H".to_string()],
            step_costs: vec![7.0, 8.0],
            total_cost: 15.0,
        }
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("write to buffer");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn text_path_lists_each_step() {
        let text = render(|out| write_path(out, OutputFormat::Text, &sample_path()));
        assert_eq!(
            text,
            "Shortest path: D -> A -> H\nSteps:\n  1. D -> A: 7.00\n  2. A -> H: 8.00\nTotal cost: 15.00\n"
        );
    }

    #[test]
    fn text_self_path_omits_steps() {
        let found = ShortestPath {
            path: vec!["D".to_string()],
            step_costs: Vec::new(),
            total_cost: 0.0,
        };
        let text = render(|out| write_path(out, OutputFormat::Text, &found));
        assert_eq!(text, "Shortest path: D\nTotal cost: 0.00\n");
    }

    #[test]
    fn json_path_round_trips_through_serde_value() {
        let text = render(|out| write_path(out, OutputFormat::Json, &sample_path()));
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["path"], serde_json::json!(["D", "A", "H"]));
        assert_eq!(value["total_cost"], serde_json::json!(15.0));
    }

    #[test]
    fn statistics_text_uses_display() {
        let stats = GraphStatistics {
            nodes: 3,
            edges: 2,
            total_weight: 5.5,
        };
        let text = render(|out| write_statistics(out, OutputFormat::Text, &stats));
        assert_eq!(text, "Total Nodes: 3 Total Edges: 2 Total Weight: 5.50\n");
    }
}
