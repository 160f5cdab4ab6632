//! Loading graphs from DOT-style edge lists.
//!
//! Only edge statements carrying a single numeric attribute are understood:
//!
//! ```text
//! graph campus {
//!     "Memorial Union" -- "Radio Hall" [seconds=176.7];
//!     "Radio Hall" -> "Education Building" [seconds=113.0];
//! }
//! ```
//!
//! `--` edges are inserted in both directions, `->` edges in one. Every other
//! line (headers, braces, comments) is skipped.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::Graph;

static EDGE_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*"([^"]*)"\s*(--|->)\s*"([^"]*)"\s*\[\s*[A-Za-z_][A-Za-z0-9_]*\s*=\s*"?([^\]";,\s]+)"?\s*\]\s*;?\s*$"#,
    )
    .expect("edge statement pattern is valid")
});

/// Summary of a graph load, for logging and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Total lines in the source, including skipped ones.
    pub lines_read: usize,
    /// Edge statements that were parsed.
    pub edges_read: usize,
    /// Lines that were not edge statements.
    pub lines_skipped: usize,
    /// Directed edges dropped because the ordered pair already existed.
    pub duplicate_edges: usize,
}

/// Read and parse a graph file.
pub fn load_graph(path: &Path) -> Result<(Graph<String, f64>, LoadReport)> {
    if !path.exists() {
        return Err(Error::GraphFileNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading graph");
    let source = fs::read_to_string(path)?;
    let (graph, report) = parse_graph(&source)?;

    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped = report.lines_skipped,
        "graph loaded"
    );
    Ok((graph, report))
}

/// Parse graph text into a new graph.
pub fn parse_graph(source: &str) -> Result<(Graph<String, f64>, LoadReport)> {
    let mut graph = Graph::new();
    let report = parse_into(&mut graph, source)?;
    Ok((graph, report))
}

/// Parse graph text, adding its nodes and edges to an existing graph.
///
/// Edges already present in `graph` keep their original weight.
pub fn parse_into(graph: &mut Graph<String, f64>, source: &str) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (offset, line) in source.lines().enumerate() {
        let line_number = offset + 1;
        report.lines_read += 1;

        let Some(captures) = EDGE_STATEMENT.captures(line) else {
            if looks_like_edge(line) {
                warn!(line = line_number, "skipping unrecognised edge statement");
            }
            report.lines_skipped += 1;
            continue;
        };

        let from = &captures[1];
        let to = &captures[3];
        let undirected = &captures[2] == "--";
        let weight = parse_weight(&captures[4], line_number)?;

        for name in [from, to] {
            if name.trim().is_empty() {
                return Err(Error::MalformedEdge {
                    line: line_number,
                    message: "node name must not be blank".to_string(),
                });
            }
            graph.insert_node(name);
        }

        report.edges_read += 1;
        if !graph.insert_edge(from, to, weight)? {
            report.duplicate_edges += 1;
        }
        if undirected && !graph.insert_edge(to, from, weight)? {
            report.duplicate_edges += 1;
        }
    }

    if report.duplicate_edges > 0 {
        debug!(
            duplicates = report.duplicate_edges,
            "kept first weight for repeated edges"
        );
    }
    Ok(report)
}

fn parse_weight(raw: &str, line: usize) -> Result<f64> {
    let weight: f64 = raw.parse().map_err(|_| Error::MalformedEdge {
        line,
        message: format!("weight '{raw}' is not a number"),
    })?;

    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::MalformedEdge {
            line,
            message: format!("weight {raw} must be finite and non-negative"),
        });
    }
    Ok(weight)
}

fn looks_like_edge(line: &str) -> bool {
    line.contains("\" --") || line.contains("\" ->")
}
