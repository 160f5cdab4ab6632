use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::graph::Graph;
use crate::weight::{NodeKey, Weight};

/// Aggregate figures describing a loaded graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub nodes: usize,
    pub edges: usize,
    pub total_weight: f64,
}

impl GraphStatistics {
    /// Raw counts: every stored directed edge is counted once.
    pub fn directed<K: NodeKey, W: Weight>(graph: &Graph<K, W>) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            total_weight: total_weight(graph),
        }
    }

    /// Counts with each mirrored edge pair reported once.
    ///
    /// An edge whose reverse exists with the same weight is half of one
    /// logical undirected edge. Any other edge, including a self loop, counts
    /// on its own, so graphs mixing `--` and `->` statements total correctly.
    pub fn undirected<K: NodeKey, W: Weight>(graph: &Graph<K, W>) -> Self {
        let mut single = 0;
        let mut mirrored = 0;
        let mut total_weight = 0.0;

        for (from, to, weight) in graph.edges() {
            let paired = from != to
                && graph
                    .edge_weight(to, from)
                    .is_ok_and(|reverse| reverse.order(&weight) == Ordering::Equal);
            if paired {
                mirrored += 1;
                total_weight += weight.as_f64() / 2.0;
            } else {
                single += 1;
                total_weight += weight.as_f64();
            }
        }

        Self {
            nodes: graph.node_count(),
            edges: single + mirrored / 2,
            total_weight,
        }
    }
}

impl fmt::Display for GraphStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Nodes: {} Total Edges: {} Total Weight: {:.2}",
            self.nodes, self.edges, self.total_weight
        )
    }
}

fn total_weight<K: NodeKey, W: Weight>(graph: &Graph<K, W>) -> f64 {
    graph.edges().map(|(_, _, weight)| weight.as_f64()).sum()
}
