use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Graph, NodeIndex};
use crate::search::{shortest_path_chain, PathChain};
use crate::weight::{NodeKey, Weight};

/// Cheapest path between two nodes, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<K, W> {
    /// Node identities from start to goal, inclusive.
    pub path: Vec<K>,
    /// Weight of each edge along `path`; one shorter than `path`.
    pub step_costs: Vec<W>,
    /// Cumulative cost recorded by the search for the goal.
    pub total_cost: W,
}

impl<K, W> ShortestPath<K, W> {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// First node on the path.
    pub fn start(&self) -> Option<&K> {
        self.path.first()
    }

    /// Last node on the path.
    pub fn goal(&self) -> Option<&K> {
        self.path.last()
    }

    /// Consecutive `(from, to, cost)` triples along the path.
    pub fn steps(&self) -> impl Iterator<Item = (&K, &K, &W)> + '_ {
        self.path
            .windows(2)
            .zip(&self.step_costs)
            .map(|(pair, cost)| (&pair[0], &pair[1], cost))
    }
}

/// Turn a predecessor chain into a start-to-goal [`ShortestPath`].
///
/// Step costs are read back from the graph rather than from the chain, so the
/// report always reflects the edges actually stored. The total is the cost
/// recorded by the search.
pub fn reconstruct<K, W>(
    graph: &Graph<K, W>,
    chain: &PathChain<W>,
) -> Result<ShortestPath<K, W>>
where
    K: NodeKey,
    W: Weight,
{
    let mut nodes: Vec<NodeIndex> = chain.nodes_from_goal().collect();
    nodes.reverse();

    let path: Vec<K> = nodes.iter().map(|&node| graph.key(node).clone()).collect();
    let step_costs = path
        .windows(2)
        .map(|pair| graph.edge_weight(&pair[0], &pair[1]))
        .collect::<Result<Vec<_>>>()?;

    Ok(ShortestPath {
        path,
        step_costs,
        total_cost: chain.cost(),
    })
}

/// Find and reconstruct the cheapest path from `start` to `goal`.
pub fn shortest_path<K, W, Q>(
    graph: &Graph<K, W>,
    start: &Q,
    goal: &Q,
) -> Result<ShortestPath<K, W>>
where
    K: NodeKey + Borrow<Q>,
    W: Weight,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    let chain = shortest_path_chain(graph, start, goal)?;
    reconstruct(graph, &chain)
}

/// Node identities along the cheapest path from `start` to `goal`.
pub fn shortest_path_data<K, W, Q>(graph: &Graph<K, W>, start: &Q, goal: &Q) -> Result<Vec<K>>
where
    K: NodeKey + Borrow<Q>,
    W: Weight,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    shortest_path(graph, start, goal).map(|found| found.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph<String, f64> {
        let mut graph = Graph::new();
        for name in ["A", "B", "C", "D"] {
            graph.insert_node(name);
        }
        graph.insert_edge("A", "B", 2.5).unwrap();
        graph.insert_edge("B", "C", 0.5).unwrap();
        graph.insert_edge("A", "C", 4.0).unwrap();
        graph.insert_edge("C", "D", 1.25).unwrap();
        graph
    }

    #[test]
    fn reconstruct_orders_start_to_goal() {
        let graph = sample();
        let found = shortest_path(&graph, "A", "D").unwrap();
        assert_eq!(found.path, vec!["A", "B", "C", "D"]);
        assert_eq!(found.step_costs, vec![2.5, 0.5, 1.25]);
        assert_eq!(found.total_cost, 4.25);
        assert_eq!(found.hop_count(), 3);
        assert_eq!(found.start().map(String::as_str), Some("A"));
        assert_eq!(found.goal().map(String::as_str), Some("D"));
    }

    #[test]
    fn steps_pair_nodes_with_costs() {
        let graph = sample();
        let found = shortest_path(&graph, "B", "D").unwrap();
        let steps: Vec<_> = found
            .steps()
            .map(|(from, to, cost)| (from.as_str(), to.as_str(), *cost))
            .collect();
        assert_eq!(steps, vec![("B", "C", 0.5), ("C", "D", 1.25)]);
    }

    #[test]
    fn self_path_has_no_steps() {
        let graph = sample();
        let found = shortest_path(&graph, "C", "C").unwrap();
        assert_eq!(found.path, vec!["C"]);
        assert!(found.step_costs.is_empty());
        assert_eq!(found.total_cost, 0.0);
        assert_eq!(found.hop_count(), 0);
    }

    #[test]
    fn serializes_public_shape() {
        let graph = sample();
        let found = shortest_path(&graph, "A", "B").unwrap();
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "path": ["A", "B"],
                "step_costs": [2.5],
                "total_cost": 2.5
            })
        );
    }
}
