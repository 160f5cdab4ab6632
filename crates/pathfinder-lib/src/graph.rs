use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::weight::{NodeKey, Weight};

/// Minimum similarity score for a node name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Position of a node inside the graph's node arena.
///
/// Edges refer to their successor through this index rather than holding the
/// node itself, so cycles in the graph never become cycles in ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Raw arena slot.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Directed, weighted edge leaving a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub target: NodeIndex,
    pub weight: W,
}

#[derive(Debug, Clone)]
struct Node<K, W> {
    id: K,
    edges: Vec<Edge<W>>,
}

/// Directed weighted graph keyed by caller-supplied node identities.
///
/// Undirected graphs are modelled by inserting each edge in both directions.
#[derive(Debug, Clone)]
pub struct Graph<K, W> {
    nodes: Vec<Node<K, W>>,
    index: HashMap<K, NodeIndex>,
    edge_count: usize,
}

impl<K, W> Default for Graph<K, W> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<K: NodeKey, W: Weight> Graph<K, W> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no outgoing edges.
    ///
    /// Returns `false` and leaves the graph untouched when the identity is
    /// already present.
    ///
    /// Any identity is stored, but searches reject identities whose display
    /// form is blank with [`Error::InvalidArgument`], so such a node can hold
    /// and receive edges yet never be a path endpoint.
    pub fn insert_node(&mut self, id: impl Into<K>) -> bool {
        let id = id.into();
        if self.index.contains_key(&id) {
            return false;
        }

        let slot = NodeIndex(self.nodes.len());
        self.index.insert(id.clone(), slot);
        self.nodes.push(Node {
            id,
            edges: Vec::new(),
        });
        true
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// Both endpoints must already exist. An existing edge between the same
    /// ordered pair is kept as-is and `Ok(false)` is returned.
    pub fn insert_edge<Q>(&mut self, from: &Q, to: &Q, weight: W) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let source = self.require(from)?;
        let target = self.require(to)?;

        let edges = &mut self.nodes[source.0].edges;
        if edges.iter().any(|edge| edge.target == target) {
            return Ok(false);
        }

        edges.push(Edge { target, weight });
        self.edge_count += 1;
        Ok(true)
    }

    /// Whether a node with this identity exists.
    pub fn contains_node<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(id)
    }

    /// Whether a directed edge from `from` to `to` exists.
    pub fn contains_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.index_of(from), self.index_of(to)) {
            (Some(source), Some(target)) => self.weight_between(source, target).is_some(),
            _ => false,
        }
    }

    /// Weight of the directed edge from `from` to `to`.
    pub fn edge_weight<Q>(&self, from: &Q, to: &Q) -> Result<W>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.index_of(from)
            .zip(self.index_of(to))
            .and_then(|(source, target)| self.weight_between(source, target))
            .ok_or_else(|| Error::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Number of stored nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored directed edges. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node identities in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> + '_ {
        self.nodes.iter().map(|node| &node.id)
    }

    /// Every directed edge as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, W)> + '_ {
        self.nodes.iter().flat_map(move |node| {
            node.edges
                .iter()
                .map(move |edge| (&node.id, self.key(edge.target), edge.weight))
        })
    }

    /// Outgoing `(target, weight)` pairs for a node, in insertion order.
    pub fn neighbours<Q>(&self, id: &Q) -> Result<Vec<(&K, W)>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let source = self.require(id)?;
        Ok(self
            .edges_from(source)
            .iter()
            .map(|edge| (self.key(edge.target), edge.weight))
            .collect())
    }

    /// Node names resembling `name`, best match first.
    ///
    /// Used to enrich unknown-node errors with "did you mean" hints.
    pub fn similar_nodes(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, String)> = self
            .nodes()
            .map(|id| id.to_string())
            .filter_map(|candidate| {
                let lowered = candidate.to_lowercase();
                let score = if !needle.is_empty() && lowered.contains(&needle) {
                    1.0
                } else {
                    strsim::jaro_winkler(&needle, &lowered)
                };
                (score >= SUGGESTION_THRESHOLD).then_some((score, candidate))
            })
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        scored.truncate(limit);
        scored.into_iter().map(|(_, name)| name).collect()
    }

    pub(crate) fn index_of<Q>(&self, id: &Q) -> Option<NodeIndex>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(id).copied()
    }

    pub(crate) fn key(&self, node: NodeIndex) -> &K {
        &self.nodes[node.0].id
    }

    pub(crate) fn edges_from(&self, node: NodeIndex) -> &[Edge<W>] {
        &self.nodes[node.0].edges
    }

    fn weight_between(&self, source: NodeIndex, target: NodeIndex) -> Option<W> {
        self.edges_from(source)
            .iter()
            .find(|edge| edge.target == target)
            .map(|edge| edge.weight)
    }

    fn require<Q>(&self, id: &Q) -> Result<NodeIndex>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.index_of(id).ok_or_else(|| Error::node_not_found(id))
    }
}
