//! Dijkstra search over a [`Graph`] with a lazy-deletion frontier.
//!
//! Every relaxation that improves a node's best-known cost pushes a fresh
//! search entry rather than decreasing a key in place. Entries are stored in
//! an append-only arena and link to their predecessor by slot, so many entries
//! can share a common ancestry without any of them being mutated.
//!
//! Frontier ties (equal cumulative cost) are broken by push order: the entry
//! created first is popped first, which keeps results reproducible.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};
use crate::weight::{NodeKey, Weight};

/// Number of "did you mean" hints attached to unknown-node errors.
const MAX_SUGGESTIONS: usize = 3;

/// Node reached during a search together with the cost of reaching it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SearchEntry<W> {
    node: NodeIndex,
    cost: W,
    predecessor: Option<usize>,
}

/// Predecessor chain produced by a successful search.
///
/// The chain starts at the goal entry and follows predecessor links back to
/// the root entry for the start node. Use [`crate::path::reconstruct`] to turn
/// it into a start-to-goal [`ShortestPath`](crate::path::ShortestPath).
#[derive(Debug, Clone)]
pub struct PathChain<W> {
    entries: Vec<SearchEntry<W>>,
    terminal: usize,
}

impl<W: Weight> PathChain<W> {
    /// Cumulative cost recorded on the goal entry.
    pub fn cost(&self) -> W {
        self.entries[self.terminal].cost
    }

    /// Nodes from the goal back to the start.
    pub fn nodes_from_goal(&self) -> ChainNodes<'_, W> {
        ChainNodes {
            entries: &self.entries,
            next: Some(self.terminal),
        }
    }

    /// Number of nodes on the chain, including both endpoints.
    pub fn len(&self) -> usize {
        self.nodes_from_goal().count()
    }

    /// A chain always holds at least its start node.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Iterator walking a [`PathChain`] from the goal towards the start.
#[derive(Debug, Clone)]
pub struct ChainNodes<'a, W> {
    entries: &'a [SearchEntry<W>],
    next: Option<usize>,
}

impl<W: Copy> Iterator for ChainNodes<'_, W> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries[self.next?];
        self.next = entry.predecessor;
        Some(entry.node)
    }
}

#[derive(Copy, Clone, Debug)]
struct FrontierEntry<W> {
    cost: W,
    slot: usize,
}

impl<W: Weight> PartialEq for FrontierEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for FrontierEntry<W> {}

impl<W: Weight> Ord for FrontierEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // push order.
        other
            .cost
            .order(&self.cost)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl<W: Weight> PartialOrd for FrontierEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
struct SearchStats {
    popped: usize,
    pushed: usize,
    stale: usize,
    overflowed: usize,
}

/// Run Dijkstra's algorithm from `start` to `goal` and return the predecessor
/// chain of the cheapest path.
///
/// Fails with [`Error::InvalidArgument`] for a blank identity and with
/// [`Error::NodeNotFound`] when either endpoint is absent, before any search
/// work happens. [`Error::PathNotFound`] is only returned once every node
/// reachable from `start` has been explored.
///
/// Weights are expected to be non-negative; the search does not check.
/// Relaxations whose cumulative cost overflows the weight type are skipped,
/// so a goal reachable only through such sums is reported as
/// [`Error::PathNotFound`].
pub fn shortest_path_chain<K, W, Q>(
    graph: &Graph<K, W>,
    start: &Q,
    goal: &Q,
) -> Result<PathChain<W>>
where
    K: NodeKey + Borrow<Q>,
    W: Weight,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    let start_node = resolve_endpoint(graph, start)?;
    let goal_node = resolve_endpoint(graph, goal)?;

    let mut entries = vec![SearchEntry {
        node: start_node,
        cost: W::ZERO,
        predecessor: None,
    }];

    if start_node == goal_node {
        return Ok(PathChain {
            entries,
            terminal: 0,
        });
    }

    let mut best_known: HashMap<NodeIndex, W> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut stats = SearchStats::default();

    best_known.insert(start_node, W::ZERO);
    frontier.push(FrontierEntry {
        cost: W::ZERO,
        slot: 0,
    });

    while let Some(FrontierEntry { cost, slot }) = frontier.pop() {
        stats.popped += 1;
        let current = entries[slot];

        // A cheaper entry for this node was pushed after this one.
        if best_known
            .get(&current.node)
            .is_some_and(|best| best.order(&cost) == Ordering::Less)
        {
            stats.stale += 1;
            continue;
        }

        if current.node == goal_node {
            debug!(
                start = %start,
                goal = %goal,
                popped = stats.popped,
                pushed = stats.pushed,
                stale = stats.stale,
                "shortest path found"
            );
            return Ok(PathChain {
                entries,
                terminal: slot,
            });
        }

        for edge in graph.edges_from(current.node) {
            // A cost past the weight type's range cannot lie on a cheapest
            // representable path, so the edge is not relaxed.
            let Some(candidate) = cost.checked_add(edge.weight) else {
                stats.overflowed += 1;
                continue;
            };
            let improves = match best_known.get(&edge.target) {
                Some(best) => candidate.order(best) == Ordering::Less,
                None => true,
            };
            if !improves {
                continue;
            }

            best_known.insert(edge.target, candidate);
            let next_slot = entries.len();
            entries.push(SearchEntry {
                node: edge.target,
                cost: candidate,
                predecessor: Some(slot),
            });
            frontier.push(FrontierEntry {
                cost: candidate,
                slot: next_slot,
            });
            stats.pushed += 1;
        }
    }

    debug!(
        start = %start,
        goal = %goal,
        explored = best_known.len(),
        popped = stats.popped,
        overflowed = stats.overflowed,
        "frontier exhausted without reaching goal"
    );
    Err(Error::PathNotFound {
        start: start.to_string(),
        goal: goal.to_string(),
    })
}

/// Total cost of the cheapest path from `start` to `goal`.
pub fn shortest_path_cost<K, W, Q>(graph: &Graph<K, W>, start: &Q, goal: &Q) -> Result<W>
where
    K: NodeKey + Borrow<Q>,
    W: Weight,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    shortest_path_chain(graph, start, goal).map(|chain| chain.cost())
}

fn resolve_endpoint<K, W, Q>(graph: &Graph<K, W>, id: &Q) -> Result<NodeIndex>
where
    K: NodeKey + Borrow<Q>,
    W: Weight,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    let rendered = id.to_string();
    if rendered.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "node identity must not be blank".to_string(),
        });
    }

    graph.index_of(id).ok_or_else(|| Error::NodeNotFound {
        suggestions: graph.similar_nodes(&rendered, MAX_SUGGESTIONS),
        node: rendered,
    })
}
