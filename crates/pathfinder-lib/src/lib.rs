//! Pathfinder library entry points.
//!
//! This crate stores weighted graphs keyed by caller-chosen node identities,
//! runs Dijkstra's algorithm between two nodes, and reconstructs the cheapest
//! path with its per-edge costs. Loading DOT-style edge lists and summarising
//! a graph are provided for front ends (CLI) so they do not reimplement them.
//!

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod path;
pub mod search;
pub mod stats;
pub mod weight;

pub use config::{default_graph_path, resolve_graph_path, GRAPH_ENV_VAR};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, NodeIndex};
pub use ingest::{load_graph, parse_graph, parse_into, LoadReport};
pub use path::{reconstruct, shortest_path, shortest_path_data, ShortestPath};
pub use search::{shortest_path_chain, shortest_path_cost, ChainNodes, PathChain};
pub use stats::GraphStatistics;
pub use weight::{NodeKey, Weight};
