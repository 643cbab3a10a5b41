mod dijkstra;
mod naive;

pub use dijkstra::{dijkstra, dijkstra_distances};
pub use naive::dijkstra_naive;

use crate::errors::PathPlannerError;
use crate::graph::Graph;


/// How the engine keeps track of discovered but unsettled nodes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Frontier {
    /// Unordered set, scanned for the minimum on every step
    LinearScan,
    /// Binary heap with decrease-key
    #[default]
    BinaryHeap,
}

/// Shortest distance from start to end using the chosen frontier
/// Returns Ok(None) if end can't be reached from start
pub fn shortest_path<G: Graph>(graph: &G, start: &G::Node, end: &G::Node, frontier: Frontier) -> Result<Option<G::Cost>, PathPlannerError> {
    match frontier {
        Frontier::LinearScan => Ok(dijkstra_naive(graph, start, end)),
        Frontier::BinaryHeap => dijkstra(graph, start, end),
    }
}
