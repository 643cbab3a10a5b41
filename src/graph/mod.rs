use crate::collections::FxIndexMap;
use crate::errors::GraphError;

use std::{hash::Hash, fmt::Debug};
use num_traits::Zero;


/// Read-only view of a weighted graph, supplied by the caller
/// The engine only calls `weight` for pairs returned by `neighbors`
/// Weights must be non-negative, the engine does not check this
pub trait Graph {
    type Node: Eq + Hash + Clone + Debug;
    type Cost: Zero + Ord + Copy + Debug;

    /// Nodes reachable from `node` over a single edge
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Weight of the edge `from -> to`, None if there is no such edge
    fn weight(&self, from: &Self::Node, to: &Self::Node) -> Option<Self::Cost>;
}


/// Undirected graph stored as an adjacency list
/// Neighbors come back in the order their edges were added
#[derive(Clone, Debug)]
pub struct UndirectedGraph<N, C> {
    adjacency: FxIndexMap<N, FxIndexMap<N, C>>,
    edges: usize,
}

impl<N, C> Default for UndirectedGraph<N, C> {
    fn default() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            edges: 0,
        }
    }
}

impl<N, C> UndirectedGraph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from (a, b, weight) triples
    pub fn try_from_edges<I>(edges: I) -> Result<Self, GraphError>
    where I: IntoIterator<Item = (N, N, C)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Add an isolated node, no-op if it already exists
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an edge in both directions
    /// Adding the same edge twice keeps the lower weight
    pub fn add_edge(&mut self, a: N, b: N, weight: C) -> Result<(), GraphError> {
        if weight < C::zero() {
            return Err(GraphError::NegativeWeight(format!("{a:?} - {b:?} ({weight:?})")));
        }

        let inserted = Self::insert_half(&mut self.adjacency, a.clone(), b.clone(), weight);
        if a != b {
            Self::insert_half(&mut self.adjacency, b, a, weight);
        }
        if inserted {
            self.edges += 1;
        }
        Ok(())
    }

    // returns true if the edge is new
    fn insert_half(adjacency: &mut FxIndexMap<N, FxIndexMap<N, C>>, from: N, to: N, weight: C) -> bool {
        let targets = adjacency.entry(from).or_default();
        match targets.get_mut(&to) {
            Some(existing) => {
                if weight < *existing {
                    *existing = weight;
                }
                false
            }
            None => {
                targets.insert(to.clone(), weight);
                // make sure the far end shows up in nodes() even for self loops
                adjacency.entry(to).or_default();
                true
            }
        }
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }
}

impl<N, C> Graph for UndirectedGraph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{
    type Node = N;
    type Cost = C;

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.adjacency
            .get(node)
            .map(|targets| targets.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn weight(&self, from: &N, to: &N) -> Option<C> {
        self.adjacency.get(from)?.get(to).copied()
    }
}
