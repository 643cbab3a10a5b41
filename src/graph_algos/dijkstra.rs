use crate::errors::PathPlannerError;
use crate::collections::{FxHashMap, FxIndexMap};
use crate::graph::Graph;
use crate::priority_queue::IndexedPriorityQueue;

use num_traits::Zero;
use tracing::{debug, trace};


/// Shortest distance from start to end using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// The frontier is a binary heap with decrease-key, O((V + E) log V)
/// Returns Ok(None) if end can't be reached from start
#[tracing::instrument(level = "debug", skip(graph))]
pub fn dijkstra<G: Graph>(graph: &G, start: &G::Node, end: &G::Node) -> Result<Option<G::Cost>, PathPlannerError> {
    let (distance, found) = search(graph, start, Some(end))?;

    if found {
        Ok(distance.get(end).copied())
    } else {
        Ok(None)
    }
}


/// Returns the shortest distance to every node reachable from start
/// Nodes appear in the order they were settled, so costs are non-decreasing
#[tracing::instrument(level = "debug", skip(graph))]
pub fn dijkstra_distances<G: Graph>(graph: &G, start: &G::Node) -> Result<FxIndexMap<G::Node, G::Cost>, PathPlannerError> {
    let (distance, _) = search(graph, start, None)?;
    Ok(distance)
}


/// Expands the frontier until end is settled or nothing is left
/// With no end every reachable node gets settled
/// The returned map holds settled nodes only, in settlement order
fn search<G: Graph>(graph: &G, start: &G::Node, end: Option<&G::Node>) -> Result<(FxIndexMap<G::Node, G::Cost>, bool), PathPlannerError> {

    // best known distance to every discovered node
    let mut distance: FxHashMap<G::Node, G::Cost> = FxHashMap::default();

    // shortest distance is final for these, in the order they were settled
    let mut settled: FxIndexMap<G::Node, G::Cost> = FxIndexMap::default();

    // discovered but not settled, keyed by tentative distance
    let mut frontier: IndexedPriorityQueue<G::Node, G::Cost> = IndexedPriorityQueue::new();

    distance.insert(start.clone(), G::Cost::zero());
    frontier.push(start.clone(), G::Cost::zero())?;

    while let Some((node, cost)) = frontier.pop() {
        settled.insert(node.clone(), cost);
        trace!(?node, ?cost, "settled");

        if end == Some(&node) {
            debug!(?cost, settled = settled.len(), "reached end");
            return Ok((settled, true));
        }

        for neighbor in graph.neighbors(&node) {
            if settled.contains_key(&neighbor) {
                continue;
            }

            let Some(weight) = graph.weight(&node, &neighbor) else {
                trace!(?node, ?neighbor, "no weight for listed neighbor, skipping");
                continue;
            };
            let new_cost = cost + weight;

            match distance.get(&neighbor).copied() {
                None => {
                    // first time we're seeing this neighbor
                    distance.insert(neighbor.clone(), new_cost);
                    frontier.push(neighbor, new_cost)?;
                }
                Some(old) if new_cost < old => {
                    // found a better path, move it up the queue
                    frontier.update(&neighbor, new_cost)?;
                    distance.insert(neighbor, new_cost);
                }
                Some(_) => {}
            }
        }
    }

    debug!(settled = settled.len(), "frontier exhausted");
    Ok((settled, false))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UndirectedGraph;
    use crate::graph_algos::dijkstra_naive;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    // 0-1 (4), 0-2 (4), 0-3 (1), 1-3 (1), 3-4 (5)
    fn create_test_graph() -> UndirectedGraph<u32, u32> {
        UndirectedGraph::try_from_edges(vec![
            (0, 1, 4),
            (0, 2, 4),
            (0, 3, 1),
            (1, 3, 1),
            (3, 4, 5),
        ]).unwrap()
    }

    /// Directed graph backed by a map, used to exercise the trait directly
    struct DirectedGraph {
        edges: FxHashMap<&'static str, Vec<(&'static str, u64)>>,
    }

    impl DirectedGraph {
        fn new(edges: &[(&'static str, &'static str, u64)]) -> Self {
            let mut map: FxHashMap<&'static str, Vec<(&'static str, u64)>> = FxHashMap::default();
            for &(a, b, w) in edges {
                map.entry(a).or_default().push((b, w));
            }
            Self { edges: map }
        }
    }

    impl Graph for DirectedGraph {
        type Node = &'static str;
        type Cost = u64;

        fn neighbors(&self, node: &&'static str) -> Vec<&'static str> {
            self.edges.get(node).map(|e| e.iter().map(|(n, _)| *n).collect()).unwrap_or_default()
        }

        // parallel edges resolve to the first one listed
        fn weight(&self, from: &&'static str, to: &&'static str) -> Option<u64> {
            self.edges.get(from)?.iter().find(|(n, _)| n == to).map(|(_, w)| *w)
        }
    }

    #[test]
    fn test_dijkstra_through_shortcut() {
        let graph = create_test_graph();
        assert_eq!(dijkstra(&graph, &0, &1).unwrap(), Some(2)); // 0->3->1
        assert_eq!(dijkstra(&graph, &0, &4).unwrap(), Some(6)); // 0->3->4
        assert_eq!(dijkstra(&graph, &4, &2).unwrap(), Some(10)); // 4->3->0->2
    }

    #[test]
    fn test_dijkstra_start_is_end() {
        let graph = create_test_graph();
        assert_eq!(dijkstra(&graph, &2, &2).unwrap(), Some(0));

        // start doesn't need to be in the graph at all
        assert_eq!(dijkstra(&graph, &99, &99).unwrap(), Some(0));
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let mut graph = create_test_graph();
        graph.add_node(5);
        graph.add_edge(6, 7, 1).unwrap();

        assert_eq!(dijkstra(&graph, &0, &5).unwrap(), None);
        assert_eq!(dijkstra(&graph, &5, &0).unwrap(), None);
        assert_eq!(dijkstra(&graph, &0, &7).unwrap(), None);
        assert_eq!(dijkstra(&graph, &0, &42).unwrap(), None);
    }

    #[test]
    fn test_dijkstra_directed() {
        let graph = DirectedGraph::new(&[
            ("A", "B", 4),
            ("A", "C", 2),
            ("B", "C", 1),
            ("B", "D", 5),
            ("C", "D", 8),
            ("C", "E", 10),
            ("D", "E", 2),
            ("D", "F", 6),
            ("E", "F", 3),
        ]);

        assert_eq!(dijkstra(&graph, &"A", &"F").unwrap(), Some(14)); // A->B->D->E->F
        assert_eq!(dijkstra(&graph, &"F", &"A").unwrap(), None);
    }

    #[test]
    fn test_dijkstra_self_loop_and_zero_weights() {
        let graph = DirectedGraph::new(&[
            ("A", "A", 3),
            ("A", "B", 0),
            ("B", "B", 0),
            ("B", "C", 0),
            ("A", "C", 1),
        ]);

        assert_eq!(dijkstra(&graph, &"A", &"C").unwrap(), Some(0));
    }

    #[test]
    fn test_dijkstra_decrease_key_path() {
        // C is discovered at 10 from A, then improved through B
        let graph = DirectedGraph::new(&[
            ("A", "C", 10),
            ("A", "B", 1),
            ("B", "C", 2),
            ("C", "D", 1),
        ]);

        assert_eq!(dijkstra(&graph, &"A", &"D").unwrap(), Some(4));
    }

    #[test]
    fn test_dijkstra_missing_weight_is_skipped() {
        struct Broken;
        impl Graph for Broken {
            type Node = u8;
            type Cost = u32;
            fn neighbors(&self, node: &u8) -> Vec<u8> {
                match node { 0 => vec![1, 2], 2 => vec![1], _ => vec![] }
            }
            fn weight(&self, from: &u8, to: &u8) -> Option<u32> {
                match (from, to) { (0, 2) => Some(3), (2, 1) => Some(3), _ => None }
            }
        }

        assert_eq!(dijkstra(&Broken, &0, &1).unwrap(), Some(6));
    }

    #[test]
    fn test_dijkstra_distances_full() {
        let mut graph = create_test_graph();
        graph.add_node(5);

        let distances = dijkstra_distances(&graph, &0).unwrap();
        assert_eq!(distances.len(), 5);
        assert!(!distances.contains_key(&5));
        assert_eq!(distances.get(&0), Some(&0));
        assert_eq!(distances.get(&1), Some(&2));
        assert_eq!(distances.get(&2), Some(&4));
        assert_eq!(distances.get(&3), Some(&1));
        assert_eq!(distances.get(&4), Some(&6));

        // settlement order means costs never go down
        let costs: Vec<u32> = distances.values().copied().collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(distances.get_index(0), Some((&0, &0)));
    }

    #[test]
    fn test_dijkstra_matches_linear_scan() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let nodes = rng.random_range(1..25u32);
            let edges = rng.random_range(0..(nodes * 3));
            let mut graph: UndirectedGraph<u32, u32> = UndirectedGraph::new();
            for n in 0..nodes {
                graph.add_node(n);
            }
            for _ in 0..edges {
                let a = rng.random_range(0..nodes);
                let b = rng.random_range(0..nodes);
                graph.add_edge(a, b, rng.random_range(0..20)).unwrap();
            }

            let start = rng.random_range(0..nodes);
            let distances = dijkstra_distances(&graph, &start).unwrap();
            for end in 0..nodes {
                let fast = dijkstra(&graph, &start, &end).unwrap();
                let slow = dijkstra_naive(&graph, &start, &end);
                assert_eq!(fast, slow, "start {start} end {end}");
                assert_eq!(fast, distances.get(&end).copied());
            }
        }
    }
}
