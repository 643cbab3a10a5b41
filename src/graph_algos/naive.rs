use crate::collections::{FxHashMap, FxHashSet};
use crate::graph::Graph;

use num_traits::Zero;
use tracing::{debug, trace};


/// Shortest distance from start to end, frontier kept as a plain set
/// Every step scans the whole frontier for its cheapest node, O(V^2)
/// Slower than `dijkstra` but simple enough to check it against
#[tracing::instrument(level = "debug", skip(graph))]
pub fn dijkstra_naive<G: Graph>(graph: &G, start: &G::Node, end: &G::Node) -> Option<G::Cost> {

    let mut distance: FxHashMap<G::Node, G::Cost> = FxHashMap::default();
    let mut settled: FxHashSet<G::Node> = FxHashSet::default();
    let mut frontier: FxHashSet<G::Node> = FxHashSet::default();

    distance.insert(start.clone(), G::Cost::zero());
    frontier.insert(start.clone());

    while let Some(node) = cheapest(&frontier, &distance) {
        frontier.remove(&node);
        settled.insert(node.clone());

        // every frontier node has a distance
        let cost = distance.get(&node).copied()?;
        trace!(?node, ?cost, "settled");

        if &node == end {
            debug!(?cost, settled = settled.len(), "reached end");
            return Some(cost);
        }

        for neighbor in graph.neighbors(&node) {
            if settled.contains(&neighbor) {
                continue;
            }
            let Some(weight) = graph.weight(&node, &neighbor) else {
                continue;
            };
            let new_cost = cost + weight;

            match distance.get(&neighbor).copied() {
                None => {
                    distance.insert(neighbor.clone(), new_cost);
                    frontier.insert(neighbor);
                }
                Some(old) if new_cost < old => {
                    distance.insert(neighbor, new_cost);
                }
                Some(_) => {}
            }
        }
    }

    debug!(settled = settled.len(), "frontier exhausted");
    None
}


// linear scan, ties go to whichever node the set yields first
fn cheapest<N, C>(frontier: &FxHashSet<N>, distance: &FxHashMap<N, C>) -> Option<N>
where
    N: Eq + std::hash::Hash + Clone,
    C: Ord + Copy,
{
    frontier
        .iter()
        .filter_map(|node| distance.get(node).map(|&cost| (node, cost)))
        .min_by_key(|&(_, cost)| cost)
        .map(|(node, _)| node.clone())
}
