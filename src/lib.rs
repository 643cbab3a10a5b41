//! Single source to target shortest paths over non-negative weighted graphs
//!
//! ```
//! use dijkstras::{dijkstra, UndirectedGraph};
//!
//! let graph = UndirectedGraph::try_from_edges(vec![(0, 1, 4), (0, 3, 1), (1, 3, 1)]).unwrap();
//! assert_eq!(dijkstra(&graph, &0, &1).unwrap(), Some(2));
//! ```

pub mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod priority_queue;

pub use errors::{GraphError, PathPlannerError, QueueError};
pub use graph::{Graph, UndirectedGraph};
pub use graph_algos::{Frontier, dijkstra, dijkstra_distances, dijkstra_naive, shortest_path};
pub use priority_queue::IndexedPriorityQueue;
