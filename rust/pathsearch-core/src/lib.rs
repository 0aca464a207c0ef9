//! Generic graph search: a comparator-driven binary heap, a priority queue
//! on top of it, and A* / breadth-first search over caller-supplied graphs.
//!
//! Graphs are never stored here. A search sees a graph only through
//! [`Graph::neighbors`], [`WeightedGraph::cost`] and
//! [`WeightedGraph::heuristic`], either implemented on the caller's type or
//! supplied as closures via [`FnGraph`].

pub mod cancel;
pub mod error;
pub mod graph;
pub mod heap;
pub mod heuristics;
pub mod options;
pub mod priority_queue;
pub mod search;

pub use cancel::CancelToken;
pub use error::OptionsError;
pub use graph::{Cost, FnGraph, Graph, WeightedGraph};
pub use heap::{BinaryHeap, Compare, MaxFirst, MinFirst};
pub use options::{PriorityCombine, SearchOptions};
pub use priority_queue::PriorityQueue;
pub use search::{astar_search, breadth_first_search, AStar, BreadthFirstSearch, Outcome, SearchResult};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
