pub mod astar;
pub mod bfs;
mod path;
pub mod result;

pub use astar::{astar_search, AStar};
pub use bfs::{breadth_first_search, BreadthFirstSearch};
pub use result::{Outcome, SearchResult};
