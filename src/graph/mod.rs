//! Word adjacency graph and shortest-ladder search
//!
//! The adjacency map is built once per dictionary and then shared read-only by
//! any number of path queries, each of which owns its own search state.

mod adjacency;
mod search;

pub use adjacency::AdjacencyMap;
pub use search::{Ladder, SearchState, shortest_path};
