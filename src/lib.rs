//! Town graph — an undirected, weighted road network with shortest-route
//! queries.
//!
//! Towns are connected by named roads of non-negative length. The graph
//! answers "what is the shortest route from A to B, and via which roads".

pub mod cli;
pub mod config;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{Config, OutputFormat};
pub use graph::{dijkstra, GraphBuilder, Hop, PathStep, ShortestPaths, TownGraph};
pub use types::{GraphError, GraphResult, Road, Town, DEFAULT_DISTANCE_UNIT, DEFAULT_WEIGHT};
