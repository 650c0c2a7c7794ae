//! In-memory road network and route finding.

pub mod builder;
pub mod shortest_path;
pub mod town_graph;

pub use builder::GraphBuilder;
pub use shortest_path::{dijkstra, Hop, PathStep, ShortestPaths};
pub use town_graph::TownGraph;
