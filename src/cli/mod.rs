//! Command-line layer: map file loading and command implementations.

pub mod commands;
pub mod loader;

pub use loader::{load_map, parse_line, parse_map, RoadRecord};
