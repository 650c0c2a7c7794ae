//! Fluent API for building TownGraph instances.

use crate::types::{GraphResult, Road, Town, DEFAULT_WEIGHT};

use super::TownGraph;

/// Fluent builder for constructing a TownGraph.
///
/// Towns named by a road are added automatically; errors (blank names) are
/// reported by [`build`](Self::build).
pub struct GraphBuilder {
    towns: Vec<Town>,
    roads: Vec<Road>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            towns: Vec::new(),
            roads: Vec::new(),
        }
    }

    /// Add a town with no roads.
    pub fn town(&mut self, name: &str) -> &mut Self {
        self.towns.push(Town::new(name));
        self
    }

    /// Add a road, and its towns if they are new.
    pub fn road(&mut self, source: &str, destination: &str, weight: u32, label: &str) -> &mut Self {
        let source = Town::new(source);
        let destination = Town::new(destination);
        self.towns.push(source.clone());
        self.towns.push(destination.clone());
        self.roads.push(Road::new(source, destination, weight, label));
        self
    }

    /// Add a road with the default weight.
    pub fn unit_road(&mut self, source: &str, destination: &str, label: &str) -> &mut Self {
        self.road(source, destination, DEFAULT_WEIGHT, label)
    }

    /// Build the final TownGraph.
    pub fn build(&self) -> GraphResult<TownGraph> {
        let mut graph = TownGraph::new();
        for town in &self.towns {
            graph.add_town(town.clone())?;
        }
        for road in &self.roads {
            graph.insert_road(road.clone())?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
