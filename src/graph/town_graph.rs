//! Core graph structure — towns + roads with an incidence index.

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::types::{GraphError, GraphResult, Road, Town, DEFAULT_DISTANCE_UNIT, DEFAULT_WEIGHT};

use super::shortest_path::{dijkstra, ShortestPaths};

/// An undirected road network.
///
/// Towns and roads are kept in ordered sets, so every iteration, every
/// "first match" lookup and every tie-break is deterministic: towns by name
/// ascending, roads by label descending (see [`Road`]'s ordering).
#[derive(Debug, Clone, Default)]
pub struct TownGraph {
    /// All towns.
    towns: BTreeSet<Town>,
    /// All roads. Equal roads are stored once.
    roads: BTreeSet<Road>,
    /// Incidence index: town -> roads touching it.
    incidence: HashMap<Town, BTreeSet<Road>>,
}

impl TownGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of towns.
    pub fn town_count(&self) -> usize {
        self.towns.len()
    }

    /// Number of roads.
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Whether the graph has no towns.
    pub fn is_empty(&self) -> bool {
        self.towns.is_empty()
    }

    /// All towns, in name order.
    pub fn towns(&self) -> &BTreeSet<Town> {
        &self.towns
    }

    /// All roads, in road order.
    pub fn roads(&self) -> &BTreeSet<Road> {
        &self.roads
    }

    /// Add a town. Returns `false` if an equal town is already present.
    pub fn add_town(&mut self, town: Town) -> GraphResult<bool> {
        require(&town, "town")?;
        if self.towns.contains(&town) {
            return Ok(false);
        }
        debug!("adding town {}", town);
        self.incidence.insert(town.clone(), BTreeSet::new());
        self.towns.insert(town);
        Ok(true)
    }

    /// Whether the graph contains `town`. Blank towns are never contained.
    pub fn contains_town(&self, town: &Town) -> bool {
        !town.is_blank() && self.towns.contains(town)
    }

    /// Add a road between two existing towns and return it.
    ///
    /// If an equal road is already present the graph is unchanged and the
    /// equal road is returned.
    pub fn add_road(
        &mut self,
        source: &Town,
        destination: &Town,
        weight: u32,
        label: &str,
    ) -> GraphResult<Road> {
        let road = Road::new(source.clone(), destination.clone(), weight, label);
        self.insert_road(road.clone())?;
        Ok(road)
    }

    /// Add a road with the default weight.
    pub fn add_road_default_weight(
        &mut self,
        source: &Town,
        destination: &Town,
        label: &str,
    ) -> GraphResult<Road> {
        self.add_road(source, destination, DEFAULT_WEIGHT, label)
    }

    /// Insert a prebuilt road. Returns `true` if it was not already present.
    ///
    /// Missing (blank) endpoints are reported before unknown ones.
    pub fn insert_road(&mut self, road: Road) -> GraphResult<bool> {
        require(road.source(), "source")?;
        require(road.destination(), "destination")?;
        self.require_member(road.source())?;
        self.require_member(road.destination())?;

        if !self.roads.insert(road.clone()) {
            return Ok(false);
        }
        debug!("adding road {}", road);
        for town in [road.source(), road.destination()] {
            self.incidence
                .entry(town.clone())
                .or_default()
                .insert(road.clone());
        }
        Ok(true)
    }

    /// Whether any road joins `a` and `b`, in either order.
    pub fn contains_road(&self, a: &Town, b: &Town) -> bool {
        self.get_road(a, b).is_some()
    }

    /// The first road (in road order) joining `a` and `b`, in either order.
    pub fn get_road(&self, a: &Town, b: &Town) -> Option<&Road> {
        if a.is_blank() || b.is_blank() {
            return None;
        }
        self.incidence.get(a)?.iter().find(|r| r.connects(a, b))
    }

    /// All roads touching `town`, in road order.
    pub fn roads_of(&self, town: &Town) -> GraphResult<Vec<&Road>> {
        require(town, "town")?;
        self.require_member(town)?;
        Ok(self.incident(town).collect())
    }

    /// Distinct towns one road away from `town`, in name order.
    pub fn neighbors(&self, town: &Town) -> GraphResult<Vec<&Town>> {
        let found: BTreeSet<&Town> = self
            .roads_of(town)?
            .into_iter()
            .filter_map(|r| r.other_end(town))
            .collect();
        Ok(found.into_iter().collect())
    }

    /// Remove the road equal to `(source, destination, weight, label)`.
    ///
    /// Returns `None` if either town is not in the graph or no such road
    /// exists.
    pub fn remove_road(
        &mut self,
        source: &Town,
        destination: &Town,
        weight: u32,
        label: &str,
    ) -> Option<Road> {
        if !self.contains_town(source) || !self.contains_town(destination) {
            return None;
        }
        let candidate = Road::new(source.clone(), destination.clone(), weight, label);
        let removed = self.roads.take(&candidate)?;
        for town in [removed.source(), removed.destination()] {
            if let Some(roads) = self.incidence.get_mut(town) {
                roads.remove(&removed);
            }
        }
        debug!("removed road {}", removed);
        Some(removed)
    }

    /// Remove a town and every road touching it.
    ///
    /// Returns `false` (and leaves the graph unchanged) if the town is not
    /// present.
    pub fn remove_town(&mut self, town: &Town) -> bool {
        if !self.contains_town(town) {
            return false;
        }
        let touching = self.incidence.remove(town).unwrap_or_default();
        for road in &touching {
            self.roads.remove(road);
            if let Some(other) = road.other_end(town) {
                if let Some(roads) = self.incidence.get_mut(other) {
                    roads.remove(road);
                }
            }
        }
        self.towns.remove(town);
        debug!("removed town {} with {} roads", town, touching.len());
        true
    }

    /// Run Dijkstra's algorithm from `source`.
    pub fn shortest_paths(&self, source: &Town) -> GraphResult<ShortestPaths> {
        dijkstra(self, source)
    }

    /// Describe the shortest route from `source` to `destination`, one line
    /// per road, e.g. `"A via R1 to B 5 mi"`. Empty if there is no route.
    pub fn shortest_path(&self, source: &Town, destination: &Town) -> GraphResult<Vec<String>> {
        require(source, "source")?;
        require(destination, "destination")?;
        let paths = self.shortest_paths(source)?;
        Ok(paths.describe_route(destination, DEFAULT_DISTANCE_UNIT))
    }

    /// Roads touching `town`; empty for unknown towns.
    pub(crate) fn incident<'a>(&'a self, town: &Town) -> impl Iterator<Item = &'a Road> + 'a {
        self.incidence.get(town).into_iter().flatten()
    }

    fn require_member(&self, town: &Town) -> GraphResult<()> {
        if self.towns.contains(town) {
            Ok(())
        } else {
            Err(GraphError::UnknownTown(town.name().to_string()))
        }
    }
}

/// Reject a blank town as a missing argument.
pub(crate) fn require(town: &Town, role: &'static str) -> GraphResult<()> {
    if town.is_blank() {
        Err(GraphError::MissingTown { role })
    } else {
        Ok(())
    }
}
