//! Single-source shortest paths (Dijkstra) and route reconstruction.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashSet, VecDeque};

use log::{debug, trace};
use serde::Serialize;

use crate::types::{GraphResult, Road, Town, DEFAULT_DISTANCE_UNIT};

use super::town_graph::{require, TownGraph};

/// How a town was reached: the town before it and the road taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub town: Town,
    pub road: Road,
}

/// One leg of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub from: Town,
    pub road: Road,
    pub to: Town,
}

impl PathStep {
    /// Format as `"<from> via <label> to <to> <weight> <unit>"`.
    pub fn describe(&self, unit: &str) -> String {
        format!(
            "{} via {} to {} {} {}",
            self.from,
            self.road.label(),
            self.to,
            self.road.weight(),
            unit
        )
    }
}

impl std::fmt::Display for PathStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe(DEFAULT_DISTANCE_UNIT))
    }
}

/// Result of one Dijkstra run.
///
/// Holds a snapshot of the traversal; later changes to the graph do not
/// affect it, and it says nothing about the graph as changed.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: Town,
    /// Shortest known distance for every reached town.
    distances: BTreeMap<Town, u64>,
    /// Every town of the graph at run time. `None` for the source and for
    /// unreachable towns.
    predecessors: BTreeMap<Town, Option<Hop>>,
}

impl ShortestPaths {
    /// The town the run started from.
    pub fn source(&self) -> &Town {
        &self.source
    }

    /// Shortest distance from the source, or `None` if `town` was not reached.
    pub fn distance_to(&self, town: &Town) -> Option<u64> {
        self.distances.get(town).copied()
    }

    /// Whether `town` was reached from the source.
    pub fn is_reachable(&self, town: &Town) -> bool {
        self.distances.contains_key(town)
    }

    /// The hop that reached `town`. `None` for the source, unreachable towns
    /// and towns that were not in the graph.
    pub fn predecessor_of(&self, town: &Town) -> Option<&Hop> {
        self.predecessors.get(town).and_then(|hop| hop.as_ref())
    }

    /// All reached towns with their distances, in name order.
    pub fn distances(&self) -> &BTreeMap<Town, u64> {
        &self.distances
    }

    /// Walk predecessors back from `destination` and return the legs in
    /// source-to-destination order.
    ///
    /// Empty when `destination` is the source, is unreachable, or was not in
    /// the graph.
    pub fn route_to(&self, destination: &Town) -> Vec<PathStep> {
        let mut steps = VecDeque::new();
        let mut current = destination;
        while *current != self.source {
            match self.predecessors.get(current) {
                None => return Vec::new(),
                Some(None) => break,
                Some(Some(hop)) => {
                    steps.push_front(PathStep {
                        from: hop.town.clone(),
                        road: hop.road.clone(),
                        to: current.clone(),
                    });
                    current = &hop.town;
                }
            }
        }
        steps.into()
    }

    /// [`route_to`](Self::route_to), formatted one line per leg.
    pub fn describe_route(&self, destination: &Town, unit: &str) -> Vec<String> {
        self.route_to(destination)
            .iter()
            .map(|step| step.describe(unit))
            .collect()
    }
}

/// Dijkstra's algorithm from `source` over every road of `graph`.
///
/// Towns are settled in order of distance; equal distances settle in name
/// order. The run ends once no reachable unsettled town remains. A source
/// that is not in the graph reaches nothing.
pub fn dijkstra(graph: &TownGraph, source: &Town) -> GraphResult<ShortestPaths> {
    require(source, "source")?;

    let mut predecessors: BTreeMap<Town, Option<Hop>> =
        graph.towns().iter().map(|t| (t.clone(), None)).collect();
    let mut distances: BTreeMap<Town, u64> = BTreeMap::new();

    if !graph.contains_town(source) {
        debug!("source {} is not in the graph, nothing reachable", source);
        return Ok(ShortestPaths {
            source: source.clone(),
            distances,
            predecessors,
        });
    }

    let mut settled: HashSet<Town> = HashSet::new();
    let mut queue: BinaryHeap<Reverse<(u64, Town)>> = BinaryHeap::new();

    distances.insert(source.clone(), 0);
    queue.push(Reverse((0, source.clone())));

    while let Some(Reverse((distance, current))) = queue.pop() {
        // Stale queue entry: a shorter distance already settled this town.
        if !settled.insert(current.clone()) {
            continue;
        }

        for road in graph.incident(&current) {
            let Some(next) = road.other_end(&current) else {
                continue;
            };
            if settled.contains(next) {
                continue;
            }

            let candidate = distance.saturating_add(u64::from(road.weight()));
            let improves = distances.get(next).map_or(true, |&known| candidate < known);
            if improves {
                trace!("relax {} -> {} via {} = {}", current, next, road.label(), candidate);
                distances.insert(next.clone(), candidate);
                predecessors.insert(
                    next.clone(),
                    Some(Hop {
                        town: current.clone(),
                        road: road.clone(),
                    }),
                );
                queue.push(Reverse((candidate, next.clone())));
            }
        }
    }

    debug!(
        "dijkstra from {}: reached {} of {} towns",
        source,
        settled.len(),
        graph.town_count()
    );

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
    })
}
