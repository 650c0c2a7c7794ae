//! CLI command implementations.

use std::path::Path;

use crate::config::Config;
use crate::graph::TownGraph;
use crate::types::{GraphError, GraphResult, Road, Town};

use super::loader::load_map;

/// Print the shortest route between two towns.
pub fn cmd_route(path: &Path, from: &str, to: &str, unit: &str, json: bool) -> GraphResult<()> {
    let graph = load_map(path)?;
    print!("{}", route_report(&graph, from, to, unit, json)?);
    Ok(())
}

/// Render the shortest route between two towns as text lines or a JSON
/// document. Text output ends with a total, or reads `No route from ..`.
pub fn route_report(
    graph: &TownGraph,
    from: &str,
    to: &str,
    unit: &str,
    json: bool,
) -> GraphResult<String> {
    let from = known_town(graph, from, "source")?;
    let to = known_town(graph, to, "destination")?;

    let paths = graph.shortest_paths(&from)?;
    let steps = paths.route_to(&to);
    let total = paths.distance_to(&to);

    let mut out = String::new();
    if json {
        let legs: Vec<serde_json::Value> = steps
            .iter()
            .map(|s| {
                serde_json::json!({
                    "from": s.from,
                    "to": s.to,
                    "road": s.road.label(),
                    "weight": s.road.weight(),
                })
            })
            .collect();
        let info = serde_json::json!({
            "from": from,
            "to": to,
            "reachable": total.is_some(),
            "distance": total,
            "unit": unit,
            "legs": legs,
        });
        out.push_str(&serde_json::to_string_pretty(&info).unwrap_or_default());
        out.push('\n');
    } else {
        match total {
            Some(total) => {
                for step in &steps {
                    out.push_str(&step.describe(unit));
                    out.push('\n');
                }
                out.push_str(&format!("Total: {} {}\n", total, unit));
            }
            None => out.push_str(&format!("No route from {} to {}\n", from, to)),
        }
    }
    Ok(out)
}

/// List all towns.
pub fn cmd_towns(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_map(path)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(graph.towns()).unwrap_or_default()
        );
    } else {
        for town in graph.towns() {
            println!("{}", town);
        }
    }
    Ok(())
}

/// List all roads, or the roads touching one town.
pub fn cmd_roads(path: &Path, town: Option<&str>, json: bool) -> GraphResult<()> {
    let graph = load_map(path)?;
    let roads: Vec<&Road> = match town {
        Some(name) => {
            let town = known_town(&graph, name, "town")?;
            graph.roads_of(&town)?
        }
        None => graph.roads().iter().collect(),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&roads).unwrap_or_default()
        );
    } else {
        for road in roads {
            println!("{}", road);
        }
    }
    Ok(())
}

/// Display counts for a map file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_map(path)?;
    let isolated = graph
        .towns()
        .iter()
        .filter(|t| graph.incident(t).next().is_none())
        .count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "towns": graph.town_count(),
            "roads": graph.road_count(),
            "isolated_towns": isolated,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Towns: {}", graph.town_count());
        println!("Roads: {}", graph.road_count());
        println!("Isolated towns: {}", isolated);
    }
    Ok(())
}

/// Export the graph as JSON.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    let graph = load_map(path)?;
    let export = serde_json::json!({
        "towns": graph.towns(),
        "roads": graph.roads(),
    });
    let text = if pretty {
        serde_json::to_string_pretty(&export)
    } else {
        serde_json::to_string(&export)
    };
    println!("{}", text.unwrap_or_default());
    Ok(())
}

/// Print the effective configuration as TOML.
pub fn cmd_config(config: &Config) -> GraphResult<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

fn known_town(graph: &TownGraph, name: &str, role: &'static str) -> GraphResult<Town> {
    let town = Town::new(name);
    if town.is_blank() {
        return Err(GraphError::MissingTown { role });
    }
    if !graph.contains_town(&town) {
        return Err(GraphError::UnknownTown(town.name().to_string()));
    }
    Ok(town)
}
