//! Reads road-map text files into a TownGraph.
//!
//! One road per line: `<label>,<weight>;<town>;<town>`, for example
//! `I-94,282;Chicago;Detroit`. The `,<weight>` part may be left out, in
//! which case the road gets the default weight. Blank lines and lines
//! starting with `#` are ignored.

use std::path::Path;

use log::debug;

use crate::graph::{GraphBuilder, TownGraph};
use crate::types::{GraphError, GraphResult, DEFAULT_WEIGHT};

/// A parsed map line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadRecord {
    pub label: String,
    pub weight: u32,
    pub source: String,
    pub destination: String,
}

/// Read a map file into a graph.
pub fn load_map(path: &Path) -> GraphResult<TownGraph> {
    let text = std::fs::read_to_string(path)?;
    let graph = parse_map(&text)?;
    debug!(
        "loaded {}: {} towns, {} roads",
        path.display(),
        graph.town_count(),
        graph.road_count()
    );
    Ok(graph)
}

/// Parse map text into a graph.
pub fn parse_map(text: &str) -> GraphResult<TownGraph> {
    let mut builder = GraphBuilder::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(record) = parse_line(line, index + 1)? {
            builder.road(
                &record.source,
                &record.destination,
                record.weight,
                &record.label,
            );
        }
    }
    builder.build()
}

/// Parse one line. Returns `None` for blank and comment lines.
pub fn parse_line(line: &str, line_no: usize) -> GraphResult<Option<RoadRecord>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    let [road, source, destination] = fields.as_slice() else {
        return Err(parse_error(
            line_no,
            format!("expected 3 ';'-separated fields, found {}", fields.len()),
        ));
    };

    let (label, weight) = match road.split_once(',') {
        Some((label, weight)) => {
            let weight = weight.trim().parse::<u32>().map_err(|_| {
                parse_error(line_no, format!("invalid weight {:?}", weight.trim()))
            })?;
            (label.trim(), weight)
        }
        None => (*road, DEFAULT_WEIGHT),
    };

    if label.is_empty() {
        return Err(parse_error(line_no, "missing road label"));
    }
    if source.is_empty() || destination.is_empty() {
        return Err(parse_error(line_no, "missing town name"));
    }

    Ok(Some(RoadRecord {
        label: label.to_string(),
        weight,
        source: source.to_string(),
        destination: destination.to_string(),
    }))
}

fn parse_error(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::Parse {
        line,
        message: message.into(),
    }
}
