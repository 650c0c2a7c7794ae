//! Phase 2 tests: TownGraph bookkeeping.

use town_graph::graph::{GraphBuilder, TownGraph};
use town_graph::types::{GraphError, Road, Town};

fn t(name: &str) -> Town {
    Town::new(name)
}

fn graph_with(names: &[&str]) -> TownGraph {
    let mut graph = TownGraph::new();
    for name in names {
        graph.add_town(t(name)).unwrap();
    }
    graph
}

// ==================== Town Tests ====================

#[test]
fn test_add_town_once() {
    let mut graph = TownGraph::new();
    assert!(!graph.contains_town(&t("A")));
    assert!(graph.add_town(t("A")).unwrap());
    assert!(graph.contains_town(&t("A")));
    assert!(!graph.add_town(t("A")).unwrap());
    assert_eq!(graph.town_count(), 1);
}

#[test]
fn test_add_blank_town_rejected() {
    let mut graph = TownGraph::new();
    match graph.add_town(t("")) {
        Err(GraphError::MissingTown { .. }) => {}
        other => panic!("Expected MissingTown, got {:?}", other),
    }
    assert!(graph.is_empty());
}

#[test]
fn test_contains_blank_town_is_false() {
    let graph = graph_with(&["A"]);
    assert!(!graph.contains_town(&t("")));
    assert!(!graph.contains_town(&t(" ")));
}

#[test]
fn test_towns_in_name_order() {
    let graph = graph_with(&["C", "A", "B"]);
    let names: Vec<&str> = graph.towns().iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

// ==================== Road Tests ====================

#[test]
fn test_add_road_is_undirected() {
    let mut graph = graph_with(&["A", "B"]);
    let road = graph.add_road(&t("A"), &t("B"), 5, "R1").unwrap();
    assert_eq!(road, Road::new(t("A"), t("B"), 5, "R1"));
    assert!(graph.contains_road(&t("A"), &t("B")));
    assert!(graph.contains_road(&t("B"), &t("A")));
    assert_eq!(graph.road_count(), 1);
}

#[test]
fn test_add_road_default_weight() {
    let mut graph = graph_with(&["A", "B"]);
    let road = graph.add_road_default_weight(&t("A"), &t("B"), "R1").unwrap();
    assert_eq!(road.weight(), 1);
}

#[test]
fn test_add_road_unknown_town() {
    let mut graph = graph_with(&["A"]);
    match graph.add_road(&t("A"), &t("Z"), 5, "R1") {
        Err(GraphError::UnknownTown(name)) => assert_eq!(name, "Z"),
        other => panic!("Expected UnknownTown, got {:?}", other),
    }
    assert_eq!(graph.road_count(), 0);
}

#[test]
fn test_add_road_blank_town() {
    let mut graph = graph_with(&["A"]);
    match graph.add_road(&t(""), &t("A"), 5, "R1") {
        Err(GraphError::MissingTown { role }) => assert_eq!(role, "source"),
        other => panic!("Expected MissingTown, got {:?}", other),
    }
}

#[test]
fn test_missing_reported_before_unknown() {
    // Destination is blank and source is unknown: the blank argument wins.
    let mut graph = graph_with(&["A"]);
    match graph.add_road(&t("Z"), &t(""), 5, "R1") {
        Err(GraphError::MissingTown { role }) => assert_eq!(role, "destination"),
        other => panic!("Expected MissingTown, got {:?}", other),
    }
}

#[test]
fn test_duplicate_road_stored_once() {
    let mut graph = graph_with(&["A", "B"]);
    graph.add_road(&t("A"), &t("B"), 5, "R1").unwrap();
    let again = graph.add_road(&t("B"), &t("A"), 5, "R1").unwrap();
    assert!(graph.contains_road(&t("A"), &t("B")));
    assert_eq!(again, Road::new(t("A"), t("B"), 5, "R1"));
    assert_eq!(graph.road_count(), 1);
    assert!(!graph
        .insert_road(Road::new(t("A"), t("B"), 5, "R1"))
        .unwrap());
}

#[test]
fn test_parallel_roads_coexist() {
    let mut graph = graph_with(&["A", "B"]);
    graph.add_road(&t("A"), &t("B"), 5, "R1").unwrap();
    graph.add_road(&t("A"), &t("B"), 7, "R1").unwrap();
    graph.add_road(&t("A"), &t("B"), 5, "R2").unwrap();
    assert_eq!(graph.road_count(), 3);
    assert_eq!(graph.roads_of(&t("A")).unwrap().len(), 3);
}

#[test]
fn test_get_road() {
    let mut graph = graph_with(&["A", "B", "C"]);
    graph.add_road(&t("A"), &t("B"), 5, "R1").unwrap();

    let road = graph.get_road(&t("B"), &t("A")).unwrap();
    assert_eq!(road.label(), "R1");
    assert!(graph.get_road(&t("A"), &t("C")).is_none());
    assert!(graph.get_road(&t(""), &t("A")).is_none());
    assert!(graph.get_road(&t("A"), &t("Nowhere")).is_none());
}

#[test]
fn test_get_road_picks_first_in_road_order() {
    let mut graph = graph_with(&["A", "B"]);
    graph.add_road(&t("A"), &t("B"), 5, "Alpha").unwrap();
    graph.add_road(&t("A"), &t("B"), 5, "Zulu").unwrap();
    // Labels sort descending.
    assert_eq!(graph.get_road(&t("A"), &t("B")).unwrap().label(), "Zulu");
}

#[test]
fn test_contains_road_unknown_towns() {
    let graph = graph_with(&["A"]);
    assert!(!graph.contains_road(&t("A"), &t("B")));
    assert!(!graph.contains_road(&t("X"), &t("Y")));
}

#[test]
fn test_roads_of() {
    let mut graph = graph_with(&["A", "B", "C", "D"]);
    graph.add_road(&t("A"), &t("B"), 1, "AB").unwrap();
    graph.add_road(&t("C"), &t("A"), 1, "CA").unwrap();
    graph.add_road(&t("B"), &t("C"), 1, "BC").unwrap();

    let labels: Vec<&str> = graph
        .roads_of(&t("A"))
        .unwrap()
        .iter()
        .map(|r| r.label())
        .collect();
    assert_eq!(labels, vec!["CA", "AB"]);
    assert!(graph.roads_of(&t("D")).unwrap().is_empty());
}

#[test]
fn test_roads_of_errors() {
    let graph = graph_with(&["A"]);
    assert!(matches!(
        graph.roads_of(&t("Z")),
        Err(GraphError::UnknownTown(_))
    ));
    assert!(matches!(
        graph.roads_of(&t("")),
        Err(GraphError::MissingTown { .. })
    ));
}

#[test]
fn test_neighbors_are_distinct() {
    let mut graph = graph_with(&["A", "B", "C"]);
    graph.add_road(&t("A"), &t("C"), 1, "R1").unwrap();
    graph.add_road(&t("A"), &t("B"), 1, "R2").unwrap();
    graph.add_road(&t("A"), &t("B"), 2, "R3").unwrap();
    let neighbors = graph.neighbors(&t("A")).unwrap();
    assert_eq!(neighbors, vec![&t("B"), &t("C")]);
}

// ==================== Removal Tests ====================

#[test]
fn test_remove_road() {
    let mut graph = graph_with(&["A", "B"]);
    graph.add_road(&t("A"), &t("B"), 5, "R1").unwrap();

    let removed = graph.remove_road(&t("B"), &t("A"), 5, "R1").unwrap();
    assert_eq!(removed.label(), "R1");
    assert!(!graph.contains_road(&t("A"), &t("B")));
    assert!(graph.roads_of(&t("A")).unwrap().is_empty());
    assert!(graph.roads_of(&t("B")).unwrap().is_empty());
}

#[test]
fn test_remove_road_requires_exact_match() {
    let mut graph = graph_with(&["A", "B"]);
    graph.add_road(&t("A"), &t("B"), 5, "R1").unwrap();
    assert!(graph.remove_road(&t("A"), &t("B"), 6, "R1").is_none());
    assert!(graph.remove_road(&t("A"), &t("B"), 5, "R2").is_none());
    assert_eq!(graph.road_count(), 1);
}

#[test]
fn test_remove_road_unknown_town() {
    let mut graph = graph_with(&["A", "B"]);
    graph.add_road(&t("A"), &t("B"), 5, "R1").unwrap();
    assert!(graph.remove_road(&t("A"), &t("Z"), 5, "R1").is_none());
    assert!(graph.remove_road(&t(""), &t("B"), 5, "R1").is_none());
    assert_eq!(graph.road_count(), 1);
}

#[test]
fn test_remove_town_removes_its_roads() {
    let mut graph = graph_with(&["A", "B", "C"]);
    graph.add_road(&t("A"), &t("B"), 1, "AB").unwrap();
    graph.add_road(&t("B"), &t("C"), 1, "BC").unwrap();
    graph.add_road(&t("A"), &t("C"), 1, "AC").unwrap();

    assert!(graph.remove_town(&t("B")));
    assert!(!graph.contains_town(&t("B")));
    assert_eq!(graph.road_count(), 1);
    for survivor in [t("A"), t("C")] {
        for road in graph.roads_of(&survivor).unwrap() {
            assert!(!road.contains(&t("B")));
        }
    }
    assert!(graph.contains_road(&t("A"), &t("C")));
}

#[test]
fn test_remove_town_absent() {
    let mut graph = graph_with(&["A"]);
    assert!(!graph.remove_town(&t("Z")));
    assert!(!graph.remove_town(&t("")));
    assert_eq!(graph.town_count(), 1);
}

#[test]
fn test_remove_town_with_self_loop() {
    let mut graph = graph_with(&["A", "B"]);
    graph.add_road(&t("A"), &t("A"), 3, "Loop").unwrap();
    graph.add_road(&t("A"), &t("B"), 3, "AB").unwrap();
    assert!(graph.remove_town(&t("A")));
    assert_eq!(graph.road_count(), 0);
    assert!(graph.roads_of(&t("B")).unwrap().is_empty());
}

#[test]
fn test_readd_town_after_removal_has_no_roads() {
    let mut graph = graph_with(&["A", "B"]);
    graph.add_road(&t("A"), &t("B"), 1, "AB").unwrap();
    graph.remove_town(&t("A"));
    graph.add_town(t("A")).unwrap();
    assert!(graph.roads_of(&t("A")).unwrap().is_empty());
    assert!(!graph.contains_road(&t("A"), &t("B")));
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_adds_towns_from_roads() {
    let graph = GraphBuilder::new()
        .road("A", "B", 5, "R1")
        .unit_road("B", "C", "R2")
        .town("D")
        .build()
        .unwrap();
    assert_eq!(graph.town_count(), 4);
    assert_eq!(graph.road_count(), 2);
    assert_eq!(graph.get_road(&t("C"), &t("B")).unwrap().weight(), 1);
}

#[test]
fn test_builder_rejects_blank_town() {
    let result = GraphBuilder::new().road("A", " ", 5, "R1").build();
    assert!(matches!(result, Err(GraphError::MissingTown { .. })));
}
