//! Criterion benchmarks for the town graph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use town_graph::graph::{GraphBuilder, TownGraph};
use town_graph::types::Town;

/// Build a random road network with roughly `roads_per_town` roads per town.
fn make_large_graph(town_count: usize, roads_per_town: usize) -> TownGraph {
    let mut rng = rand::thread_rng();
    let mut builder = GraphBuilder::new();
    for i in 0..town_count {
        builder.town(&format!("town_{}", i));
    }
    for i in 0..town_count {
        for j in 0..roads_per_town {
            let other = rng.gen_range(0..town_count);
            builder.road(
                &format!("town_{}", i),
                &format!("town_{}", other),
                rng.gen_range(1..500),
                &format!("road_{}_{}", i, j),
            );
        }
    }
    builder.build().expect("benchmark graph")
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = make_large_graph(1_000, 4);
    let source = Town::new("town_0");
    c.bench_function("dijkstra_1k_towns", |b| {
        b.iter(|| graph.shortest_paths(&source).unwrap())
    });

    let graph = make_large_graph(10_000, 4);
    c.bench_function("dijkstra_10k_towns", |b| {
        b.iter(|| graph.shortest_paths(&source).unwrap())
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = make_large_graph(1_000, 4);
    let source = Town::new("town_0");
    let destination = Town::new("town_999");
    c.bench_function("shortest_path_1k_towns", |b| {
        b.iter(|| graph.shortest_path(&source, &destination).unwrap())
    });
}

fn bench_mutation(c: &mut Criterion) {
    c.bench_function("build_1k_towns", |b| b.iter(|| make_large_graph(1_000, 4)));

    let graph = make_large_graph(1_000, 4);
    c.bench_function("remove_town_1k_towns", |b| {
        b.iter(|| {
            let mut g = graph.clone();
            g.remove_town(&Town::new("town_500"))
        })
    });
}

criterion_group!(benches, bench_dijkstra, bench_shortest_path, bench_mutation);
criterion_main!(benches);
