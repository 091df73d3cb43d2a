//! Integration tests for railhop queries
//!
//! End-to-end scenarios through the text form, plus a comparison of the
//! layered search against a plain distance-array BFS on random networks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use railhop::{GraphBuilder, LayeredBfs, Network, Outcome, RailGraph, SolverConfig};
use std::collections::VecDeque;

/// Reference BFS with an explicit distance array
fn bfs_distance(graph: &RailGraph, src: u32, dst: u32) -> Option<u32> {
    let mut dist = vec![u32::MAX; graph.node_count()];
    let mut queue = VecDeque::new();

    dist[src as usize] = 0;
    queue.push_back(src);

    while let Some(u) = queue.pop_front() {
        if u == dst {
            return Some(dist[u as usize]);
        }
        for &v in graph.neighbors(u) {
            if dist[v as usize] == u32::MAX {
                dist[v as usize] = dist[u as usize] + 1;
                queue.push_back(v);
            }
        }
    }
    None
}

fn random_graph(rng: &mut StdRng, cities: u32, railways: usize, airports: usize) -> RailGraph {
    let mut builder = GraphBuilder::new(cities);
    for _ in 0..airports {
        builder.add_airport(rng.gen_range(0..cities)).unwrap();
    }
    for _ in 0..railways {
        let a = rng.gen_range(0..cities);
        let b = rng.gen_range(0..cities);
        builder.add_railway(a, b).unwrap();
    }
    builder.build().unwrap()
}

fn query(input: &str) -> Outcome {
    Network::from_reader(input.as_bytes())
        .expect("Query should parse")
        .solve(SolverConfig::default())
        .expect("Query should run")
}

#[test]
fn test_airport_city_without_railway_access() {
    // 1-2 by rail, only city 3 has an airport: 1 cannot leave its component
    assert_eq!(query("3 1 1 1 3\n3\n1 2\n"), Outcome::Impossible);
    assert_eq!(query("3 1 1 1 3\n3\n1 2\n").to_string(), "Impossible");
}

#[test]
fn test_disconnected_without_airports() {
    assert_eq!(query("4 2 0 1 4\n1 2\n3 4\n"), Outcome::Impossible);
}

#[test]
fn test_source_equals_target() {
    assert_eq!(query("1 0 0 1 1\n"), Outcome::Hops(0));
    assert_eq!(query("3 2 1 2 2\n2\n1 2\n2 3\n"), Outcome::Hops(0));
}

#[test]
fn test_two_airports_are_two_hops_apart() {
    assert_eq!(query("5 0 2 2 4\n2 4\n"), Outcome::Hops(2));
    // A direct railway is still shorter than flying
    assert_eq!(query("5 1 2 2 4\n2 4\n2 4\n"), Outcome::Hops(1));
}

#[test]
fn test_rail_then_air_then_rail() {
    // 1-2 rail, 2 airport, 5 airport, 5-6-7 rail
    let input = "7 3 2 1 7\n2 5\n1 2\n5 6\n6 7\n";
    assert_eq!(query(input), Outcome::Hops(5));
}

#[test]
fn test_edgeless_networks() {
    for n in 1..6u32 {
        let graph = GraphBuilder::new(n).build().unwrap();
        for s in 0..n {
            for t in 0..n {
                let expected = if s == t { Outcome::Hops(0) } else { Outcome::Impossible };
                assert_eq!(railhop::solve(&graph, s, t).unwrap(), expected);
            }
        }
    }
}

#[test]
fn test_matches_reference_bfs_on_random_networks() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for round in 0..40 {
        let cities = rng.gen_range(1..40);
        let railways = rng.gen_range(0..60);
        let airports = rng.gen_range(0..5);
        let graph = random_graph(&mut rng, cities, railways, airports);
        let capacity = if round % 2 == 0 { 1 } else { 128 };
        let bfs = LayeredBfs::new(SolverConfig {
            initial_queue_capacity: capacity,
        });

        for s in 0..cities {
            for t in 0..cities {
                let got = bfs.solve(&graph, s, t).unwrap().hops();
                assert_eq!(got, bfs_distance(&graph, s, t), "round {round}: {s} -> {t}");
            }
        }
    }
}

#[test]
fn test_symmetry_and_triangle_inequality() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let cities = rng.gen_range(2..25);
        let graph = random_graph(&mut rng, cities, 30, 3);
        let bfs = LayeredBfs::default();

        let mut dist = vec![vec![None; cities as usize]; cities as usize];
        for s in 0..cities {
            for t in 0..cities {
                dist[s as usize][t as usize] = bfs.solve(&graph, s, t).unwrap().hops();
            }
        }

        for u in 0..cities as usize {
            for v in 0..cities as usize {
                assert_eq!(dist[u][v], dist[v][u], "{u} <-> {v}");
                for w in 0..cities as usize {
                    if let (Some(uv), Some(vw), Some(uw)) = (dist[u][v], dist[v][w], dist[u][w]) {
                        assert!(uw <= uv + vw, "{u} -> {w} longer than via {v}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_degree_sum_on_random_networks() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let cities = rng.gen_range(1..100);
        let railways = rng.gen_range(0..200);
        let airports = rng.gen_range(0..20);
        let graph = random_graph(&mut rng, cities, railways, airports);

        let total: usize = (0..graph.node_count() as u32).map(|v| graph.degree(v)).sum();
        assert_eq!(total, 2 * (railways + airports));
        assert_eq!(graph.degree(graph.hub()), airports);
    }
}

#[test]
fn test_long_chain_forces_many_layers() {
    let n = 10_000u32;
    let mut input = format!("{n} {} 0 1 {n}\n", n - 1);
    for city in 1..n {
        input.push_str(&format!("{} {}\n", city, city + 1));
    }
    assert_eq!(query(&input), Outcome::Hops(n - 1));
}
