//! End-to-end routing scenarios over the bundled fixtures, plus
//! randomized cross-checks of both strategies against a naive Dijkstra.

mod common;

use common::{random_network, reference_dijkstra, unit_weight_clone, MAZE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wayfinder::{AStarQuery, BfsQuery, GridMap, Heuristic, NodeId, TransitMap};

fn cell_path(cells: &[(usize, usize)]) -> Vec<NodeId> {
    cells.iter().map(|&(r, c)| NodeId::cell(r, c)).collect()
}

#[test]
fn test_maze_bfs_finds_the_unique_shortest_path() {
    let grid = GridMap::from_rows(&MAZE);
    let route = BfsQuery::between(NodeId::cell(0, 0), NodeId::cell(4, 4))
        .execute(&grid)
        .unwrap();

    assert!(route.found);
    assert_eq!(route.hops, 8);
    // The obstacle layout admits exactly one 8-step route
    assert_eq!(
        route.path,
        cell_path(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2),
            (3, 2),
            (4, 2),
            (4, 3),
            (4, 4)
        ])
    );
}

#[test]
fn test_maze_astar_matches_bfs_on_unit_grid() {
    let grid = GridMap::from_rows(&MAZE);
    let start = NodeId::cell(0, 0);
    let end = NodeId::cell(4, 4);

    let bfs = BfsQuery::between(start.clone(), end.clone())
        .execute(&grid)
        .unwrap();
    let astar = AStarQuery::between(start, end)
        .heuristic(Heuristic::Manhattan)
        .execute(&grid)
        .unwrap();

    assert!(astar.found);
    assert_eq!(astar.cost, 8.0);
    assert_eq!(astar.path, bfs.path);
}

#[test]
fn test_maze_walled_off_exit_is_not_found() {
    let mut grid = GridMap::from_rows(&MAZE);
    // Seal the exit's two remaining approaches
    grid.block(4, 3);
    grid.block(3, 4);

    let bfs = BfsQuery::between(NodeId::cell(0, 0), NodeId::cell(4, 4))
        .execute(&grid)
        .unwrap();
    let astar = AStarQuery::between(NodeId::cell(0, 0), NodeId::cell(4, 4))
        .execute(&grid)
        .unwrap();
    assert!(!bfs.found);
    assert!(!astar.found);
}

#[test]
fn test_metro_cross_line_routes() {
    let metro = TransitMap::ankara();
    let (asti, osb) = (NodeId::new("M1"), NodeId::new("K4"));

    let fewest = metro.least_transfers(&asti, &osb).unwrap();
    assert_eq!(fewest.hops, 5);

    let fastest = metro.fastest_route(&asti, &osb).unwrap();
    assert_eq!(fastest.cost, 25.0);

    // The fastest route is also checked against the naive reference
    let expected = reference_dijkstra(metro.network(), &asti, &osb);
    assert_eq!(expected, Some(25.0));
}

#[test]
fn test_metro_fastest_equals_reference_for_all_pairs() {
    let metro = TransitMap::ankara();
    let ids: Vec<NodeId> = metro.network().nodes().map(|n| n.id.clone()).collect();

    for from in &ids {
        for to in &ids {
            let route = metro.fastest_route(from, to).unwrap();
            let expected = reference_dijkstra(metro.network(), from, to);
            match expected {
                Some(cost) => {
                    assert!(route.found, "{from} -> {to} should be reachable");
                    assert_eq!(route.cost, cost, "{from} -> {to}");
                }
                None => assert!(!route.found),
            }
        }
    }
}

#[test]
fn test_random_graphs_astar_matches_reference() {
    let mut rng = StdRng::seed_from_u64(7);

    for round in 0..10 {
        let network = random_network(&mut rng, 30, 60);
        let source = NodeId::new("n0");

        for i in 1..30 {
            let target = NodeId::new(format!("n{i}"));
            let expected = reference_dijkstra(&network, &source, &target);

            for heuristic in [Heuristic::None, Heuristic::HopDistance] {
                let route = AStarQuery::between(source.clone(), target.clone())
                    .heuristic(heuristic)
                    .execute(&network)
                    .unwrap();
                match expected {
                    Some(cost) => assert_eq!(
                        route.cost, cost,
                        "round {round}, n0 -> n{i}, {heuristic:?}"
                    ),
                    None => assert!(!route.found, "round {round}, n0 -> n{i}"),
                }
            }
        }
    }
}

#[test]
fn test_random_graphs_bfs_hop_minimality() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..10 {
        let network = random_network(&mut rng, 25, 45);
        let unit = unit_weight_clone(&network);
        let source = NodeId::new("n0");

        for i in 1..25 {
            let target = NodeId::new(format!("n{i}"));
            let route = BfsQuery::between(source.clone(), target.clone())
                .execute(&network)
                .unwrap();
            // Minimum hop count equals minimum cost when every edge is 1
            let expected = reference_dijkstra(&unit, &source, &target);
            match expected {
                Some(hops) => assert_eq!(route.cost, hops),
                None => assert!(!route.found),
            }
        }
    }
}

#[test]
fn test_searches_leave_the_graph_untouched() {
    let metro = TransitMap::ankara();
    let before: Vec<String> = metro.network().nodes().map(|n| n.id.to_string()).collect();
    let edge_count = metro.network().edge_count();

    let from = NodeId::new("M1");
    let to = NodeId::new("K4");
    let first = metro.fastest_route(&from, &to).unwrap();
    let second = metro.fastest_route(&from, &to).unwrap();
    let third = metro.least_transfers(&from, &to).unwrap();
    let fourth = metro.least_transfers(&from, &to).unwrap();

    // Idempotent: identical inputs, identical outputs
    assert_eq!(first, second);
    assert_eq!(third, fourth);

    let after: Vec<String> = metro.network().nodes().map(|n| n.id.to_string()).collect();
    assert_eq!(before.len(), after.len());
    assert_eq!(edge_count, metro.network().edge_count());
}
