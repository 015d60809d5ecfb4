mod common;

use common::{grid, grid_id, square_with_diagonal, two_islands, TOLERANCE};
use roadpath_lib::{find_route_dijkstra, path_length, Error};

#[test]
fn dijkstra_takes_diagonal() {
    let map = square_with_diagonal();
    let route = find_route_dijkstra(&map, 0, 2).expect("route exists");

    assert_eq!(route.nodes, vec![0, 2]);
    assert!((route.cost - std::f64::consts::SQRT_2).abs() < TOLERANCE);
}

#[test]
fn dijkstra_cost_matches_path_length() {
    let map = grid(5, 4);
    let start = grid_id(5, 0, 3);
    let goal = grid_id(5, 4, 0);
    let route = find_route_dijkstra(&map, start, goal).expect("route exists");

    assert!((route.cost - 7.0).abs() < TOLERANCE);
    assert_eq!(route.hop_count(), 7);
    let length = path_length(&map, &route.nodes).expect("valid path");
    assert!((length - route.cost).abs() < TOLERANCE);
}

#[test]
fn dijkstra_shares_error_contract() {
    let map = two_islands();
    assert!(matches!(
        find_route_dijkstra(&map, 1, 4),
        Err(Error::NoPathExists { .. })
    ));
    assert!(matches!(
        find_route_dijkstra(&map, 0, 4),
        Err(Error::InvalidNode { .. })
    ));

    let trivial = find_route_dijkstra(&map, 6, 6).expect("trivial route");
    assert_eq!(trivial.nodes, vec![6]);
    assert_eq!(trivial.stats.expansions, 0);
}
