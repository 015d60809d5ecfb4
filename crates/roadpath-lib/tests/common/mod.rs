#![allow(dead_code)]

use rand::prelude::*;
use roadpath_lib::{path_length, Graph, IntersectionId, Position, RoadMap, Route};

pub const TOLERANCE: f64 = 1e-9;

/// Route logs to the test writer; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Unit square (0,0),(1,0),(1,1),(0,1) as 0..=3, perimeter plus the 0-2 diagonal.
pub fn square_with_diagonal() -> RoadMap {
    RoadMap::from_parts(
        [
            (0, Position::new(0.0, 0.0)),
            (1, Position::new(1.0, 0.0)),
            (2, Position::new(1.0, 1.0)),
            (3, Position::new(0.0, 1.0)),
        ],
        [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
    )
    .expect("square fixture builds")
}

/// Two intersections five units apart joined by one road.
pub fn single_road() -> RoadMap {
    RoadMap::from_parts(
        [(1, Position::new(0.0, 0.0)), (2, Position::new(3.0, 4.0))],
        [(1, 2)],
    )
    .expect("single road fixture builds")
}

/// Two triangles with no road between them: {1,2,3} and {4,5,6}.
pub fn two_islands() -> RoadMap {
    RoadMap::from_parts(
        [
            (1, Position::new(0.0, 0.0)),
            (2, Position::new(1.0, 0.0)),
            (3, Position::new(0.0, 1.0)),
            (4, Position::new(10.0, 10.0)),
            (5, Position::new(11.0, 10.0)),
            (6, Position::new(10.0, 11.0)),
        ],
        [(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)],
    )
    .expect("island fixture builds")
}

/// Id of the grid intersection at column `x`, row `y`.
pub fn grid_id(width: u32, x: u32, y: u32) -> IntersectionId {
    y * width + x
}

/// `width` x `height` lattice with unit spacing and four-way roads.
pub fn grid(width: u32, height: u32) -> RoadMap {
    let mut map = RoadMap::new();
    for y in 0..height {
        for x in 0..width {
            map.add_intersection(
                grid_id(width, x, y),
                Position::new(f64::from(x), f64::from(y)),
            )
            .expect("grid intersection");
        }
    }
    for y in 0..height {
        for x in 0..width {
            let id = grid_id(width, x, y);
            if x + 1 < width {
                map.add_road(id, grid_id(width, x + 1, y))
                    .expect("grid road");
            }
            if y + 1 < height {
                map.add_road(id, grid_id(width, x, y + 1))
                    .expect("grid road");
            }
        }
    }
    map
}

/// Random geometric road map: `count` intersections scattered over a
/// 100x100 area, each joined to its `nearest` closest neighbours.
pub fn random_road_map(seed: u64, count: u32, nearest: usize) -> RoadMap {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = RoadMap::new();
    let mut points = Vec::new();
    for id in 0..count {
        let position = Position::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        map.add_intersection(id, position)
            .expect("random intersection");
        points.push((id, position));
    }

    for &(id, position) in &points {
        let mut others: Vec<_> = points
            .iter()
            .filter(|(other, _)| *other != id)
            .map(|(other, other_position)| (*other, position.distance_to(other_position)))
            .collect();
        others.sort_by(|a, b| a.1.total_cmp(&b.1));
        for (other, distance) in others.into_iter().take(nearest) {
            if distance > 0.0 {
                map.add_road(id, other).expect("random road");
            }
        }
    }
    map
}

/// Assert `route` is a simple path from `start` to `goal` along real edges
/// whose length matches the reported cost.
pub fn assert_valid_route<G: Graph>(graph: &G, route: &Route<G::Node>, start: G::Node, goal: G::Node) {
    assert_eq!(route.nodes.first(), Some(&start), "route starts at start");
    assert_eq!(route.nodes.last(), Some(&goal), "route ends at goal");

    for (index, node) in route.nodes.iter().enumerate() {
        assert!(
            !route.nodes[index + 1..].contains(node),
            "node {node:?} repeats in {:?}",
            route.nodes
        );
    }

    let length = path_length(graph, &route.nodes).expect("consecutive nodes are adjacent");
    assert!(
        (length - route.cost).abs() < TOLERANCE,
        "reported cost {} differs from edge total {}",
        route.cost,
        length
    );
}
