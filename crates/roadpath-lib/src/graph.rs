use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Numeric identifier for a road intersection.
pub type IntersectionId = u32;

/// Planar coordinates for a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Read-only graph interface consumed by the search algorithms.
///
/// Implementations must be side-effect free and stable for the duration of a
/// search. Edges are expected to be symmetric. A neighbour without a position
/// cannot be measured, so searches skip the edge leading to it.
pub trait Graph {
    /// Opaque node identifier.
    type Node: Copy + Eq + Hash + fmt::Debug;

    /// Adjacent nodes of `node`, without duplicates. Unknown nodes have none.
    fn neighbors(&self, node: Self::Node) -> &[Self::Node];

    /// Coordinates of `node`, or `None` when the node is not in the graph.
    fn position(&self, node: Self::Node) -> Option<Position>;

    /// Whether `node` belongs to the graph.
    fn contains(&self, node: Self::Node) -> bool {
        self.position(node).is_some()
    }

    /// Euclidean distance between two nodes, when both are positioned.
    fn distance(&self, from: Self::Node, to: Self::Node) -> Option<f64> {
        let from = self.position(from)?;
        let to = self.position(to)?;
        Some(from.distance_to(&to))
    }
}

/// In-memory road network: intersections with coordinates joined by
/// undirected roads.
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    intersections: HashMap<IntersectionId, Position>,
    roads: HashMap<IntersectionId, Vec<IntersectionId>>,
}

impl RoadMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a road map from intersection coordinates and road endpoints.
    pub fn from_parts<I, R>(intersections: I, roads: R) -> Result<Self>
    where
        I: IntoIterator<Item = (IntersectionId, Position)>,
        R: IntoIterator<Item = (IntersectionId, IntersectionId)>,
    {
        let mut map = Self::new();
        for (id, position) in intersections {
            map.add_intersection(id, position)?;
        }
        for (from, to) in roads {
            map.add_road(from, to)?;
        }
        Ok(map)
    }

    /// Insert an intersection, or move an existing one.
    ///
    /// Non-finite coordinates are rejected. Moving an intersection fails,
    /// leaving the map unchanged, when any road already attached to it would
    /// lose its finite, positive length.
    pub fn add_intersection(&mut self, id: IntersectionId, position: Position) -> Result<()> {
        if !position.is_finite() {
            return Err(Error::invalid_position(id));
        }

        for &neighbor in self.neighbors(id) {
            if let Some(other) = self.intersections.get(&neighbor) {
                if !is_usable_length(position.distance_to(other)) {
                    return Err(Error::degenerate_road(id, neighbor));
                }
            }
        }

        self.intersections.insert(id, position);
        self.roads.entry(id).or_default();
        Ok(())
    }

    /// Connect two intersections in both directions and return the road length.
    ///
    /// Adding a road that already exists is a no-op.
    pub fn add_road(&mut self, from: IntersectionId, to: IntersectionId) -> Result<f64> {
        let from_position = *self
            .intersections
            .get(&from)
            .ok_or_else(|| Error::invalid_node(from))?;
        let to_position = *self
            .intersections
            .get(&to)
            .ok_or_else(|| Error::invalid_node(to))?;

        let length = from_position.distance_to(&to_position);
        if from == to || !is_usable_length(length) {
            return Err(Error::degenerate_road(from, to));
        }

        link(&mut self.roads, from, to);
        link(&mut self.roads, to, from);
        Ok(length)
    }

    pub fn contains(&self, id: IntersectionId) -> bool {
        self.intersections.contains_key(&id)
    }

    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    /// Number of undirected roads.
    pub fn road_count(&self) -> usize {
        self.roads.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Length of the road joining `from` and `to`, if there is one.
    pub fn road_length(&self, from: IntersectionId, to: IntersectionId) -> Option<f64> {
        if !self.neighbors(from).contains(&to) {
            return None;
        }
        Graph::distance(self, from, to)
    }

    /// Iterate over every intersection and its position.
    pub fn intersections(&self) -> impl Iterator<Item = (IntersectionId, Position)> + '_ {
        self.intersections.iter().map(|(&id, &position)| (id, position))
    }
}

impl Graph for RoadMap {
    type Node = IntersectionId;

    fn neighbors(&self, node: IntersectionId) -> &[IntersectionId] {
        self.roads.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn position(&self, node: IntersectionId) -> Option<Position> {
        self.intersections.get(&node).copied()
    }
}

fn is_usable_length(length: f64) -> bool {
    length.is_finite() && length > 0.0
}

fn link(
    roads: &mut HashMap<IntersectionId, Vec<IntersectionId>>,
    from: IntersectionId,
    to: IntersectionId,
) {
    let targets = roads.entry(from).or_default();
    if !targets.contains(&to) {
        targets.push(to);
    }
}

/// Total edge length along `nodes`.
///
/// Returns `None` when a node is unknown or two consecutive nodes are not
/// adjacent. A single-node sequence has length zero.
pub fn path_length<G: Graph + ?Sized>(graph: &G, nodes: &[G::Node]) -> Option<f64> {
    let (&first, _) = nodes.split_first()?;
    if !graph.contains(first) {
        return None;
    }

    nodes.windows(2).try_fold(0.0, |total, pair| {
        if !graph.neighbors(pair[0]).contains(&pair[1]) {
            return None;
        }
        graph.distance(pair[0], pair[1]).map(|d| total + d)
    })
}
