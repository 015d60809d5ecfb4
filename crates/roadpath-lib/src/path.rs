use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::routing::frontier::FloatOrd;
use crate::routing::{Route, SearchStats};

/// Run Dijkstra's algorithm over Euclidean edge lengths.
///
/// Shares the error contract of [`PathFinder::search`](crate::PathFinder::search)
/// and serves as an independent reference for it.
pub fn find_route_dijkstra<G>(graph: &G, start: G::Node, goal: G::Node) -> Result<Route<G::Node>>
where
    G: Graph + ?Sized,
{
    if !graph.contains(start) {
        return Err(Error::invalid_node(start));
    }
    if !graph.contains(goal) {
        return Err(Error::invalid_node(goal));
    }
    if start == goal {
        return Ok(Route::trivial(start));
    }

    let mut stats = SearchStats::default();
    let mut distances: HashMap<G::Node, f64> = HashMap::new();
    let mut parents: HashMap<G::Node, Option<G::Node>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0.0, 0));
    let mut sequence = 1;

    while let Some(entry) = queue.pop() {
        let current_distance = match distances.get(&entry.node) {
            Some(distance) if *distance < entry.cost.0 => continue,
            Some(distance) => *distance,
            None => continue,
        };

        if entry.node == goal {
            let nodes = reconstruct_path(&parents, start, goal);
            debug!(
                cost = current_distance,
                expansions = stats.expansions,
                "dijkstra reached goal"
            );
            return Ok(Route {
                nodes,
                cost: current_distance,
                stats,
            });
        }

        stats.expansions += 1;
        for &next in graph.neighbors(entry.node) {
            let Some(length) = graph.distance(entry.node, next) else {
                continue;
            };

            let next_cost = current_distance + length;
            if next_cost < *distances.get(&next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost, sequence));
                sequence += 1;
                stats.generated += 1;
            }
        }
    }

    Err(Error::no_path(start, goal))
}

fn reconstruct_path<N: Copy + Eq + Hash>(
    parents: &HashMap<N, Option<N>>,
    start: N,
    goal: N,
) -> Vec<N> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug)]
struct QueueEntry<N> {
    node: N,
    cost: FloatOrd,
    sequence: u64,
}

impl<N> QueueEntry<N> {
    fn new(node: N, cost: f64, sequence: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl<N> PartialEq for QueueEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for QueueEntry<N> {}

impl<N> Ord for QueueEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<N> PartialOrd for QueueEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
