use crate::graph::Graph;

/// Distance estimate used to order the search frontier.
///
/// Estimates must be non-negative and admissible (never larger than the true
/// shortest-path cost). Consistent estimates, which satisfy the triangle
/// inequality against edge lengths, keep frontier costs monotone along a path.
pub trait Heuristic<G: Graph + ?Sized> {
    fn estimate(&self, graph: &G, from: G::Node, to: G::Node) -> f64;
}

/// Straight-line distance between node positions.
///
/// Falls back to `0.0` when either node has no position, which keeps the
/// estimate admissible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl<G: Graph + ?Sized> Heuristic<G> for Euclidean {
    fn estimate(&self, graph: &G, from: G::Node, to: G::Node) -> f64 {
        graph.distance(from, to).unwrap_or(0.0)
    }
}

/// Always estimates zero, turning A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl<G: Graph + ?Sized> Heuristic<G> for Zero {
    fn estimate(&self, _graph: &G, _from: G::Node, _to: G::Node) -> f64 {
        0.0
    }
}
