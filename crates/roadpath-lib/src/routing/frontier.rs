//! Per-search bookkeeping: shared path prefixes, the frontier heap and the
//! pool of completed paths.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Position;

/// Total order over `f64` costs for use as heap keys.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FloatOrd(pub(crate) f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Index of a path prefix inside a [`PathArena`].
pub(crate) type PathIndex = usize;

#[derive(Debug, Clone, Copy)]
struct PathLink<N> {
    node: N,
    parent: Option<PathIndex>,
}

/// Arena of path prefixes with structural sharing.
///
/// Each entry stores one node and a link to the prefix it extends, so a
/// successor path costs a single slot instead of a copy of its parent.
#[derive(Debug)]
pub(crate) struct PathArena<N> {
    links: Vec<PathLink<N>>,
}

impl<N: Copy + PartialEq> PathArena<N> {
    pub(crate) fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Start a new path at `node`.
    pub(crate) fn root(&mut self, node: N) -> PathIndex {
        self.push(node, None)
    }

    /// Extend the prefix at `parent` with `node`.
    pub(crate) fn extend(&mut self, parent: PathIndex, node: N) -> PathIndex {
        self.push(node, Some(parent))
    }

    fn push(&mut self, node: N, parent: Option<PathIndex>) -> PathIndex {
        self.links.push(PathLink { node, parent });
        self.links.len() - 1
    }

    /// Last node of the path ending at `tip`.
    pub(crate) fn node(&self, tip: PathIndex) -> N {
        self.links[tip].node
    }

    /// Whether `node` occurs anywhere on the path ending at `tip`.
    pub(crate) fn contains(&self, tip: PathIndex, node: N) -> bool {
        self.walk(tip).any(|candidate| candidate == node)
    }

    /// Materialize the path ending at `tip`, start first.
    pub(crate) fn collect(&self, tip: PathIndex) -> Vec<N> {
        let mut nodes: Vec<N> = self.walk(tip).collect();
        nodes.reverse();
        nodes
    }

    pub(crate) fn len(&self) -> usize {
        self.links.len()
    }

    fn walk(&self, tip: PathIndex) -> impl Iterator<Item = N> + '_ {
        let mut current = Some(tip);
        std::iter::from_fn(move || {
            let link = self.links[current?];
            current = link.parent;
            Some(link.node)
        })
    }
}

/// Candidate partial path: a prefix in the arena plus its cost accounting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PathRecord {
    pub(crate) tip: PathIndex,
    /// Coordinates of the last node, looked up when the record was generated.
    pub(crate) position: Position,
    /// Accumulated edge length from the start.
    pub(crate) g: f64,
    /// `g` plus the heuristic estimate to the goal.
    pub(crate) f: f64,
}

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    estimate: FloatOrd,
    sequence: u64,
    record: PathRecord,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the heap pops the lowest estimate, oldest first on ties.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of path records ordered by `f`, FIFO on ties.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: PathRecord) {
        let entry = FrontierEntry {
            estimate: FloatOrd(record.f),
            sequence: self.next_sequence,
            record,
        };
        self.next_sequence += 1;
        self.heap.push(entry);
    }

    pub(crate) fn pop(&mut self) -> Option<PathRecord> {
        self.heap.pop().map(|entry| entry.record)
    }

    /// Lowest `f` currently queued.
    pub(crate) fn min_estimate(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.estimate.0)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Completed paths that end at the goal.
#[derive(Debug, Default)]
pub(crate) struct SolutionPool {
    best: Option<PathRecord>,
    count: usize,
}

impl SolutionPool {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a solution; the earliest record wins among equal costs.
    pub(crate) fn insert(&mut self, record: PathRecord) {
        self.count += 1;
        match self.best {
            Some(best) if best.g <= record.g => {}
            _ => self.best = Some(record),
        }
    }

    /// Lowest solution cost seen so far, `+inf` when empty.
    pub(crate) fn best_cost(&self) -> f64 {
        self.best.map_or(f64::INFINITY, |record| record.g)
    }

    pub(crate) fn best(&self) -> Option<PathRecord> {
        self.best
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub(crate) fn len(&self) -> usize {
        self.count
    }
}
