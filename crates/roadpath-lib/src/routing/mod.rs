//! Informed best-first route search.
//!
//! This module provides:
//! - [`PathFinder`] - A* search over any [`Graph`] with an injectable [`Heuristic`]
//! - [`Route`] - The optimal path together with its cost and [`SearchStats`]
//! - [`shortest_path`] - Convenience entry point returning only the node sequence
//!
//! # Search model
//!
//! Every frontier entry is a complete, cycle-free partial path from the start.
//! A node may appear on many concurrently explored branches; revisits are only
//! rejected within a single branch unless dominated-prefix pruning is enabled
//! through [`SearchConfig::prune_dominated`]. Path prefixes live in an arena
//! and are shared between branches.
//!
//! # Example
//!
//! ```
//! use roadpath_lib::{PathFinder, Position, RoadMap};
//!
//! let map = RoadMap::from_parts(
//!     [(1, Position::new(0.0, 0.0)), (2, Position::new(3.0, 4.0))],
//!     [(1, 2)],
//! )?;
//! let route = PathFinder::new().search(&map, 1, 2)?;
//! assert_eq!(route.nodes, vec![1, 2]);
//! assert_eq!(route.cost, 5.0);
//! # Ok::<(), roadpath_lib::Error>(())
//! ```

pub(crate) mod frontier;

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::{SearchConfig, TerminationRule};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::heuristic::{Euclidean, Heuristic};

use frontier::{Frontier, PathArena, PathRecord, SolutionPool};

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Partial paths taken off the frontier and expanded.
    pub expansions: usize,
    /// Successor paths pushed onto the frontier.
    pub generated: usize,
    /// Partial paths discarded because a cheaper prefix reached the same node.
    pub pruned: usize,
    /// Completed paths that reached the goal.
    pub solutions: usize,
}

/// Optimal route returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<N> {
    /// Nodes from start to goal, both inclusive.
    pub nodes: Vec<N>,
    /// Total edge length.
    pub cost: f64,
    /// Work done by the search that produced this route.
    pub stats: SearchStats,
}

impl<N> Route<N> {
    pub(crate) fn trivial(node: N) -> Self {
        Self {
            nodes: vec![node],
            cost: 0.0,
            stats: SearchStats::default(),
        }
    }

    /// Number of edges in the route.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// A* path finder over coordinate-embedded graphs.
#[derive(Debug, Clone, Default)]
pub struct PathFinder<H = Euclidean> {
    heuristic: H,
    config: SearchConfig,
}

impl PathFinder<Euclidean> {
    /// Path finder with the Euclidean heuristic and default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H> PathFinder<H> {
    /// Replace the heuristic, keeping the configuration.
    pub fn with_heuristic<H2>(self, heuristic: H2) -> PathFinder<H2> {
        PathFinder {
            heuristic,
            config: self.config,
        }
    }

    /// Replace the search configuration, keeping the heuristic.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Active search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Heuristic used to order the frontier.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Find a minimum-length path from `start` to `goal`.
    ///
    /// Fails with [`Error::InvalidNode`] when either endpoint is not in the
    /// graph and with [`Error::NoPathExists`] when the goal is unreachable.
    /// A start node without a position counts as not in the graph.
    pub fn search<G>(&self, graph: &G, start: G::Node, goal: G::Node) -> Result<Route<G::Node>>
    where
        G: Graph + ?Sized,
        H: Heuristic<G>,
    {
        let Some(start_position) = graph.position(start) else {
            return Err(Error::invalid_node(start));
        };
        if !graph.contains(goal) {
            return Err(Error::invalid_node(goal));
        }
        if start == goal {
            return Ok(Route::trivial(start));
        }

        debug!(
            start = ?start,
            goal = ?goal,
            termination = ?self.config.termination,
            prune_dominated = self.config.prune_dominated,
            "starting path search"
        );

        let mut arena = PathArena::new();
        let mut frontier = Frontier::new();
        let mut solutions = SolutionPool::new();
        let mut best_known: HashMap<G::Node, f64> = HashMap::new();
        let mut stats = SearchStats::default();

        let root = arena.root(start);
        frontier.push(PathRecord {
            tip: root,
            position: start_position,
            g: 0.0,
            f: self.heuristic.estimate(graph, start, goal),
        });
        if self.config.prune_dominated {
            best_known.insert(start, 0.0);
        }

        loop {
            if self.config.termination == TerminationRule::FrontierMinimum
                && !solutions.is_empty()
            {
                let bound = solutions.best_cost();
                match frontier.min_estimate() {
                    Some(estimate) if estimate <= bound => {}
                    _ => break,
                }
            }

            let Some(record) = frontier.pop() else {
                if solutions.is_empty() {
                    debug!(
                        expansions = stats.expansions,
                        generated = stats.generated,
                        "frontier exhausted without reaching goal"
                    );
                    return Err(Error::no_path(start, goal));
                }
                break;
            };

            let current = arena.node(record.tip);
            if current == goal {
                solutions.insert(record);
                trace!(cost = record.g, best = solutions.best_cost(), "goal reached");
                continue;
            }

            if self.config.prune_dominated
                && best_known
                    .get(&current)
                    .is_some_and(|&best| record.g > best)
            {
                stats.pruned += 1;
                continue;
            }

            stats.expansions += 1;
            trace!(node = ?current, g = record.g, f = record.f, "expanding");

            let mut best_local_f = f64::INFINITY;
            for &next in graph.neighbors(current) {
                if arena.contains(record.tip, next) {
                    continue;
                }
                let Some(next_position) = graph.position(next) else {
                    warn!(from = ?current, to = ?next, "neighbour has no position; skipping edge");
                    continue;
                };

                let g = record.g + record.position.distance_to(&next_position);
                if self.config.prune_dominated {
                    match best_known.get(&next) {
                        Some(&best) if g > best => {
                            stats.pruned += 1;
                            continue;
                        }
                        _ => {
                            best_known.insert(next, g);
                        }
                    }
                }

                let f = g + self.heuristic.estimate(graph, next, goal);
                let tip = arena.extend(record.tip, next);
                frontier.push(PathRecord {
                    tip,
                    position: next_position,
                    g,
                    f,
                });
                stats.generated += 1;
                best_local_f = best_local_f.min(f);
            }

            if self.config.termination == TerminationRule::ExpansionRound
                && !solutions.is_empty()
                && best_local_f > solutions.best_cost()
            {
                break;
            }
        }

        let Some(best) = solutions.best() else {
            return Err(Error::no_path(start, goal));
        };
        stats.solutions = solutions.len();

        debug!(
            cost = best.g,
            expansions = stats.expansions,
            generated = stats.generated,
            pruned = stats.pruned,
            solutions = stats.solutions,
            arena = arena.len(),
            frontier = frontier.len(),
            "path search finished"
        );

        Ok(Route {
            nodes: arena.collect(best.tip),
            cost: best.g,
            stats,
        })
    }
}

/// Shortest path between `start` and `goal` using the default [`PathFinder`].
pub fn shortest_path<G>(graph: &G, start: G::Node, goal: G::Node) -> Result<Vec<G::Node>>
where
    G: Graph + ?Sized,
{
    PathFinder::new()
        .search(graph, start, goal)
        .map(|route| route.nodes)
}
