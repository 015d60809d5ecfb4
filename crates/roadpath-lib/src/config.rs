//! Search configuration.
//!
//! This module provides:
//! - [`TerminationRule`]: When the search may stop once a solution exists
//! - [`SearchConfig`]: Tunables passed to [`PathFinder`](crate::PathFinder)
//!
//! # Environment Variables
//!
//! - `ROADPATH_TERMINATION`: `frontier` (default) or `expansion`
//! - `ROADPATH_PRUNE_DOMINATED`: `true` to enable dominated-prefix pruning
//!
//! # Example
//!
//! ```no_run
//! use roadpath_lib::{PathFinder, SearchConfig};
//!
//! let finder = PathFinder::new().with_config(SearchConfig::from_env());
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable selecting the [`TerminationRule`].
pub const TERMINATION_ENV: &str = "ROADPATH_TERMINATION";

/// Environment variable toggling [`SearchConfig::prune_dominated`].
pub const PRUNE_DOMINATED_ENV: &str = "ROADPATH_PRUNE_DOMINATED";

/// Rule deciding when a search holding at least one solution can stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TerminationRule {
    /// Stop once the cheapest frontier entry costs more than the best
    /// solution, or the frontier is empty.
    #[default]
    FrontierMinimum,
    /// Stop after an expansion whose cheapest successor costs more than the
    /// best solution.
    ExpansionRound,
}

impl TerminationRule {
    /// Parse a rule name. Returns `None` for unrecognised values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "frontier" | "frontier_minimum" | "frontier-minimum" => {
                Some(TerminationRule::FrontierMinimum)
            }
            "expansion" | "expansion_round" | "expansion-round" => {
                Some(TerminationRule::ExpansionRound)
            }
            _ => None,
        }
    }
}

/// Tunables for a [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Termination test applied once a solution has been found.
    pub termination: TerminationRule,
    /// Discard partial paths that reach a node with a higher cost than the
    /// best already seen for that node.
    pub prune_dominated: bool,
}

impl SearchConfig {
    /// Create configuration from environment variables.
    ///
    /// Unrecognised values are logged and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(TERMINATION_ENV) {
            match TerminationRule::parse(&value) {
                Some(rule) => config.termination = rule,
                None => warn!(
                    key = TERMINATION_ENV,
                    value = %value,
                    "unrecognised termination rule; using default"
                ),
            }
        }

        if let Some(value) = lookup(PRUNE_DOMINATED_ENV) {
            match parse_flag(&value) {
                Some(flag) => config.prune_dominated = flag,
                None => warn!(
                    key = PRUNE_DOMINATED_ENV,
                    value = %value,
                    "unrecognised boolean flag; using default"
                ),
            }
        }

        config
    }

    pub fn with_termination(mut self, termination: TerminationRule) -> Self {
        self.termination = termination;
        self
    }

    pub fn with_pruning(mut self, prune_dominated: bool) -> Self {
        self.prune_dominated = prune_dominated;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
