use std::fmt;

use thiserror::Error;

/// Convenient result alias for the roadpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Node identifiers are rendered with their `Debug` representation so the
/// error type does not need to be generic over the graph's node type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised when a node is not a member of the graph being searched.
    #[error("node {node} is not part of the graph")]
    InvalidNode { node: String },

    /// Raised when the frontier is exhausted without reaching the goal.
    #[error("no path exists between {start} and {goal}")]
    NoPathExists { start: String, goal: String },

    /// Raised when a road would have no finite, positive length (self-loop,
    /// coincident endpoints or non-finite coordinates).
    #[error("road between {from} and {to} has no usable length")]
    DegenerateRoad { from: String, to: String },

    /// Raised when an intersection is given non-finite coordinates.
    #[error("node {node} has non-finite coordinates")]
    InvalidPosition { node: String },
}

impl Error {
    pub(crate) fn invalid_node(node: impl fmt::Debug) -> Self {
        Error::InvalidNode {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn no_path(start: impl fmt::Debug, goal: impl fmt::Debug) -> Self {
        Error::NoPathExists {
            start: format!("{start:?}"),
            goal: format!("{goal:?}"),
        }
    }

    pub(crate) fn invalid_position(node: impl fmt::Debug) -> Self {
        Error::InvalidPosition {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn degenerate_road(from: impl fmt::Debug, to: impl fmt::Debug) -> Self {
        Error::DegenerateRoad {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}
