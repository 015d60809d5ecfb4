//! roadpath library entry points.
//!
//! This crate computes minimum-length paths through undirected graphs whose
//! nodes carry planar coordinates, such as road networks. Callers supply a
//! [`Graph`] implementation (or use the bundled [`RoadMap`]) and run an
//! informed search through [`PathFinder`]. A plain Dijkstra implementation is
//! exported as an independent reference.
//!

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod path;
pub mod routing;

pub use config::{SearchConfig, TerminationRule};
pub use error::{Error, Result};
pub use graph::{path_length, Graph, IntersectionId, Position, RoadMap};
pub use heuristic::{Euclidean, Heuristic, Zero};
pub use path::find_route_dijkstra;
pub use routing::{shortest_path, PathFinder, Route, SearchStats};
