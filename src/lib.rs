// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Shortest paths over [DIMACS](http://www.diag.uniroma1.it/challenge9/format.shtml)
//! road networks.
//!
//! A [Graph] is loaded once from an arc file (`.gr`) and a coordinate file (`.co`),
//! and then queried with one of four interchangeable [strategies](Strategy):
//! A* with a great-circle heuristic, uniform-cost search (Dijkstra),
//! breadth-first and depth-first traversal.
//!
//! # Example
//!
//! ```no_run
//! let options = roadsearch::dimacs::Options::default();
//! let (g, _) = roadsearch::dimacs::load_graph_from_files(
//!     &options,
//!     "USA-road-d.NY.gr",
//!     "USA-road-d.NY.co",
//! ).expect("failed to load graph");
//!
//! let route = roadsearch::find_route(&g, 1, 309, &roadsearch::search::Options::default())
//!     .expect("search failed");
//!
//! println!("Route: {:?} (cost {})", route.path, route.total_cost);
//! ```

mod distance;
pub mod dimacs;
mod graph;
pub mod output;
pub mod search;

pub use distance::earth_distance;
pub use graph::{ArcBuilder, Graph, GraphBuilder};
pub use search::{find_route, Route, SearchError, Strategy};

/// External identifier of a node, as used in the input files.
pub type NodeId = u32;

/// Non-negative cost of traversing an edge, or of a whole path.
pub type Cost = u64;

/// Sentinel cost of an unreachable node or an inconsistent edge.
pub const INFINITE_COST: Cost = Cost::MAX;

/// Position of a [Graph] node, in micro-degrees (degrees × 10⁶).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub lat: i32,
    pub lon: i32,
}

impl Coordinate {
    pub const fn new(lat: i32, lon: i32) -> Self {
        Self { lat, lon }
    }
}

/// Represents an outgoing (one-way) connection from a specific node.
///
/// `to` is always a node of the [Graph] the edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub cost: Cost,
}
