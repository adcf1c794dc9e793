// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{earth_distance, Coordinate, Cost, Graph, NodeId};

/// Lower bound of the remaining cost from a node to a fixed goal.
///
/// The estimate is the great-circle distance in meters, rounded down.
/// It never overestimates as long as every edge costs at least
/// the crow-flies distance between its endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Heuristic<'a> {
    g: &'a Graph,
    goal: Option<Coordinate>,
}

impl<'a> Heuristic<'a> {
    /// Creates a heuristic estimating the distance to `goal`.
    /// If the goal doesn't exist in the graph, all estimates are zero.
    pub fn towards(g: &'a Graph, goal: NodeId) -> Self {
        Self {
            g,
            goal: g.coordinate_of(goal),
        }
    }

    /// Creates a heuristic which always returns zero.
    pub fn zero(g: &'a Graph) -> Self {
        Self { g, goal: None }
    }

    pub fn estimate(&self, node: NodeId) -> Cost {
        match (self.goal, self.g.coordinate_of(node)) {
            (Some(goal), Some(at)) => earth_distance(at, goal) as Cost,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;

    fn graph() -> Graph {
        let mut b = GraphBuilder::new();
        b.add_node(1, Coordinate::new(40_700_000, -74_000_000));
        b.add_node(2, Coordinate::new(40_701_000, -74_000_000));
        b.add_node(3, Coordinate::new(40_702_000, -73_999_000));
        b.arcs().build()
    }

    #[test]
    fn estimates_distance_to_goal() {
        let g = graph();
        let h = Heuristic::towards(&g, 3);
        assert_eq!(h.estimate(3), 0);
        assert_eq!(h.estimate(2), 139);
        assert_eq!(h.estimate(1), 237);
    }

    #[test]
    fn unknown_nodes() {
        let g = graph();
        assert_eq!(Heuristic::towards(&g, 3).estimate(7), 0);
        assert_eq!(Heuristic::towards(&g, 7).estimate(1), 0);
    }

    #[test]
    fn zero() {
        let g = graph();
        assert_eq!(Heuristic::zero(&g).estimate(1), 0);
    }
}
