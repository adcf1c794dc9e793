// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::{Cost, NodeId, INFINITE_COST};

#[derive(Debug, Clone, Copy)]
struct Best {
    cost: Cost,
    parent: Option<NodeId>,
}

/// Closed set of a search: the best known cost and predecessor of every
/// reached node, plus the set of already expanded ("finalized") nodes.
#[derive(Debug, Default)]
pub struct ClosedSet {
    best: HashMap<NodeId, Best>,
    finalized: HashSet<NodeId>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally sets the best known cost and predecessor of a node.
    /// `parent` is `None` for the start node only.
    pub fn record_best(&mut self, node: NodeId, parent: Option<NodeId>, cost: Cost) {
        self.best.insert(node, Best { cost, parent });
    }

    /// Returns the best known cost of a node, or [INFINITE_COST] if it was never reached.
    pub fn best_cost(&self, node: NodeId) -> Cost {
        self.best
            .get(&node)
            .map(|b| b.cost)
            .unwrap_or(INFINITE_COST)
    }

    /// Returns the predecessor of a node on its best known path.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.best.get(&node).and_then(|b| b.parent)
    }

    /// Checks whether a node was ever reached.
    pub fn is_discovered(&self, node: NodeId) -> bool {
        self.best.contains_key(&node)
    }

    /// Marks a node as expanded. Returns `false` if it already was.
    pub fn finalize(&mut self, node: NodeId) -> bool {
        self.finalized.insert(node)
    }

    pub fn is_finalized(&self, node: NodeId) -> bool {
        self.finalized.contains(&node)
    }

    /// Follows predecessors from `goal` back to `start` and returns the nodes
    /// in order from `start` to `goal`.
    ///
    /// Returns an empty vector if `goal` was never reached, or if the chain of
    /// predecessors does not lead to `start`.
    pub fn reconstruct_path(&self, goal: NodeId, start: NodeId) -> Vec<NodeId> {
        if !self.is_discovered(goal) {
            return vec![];
        }

        let mut path = vec![goal];
        let mut last = goal;

        while last != start {
            // A chain longer than the number of reached nodes must contain a cycle
            match self.parent(last) {
                Some(nd) if path.len() < self.best.len() => {
                    path.push(nd);
                    last = nd;
                }
                _ => {
                    warn!(
                        "broken predecessor chain from {} to {} at node {}",
                        goal, start, last
                    );
                    return vec![];
                }
            }
        }

        path.reverse();
        path
    }

    /// Computes the cost of every edge of a path as the difference between
    /// best known costs of its consecutive nodes.
    ///
    /// Edges with an unreached endpoint, or with a negative difference,
    /// have [INFINITE_COST].
    pub fn edge_costs(&self, path: &[NodeId]) -> Vec<Cost> {
        path.windows(2)
            .map(|pair| {
                let from = self.best_cost(pair[0]);
                let to = self.best_cost(pair[1]);
                if from == INFINITE_COST || to == INFINITE_COST || to < from {
                    INFINITE_COST
                } else {
                    to - from
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> ClosedSet {
        // 1 -(4)-> 2 -(6)-> 3 -(1)-> 4
        let mut c = ClosedSet::new();
        c.record_best(1, None, 0);
        c.record_best(2, Some(1), 4);
        c.record_best(3, Some(2), 10);
        c.record_best(4, Some(3), 11);
        c
    }

    #[test]
    fn best_costs() {
        let mut c = chain();
        assert_eq!(c.best_cost(3), 10);
        assert_eq!(c.best_cost(5), INFINITE_COST);
        assert_eq!(c.parent(1), None);
        assert_eq!(c.parent(4), Some(3));

        c.record_best(3, Some(1), 7);
        assert_eq!(c.best_cost(3), 7);
        assert_eq!(c.parent(3), Some(1));
    }

    #[test]
    fn finalization() {
        let mut c = chain();
        assert!(!c.is_finalized(2));
        assert!(c.finalize(2));
        assert!(c.is_finalized(2));
        assert!(!c.finalize(2));
    }

    #[test]
    fn path_and_edge_costs() {
        let c = chain();
        let path = c.reconstruct_path(4, 1);
        assert_eq!(path, vec![1, 2, 3, 4]);
        assert_eq!(c.edge_costs(&path), vec![4, 6, 1]);
    }

    #[test]
    fn path_to_self() {
        let c = chain();
        let path = c.reconstruct_path(1, 1);
        assert_eq!(path, vec![1]);
        assert!(c.edge_costs(&path).is_empty());
    }

    #[test]
    fn path_from_intermediate_node() {
        let c = chain();
        assert_eq!(c.reconstruct_path(4, 2), vec![2, 3, 4]);
    }

    #[test]
    fn unreached_goal() {
        let c = chain();
        assert!(c.reconstruct_path(9, 1).is_empty());
    }

    #[test]
    fn broken_chain() {
        let mut c = chain();
        c.record_best(2, None, 4);
        assert!(c.reconstruct_path(4, 1).is_empty());
    }

    #[test]
    fn cyclic_chain() {
        let mut c = chain();
        c.record_best(2, Some(3), 4);
        assert!(c.reconstruct_path(4, 1).is_empty());
    }

    #[test]
    fn inconsistent_edge_costs() {
        let mut c = chain();
        c.record_best(3, Some(2), 2);
        assert_eq!(c.edge_costs(&[1, 2, 3, 4, 5]), vec![4, INFINITE_COST, 9, INFINITE_COST]);
    }
}
