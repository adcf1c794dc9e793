// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::time::{Duration, Instant};

use log::{debug, trace};

use super::{ClosedSet, Frontier, FrontierEntry, Heuristic, SearchError, Strategy};
use crate::{Cost, Edge, Graph, NodeId, INFINITE_COST};

/// Additional controls for [find_route].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub strategy: Strategy,

    /// Maximum number of node expansions before [SearchError::StepLimitExceeded]
    /// is returned. `None` permits traversing the whole graph.
    pub step_limit: Option<usize>,
}

impl Options {
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}

/// Outcome of a single [find_route] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Nodes from start to goal, inclusive. Empty if no route was found.
    pub path: Vec<NodeId>,

    /// Cost of every edge of the path, `path.len() - 1` elements.
    pub edge_costs: Vec<Cost>,

    /// Cost of the whole path, or [INFINITE_COST] if no route was found.
    pub total_cost: Cost,

    /// Number of nodes taken from the frontier and expanded.
    pub expansions: usize,

    /// Wall-clock time spent in [find_route].
    pub elapsed: Duration,
}

impl Route {
    fn not_found(expansions: usize, elapsed: Duration) -> Self {
        Self {
            path: vec![],
            edge_costs: vec![],
            total_cost: INFINITE_COST,
            expansions,
            elapsed,
        }
    }

    /// Reads the path to `to_id` back from a closed set. A broken chain of
    /// predecessors gives the same result as an unreachable goal.
    fn from_closed(
        closed: &ClosedSet,
        from_id: NodeId,
        to_id: NodeId,
        expansions: usize,
        elapsed: Duration,
    ) -> Self {
        let path = closed.reconstruct_path(to_id, from_id);
        if path.is_empty() {
            return Self::not_found(expansions, elapsed);
        }

        Self {
            edge_costs: closed.edge_costs(&path),
            path,
            total_cost: closed.best_cost(to_id),
            expansions,
            elapsed,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Returns the number of nodes on the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Finds a route between two nodes in the provided graph,
/// using the [Strategy] from the provided [Options].
///
/// All strategies share the same loop: pop the best frontier entry, discard it if
/// stale, expand it, and relax its outgoing edges. [Strategy::AStar] and
/// [Strategy::UniformCost] lower a node's cost whenever a strictly cheaper path
/// is found (even after the node was expanded) and return the cheapest route.
/// [Strategy::BreadthFirst] and [Strategy::DepthFirst] only consider the first
/// discovery of every node.
///
/// If `from_id` or `to_id` doesn't exist, or there is no route between them,
/// returns a [Route] with an empty path and [INFINITE_COST].
pub fn find_route(
    g: &Graph,
    from_id: NodeId,
    to_id: NodeId,
    options: &Options,
) -> Result<Route, SearchError> {
    let started = Instant::now();
    let strategy = options.strategy;

    if !g.has_node(from_id) || !g.has_node(to_id) {
        debug!(
            "{}: route {} -> {} refers to an unknown node",
            strategy, from_id, to_id
        );
        return Ok(Route::not_found(0, started.elapsed()));
    }

    let heuristic = if strategy.uses_heuristic() {
        Heuristic::towards(g, to_id)
    } else {
        Heuristic::zero(g)
    };
    let mut frontier = Frontier::new(strategy);
    let mut closed = ClosedSet::new();
    let mut expansions: usize = 0;

    closed.record_best(from_id, None, 0);
    frontier.push(FrontierEntry {
        node: from_id,
        cost: 0,
        estimate: heuristic.estimate(from_id),
    });

    while let Some(item) = frontier.pop() {
        // The queue may keep multiple entries for the same node, only the latest one is valid.
        if item.cost != closed.best_cost(item.node) {
            trace!("{}: skipping stale entry for {}", strategy, item.node);
            continue;
        }

        if !closed.finalize(item.node) {
            trace!("{}: re-expanding {} at cost {}", strategy, item.node, item.cost);
        }

        expansions += 1;
        if let Some(limit) = options.step_limit {
            if expansions > limit {
                return Err(SearchError::StepLimitExceeded(limit));
            }
        }

        if item.node == to_id {
            debug!(
                "{}: found route {} -> {} with cost {} after {} expansions",
                strategy, from_id, to_id, item.cost, expansions
            );
            return Ok(Route::from_closed(
                &closed,
                from_id,
                to_id,
                expansions,
                started.elapsed(),
            ));
        }

        for &Edge {
            to: neighbor_id,
            cost: edge_cost,
        } in g.neighbors(item.node)
        {
            let neighbor_cost = item.cost.saturating_add(edge_cost);

            let improves = if strategy.relaxes() {
                neighbor_cost < closed.best_cost(neighbor_id)
            } else {
                !closed.is_discovered(neighbor_id)
            };
            if !improves {
                continue;
            }

            closed.record_best(neighbor_id, Some(item.node), neighbor_cost);
            frontier.push(FrontierEntry {
                node: neighbor_id,
                cost: neighbor_cost,
                estimate: heuristic.estimate(neighbor_id),
            });
        }
    }

    debug!(
        "{}: no route {} -> {} after {} expansions",
        strategy, from_id, to_id, expansions
    );
    Ok(Route::not_found(expansions, started.elapsed()))
}
