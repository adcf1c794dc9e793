// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::hash_map::{Entry, HashMap};

use crate::{Coordinate, Cost, Edge, NodeId, INFINITE_COST};

/// Represents a road network as a set of nodes with [Coordinates](Coordinate)
/// and [Edges](Edge) between them.
///
/// A Graph is immutable - use a [GraphBuilder] to create one.
/// Nodes are stored densely, in the order in which they were added,
/// and looked up by their external [NodeId].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Graph {
    ids: Vec<NodeId>,
    coordinates: Vec<Coordinate>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Returns the number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns an iterator over all nodes in the graph, in load order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Coordinate)> + '_ {
        self.ids.iter().cloned().zip(self.coordinates.iter().cloned())
    }

    /// Checks whether a node with the provided id exists.
    pub fn has_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Retrieves the [Coordinate] of a node with the provided id.
    pub fn coordinate_of(&self, id: NodeId) -> Option<Coordinate> {
        self.index.get(&id).map(|&idx| self.coordinates[idx])
    }

    /// Gets all outgoing [Edges](Edge) from a node with a given id.
    /// Unknown nodes have no edges.
    pub fn neighbors(&self, from_id: NodeId) -> &[Edge] {
        self.index
            .get(&from_id)
            .map(|&idx| self.edges[idx].as_slice())
            .unwrap_or_default()
    }

    /// Gets the cost of the cheapest [Edge] from one node to another.
    /// If such an edge doesn't exist, returns [INFINITE_COST].
    pub fn edge_cost(&self, from_id: NodeId, to_id: NodeId) -> Cost {
        self.neighbors(from_id)
            .iter()
            .filter(|edge| edge.to == to_id)
            .map(|edge| edge.cost)
            .min()
            .unwrap_or(INFINITE_COST)
    }
}

/// First phase of [Graph] construction - collects nodes.
///
/// Call [GraphBuilder::arcs] once all nodes are known to start adding edges.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    ids: Vec<NodeId>,
    coordinates: Vec<Coordinate>,
    index: HashMap<NodeId, usize>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the graph. Duplicate ids are ignored - the first
    /// occurrence wins. Returns `true` if the node was added.
    pub fn add_node(&mut self, id: NodeId, position: Coordinate) -> bool {
        match self.index.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(self.ids.len());
                self.ids.push(id);
                self.coordinates.push(position);
                true
            }
        }
    }

    /// Returns the number of nodes added so far.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Freezes the set of nodes and moves on to adding edges.
    pub fn arcs(self) -> ArcBuilder {
        let edges = vec![Vec::default(); self.ids.len()];
        ArcBuilder {
            g: Graph {
                ids: self.ids,
                coordinates: self.coordinates,
                index: self.index,
                edges,
                edge_count: 0,
            },
        }
    }
}

/// Second phase of [Graph] construction - collects edges between known nodes.
#[derive(Debug)]
pub struct ArcBuilder {
    g: Graph,
}

impl ArcBuilder {
    /// Adds a one-way edge between two nodes. Edges referring to unknown
    /// nodes are dropped. Returns `true` if the edge was added.
    pub fn add_arc(&mut self, from_id: NodeId, to_id: NodeId, cost: Cost) -> bool {
        if !self.g.has_node(to_id) {
            return false;
        }

        match self.g.index.get(&from_id) {
            Some(&idx) => {
                self.g.edges[idx].push(Edge { to: to_id, cost });
                self.g.edge_count += 1;
                true
            }
            None => false,
        }
    }

    /// Returns the number of edges added so far.
    pub fn edge_count(&self) -> usize {
        self.g.edge_count
    }

    pub fn build(self) -> Graph {
        self.g
    }
}
