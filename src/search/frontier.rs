// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::{BinaryHeap, HashMap, VecDeque};

use super::Strategy;
use crate::{Cost, NodeId};

/// Candidate node waiting for expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node: NodeId,

    /// Accumulated cost from the start node.
    pub cost: Cost,

    /// Heuristic estimate of the remaining cost to the goal node.
    pub estimate: Cost,
}

impl FrontierEntry {
    #[inline]
    pub fn score(&self) -> Cost {
        self.cost.saturating_add(self.estimate)
    }
}

#[derive(Debug, Clone, Copy)]
struct HeapItem {
    entry: FrontierEntry,
    key: Cost,
    seq: u64,
}

impl HeapItem {
    #[inline]
    fn ordering_key(&self) -> (Cost, Cost, u64) {
        (self.key, self.entry.cost, self.seq)
    }
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.ordering_key() == other.ordering_key()
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // NOTE: We revert the order of comparison,
        // as lower keys are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        other.ordering_key().cmp(&self.ordering_key())
    }
}

#[derive(Debug)]
enum Queue {
    Heap(BinaryHeap<HeapItem>),
    Fifo(VecDeque<FrontierEntry>),
    Lifo(Vec<FrontierEntry>),
}

/// Open set of a search, ordered as per a [Strategy].
///
/// The underlying structures are append-only: there is no decrease-key operation.
/// Instead, the frontier remembers the lowest cost ever pushed for every node and
/// refuses pushes which don't improve on it. Superseded entries stay in the queue,
/// and callers must discard popped entries whose cost no longer matches the best
/// known cost of their node.
#[derive(Debug)]
pub struct Frontier {
    strategy: Strategy,
    queue: Queue,
    best_pushed: HashMap<NodeId, Cost>,
    pushed: u64,
}

impl Frontier {
    pub fn new(strategy: Strategy) -> Self {
        let queue = match strategy {
            Strategy::AStar | Strategy::UniformCost => Queue::Heap(BinaryHeap::default()),
            Strategy::BreadthFirst => Queue::Fifo(VecDeque::default()),
            Strategy::DepthFirst => Queue::Lifo(Vec::default()),
        };

        Self {
            strategy,
            queue,
            best_pushed: HashMap::default(),
            pushed: 0,
        }
    }

    /// Adds an entry to the frontier, unless an entry for the same node with
    /// the same or lower cost was pushed before. Returns `true` if the entry was added.
    pub fn push(&mut self, entry: FrontierEntry) -> bool {
        match self.best_pushed.get(&entry.node) {
            Some(&best) if best <= entry.cost => return false,
            _ => {}
        }
        self.best_pushed.insert(entry.node, entry.cost);

        let seq = self.pushed;
        self.pushed += 1;

        match &mut self.queue {
            Queue::Heap(heap) => {
                let key = match self.strategy {
                    Strategy::AStar => entry.score(),
                    _ => entry.cost,
                };
                heap.push(HeapItem { entry, key, seq });
            }
            Queue::Fifo(q) => q.push_back(entry),
            Queue::Lifo(s) => s.push(entry),
        }

        true
    }

    /// Removes and returns the entry with the best ordering key.
    /// The returned entry might be stale.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        match &mut self.queue {
            Queue::Heap(heap) => heap.pop().map(|item| item.entry),
            Queue::Fifo(q) => q.pop_front(),
            Queue::Lifo(s) => s.pop(),
        }
    }

    /// Returns the number of entries in the queue, including stale ones.
    pub fn len(&self) -> usize {
        match &self.queue {
            Queue::Heap(heap) => heap.len(),
            Queue::Fifo(q) => q.len(),
            Queue::Lifo(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
