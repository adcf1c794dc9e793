// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::io;

use log::{debug, info};

use super::record::{Record, Records};
use super::LoadStats;
use crate::{ArcBuilder, GraphBuilder};

/// Helper object converting DIMACS [Records](Record) into a [Graph](crate::Graph),
/// enforcing that all nodes are known before any arc is added.
pub(super) struct GraphLoader {
    stats: LoadStats,
}

impl GraphLoader {
    pub(super) fn new() -> Self {
        Self {
            stats: LoadStats::default(),
        }
    }

    /// Reads all nodes from a coordinate file.
    pub(super) fn add_nodes<R: io::BufRead>(&mut self, reader: R) -> io::Result<GraphBuilder> {
        let mut b = GraphBuilder::new();

        for record in Records::new(reader) {
            let (line_no, record) = record?;
            match record {
                Record::Node { id, position } => {
                    if !b.add_node(id, position) {
                        debug!("coordinates:{}: duplicate node {}, skipping", line_no, id);
                        self.stats.skipped_nodes += 1;
                    }
                }

                Record::MalformedNode => {
                    debug!("coordinates:{}: malformed node record, skipping", line_no);
                    self.stats.skipped_nodes += 1;
                }

                Record::Arc { .. } | Record::MalformedArc | Record::Ignored => {}
            }
        }

        self.stats.nodes = b.len();
        Ok(b)
    }

    /// Reads all arcs from an arc file.
    pub(super) fn add_arcs<R: io::BufRead>(
        &mut self,
        mut a: ArcBuilder,
        reader: R,
    ) -> io::Result<ArcBuilder> {
        for record in Records::new(reader) {
            let (line_no, record) = record?;
            match record {
                Record::Arc { from, to, cost } => {
                    if !a.add_arc(from, to, cost) {
                        debug!(
                            "arcs:{}: arc {} -> {} refers to an unknown node, skipping",
                            line_no, from, to,
                        );
                        self.stats.skipped_arcs += 1;
                    }
                }

                Record::MalformedArc => {
                    debug!("arcs:{}: malformed arc record, skipping", line_no);
                    self.stats.skipped_arcs += 1;
                }

                Record::Node { .. } | Record::MalformedNode | Record::Ignored => {}
            }
        }

        self.stats.arcs = a.edge_count();
        Ok(a)
    }

    /// Logs a summary of the load and returns its statistics.
    pub(super) fn finish(self) -> LoadStats {
        info!(
            "loaded {} nodes and {} arcs ({} node and {} arc records skipped)",
            self.stats.nodes, self.stats.arcs, self.stats.skipped_nodes, self.stats.skipped_arcs,
        );
        self.stats
    }
}
