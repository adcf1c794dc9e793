// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Plain-text serialization of [Routes](Route).

use std::io;

use crate::{Cost, Graph, Route, INFINITE_COST};

/// Displays a [Cost], with [INFINITE_COST] shown as `inf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCost(pub Cost);

impl std::fmt::Display for DisplayCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == INFINITE_COST {
            f.write_str("inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Writes the path of a route as alternating node ids and parenthesized
/// edge costs, e.g. `1 - (120) - 4 - (80) - 7`, followed by a newline.
/// Nothing is written for routes without a path.
pub fn write_path<W: io::Write>(w: &mut W, route: &Route) -> io::Result<()> {
    let Some((first, rest)) = route.path.split_first() else {
        return Ok(());
    };

    write!(w, "{}", first)?;
    for (node, &cost) in rest.iter().zip(&route.edge_costs) {
        write!(w, " - ({}) - {}", DisplayCost(cost), node)?;
    }
    writeln!(w)
}

/// Writes search statistics, one per line: number of nodes and edges in the graph,
/// total cost of the route, number of expansions and elapsed seconds.
pub fn write_stats<W: io::Write>(w: &mut W, g: &Graph, route: &Route) -> io::Result<()> {
    writeln!(w, "{}", g.len())?;
    writeln!(w, "{}", g.edge_count())?;
    writeln!(w, "{}", DisplayCost(route.total_cost))?;
    writeln!(w, "{}", route.expansions)?;
    writeln!(w, "{:.6}", route.elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{Coordinate, GraphBuilder};

    fn route(path: Vec<u32>, edge_costs: Vec<Cost>, total_cost: Cost) -> Route {
        Route {
            path,
            edge_costs,
            total_cost,
            expansions: 3,
            elapsed: Duration::from_micros(1_500),
        }
    }

    fn path_to_string(r: &Route) -> String {
        let mut buf = Vec::new();
        write_path(&mut buf, r).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn path() {
        let r = route(vec![1, 4, 7], vec![120, 80], 200);
        assert_eq!(path_to_string(&r), "1 - (120) - 4 - (80) - 7\n");
    }

    #[test]
    fn single_node_path() {
        let r = route(vec![9], vec![], 0);
        assert_eq!(path_to_string(&r), "9\n");
    }

    #[test]
    fn empty_path() {
        let r = route(vec![], vec![], INFINITE_COST);
        assert_eq!(path_to_string(&r), "");
    }

    #[test]
    fn inconsistent_edge_cost() {
        let r = route(vec![1, 2], vec![INFINITE_COST], INFINITE_COST);
        assert_eq!(path_to_string(&r), "1 - (inf) - 2\n");
    }

    #[test]
    fn stats() {
        let mut b = GraphBuilder::new();
        b.add_node(1, Coordinate::default());
        b.add_node(2, Coordinate::default());
        let mut a = b.arcs();
        a.add_arc(1, 2, 10);
        let g = a.build();

        let mut buf = Vec::new();
        write_stats(&mut buf, &g, &route(vec![], vec![], INFINITE_COST)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2\n1\ninf\n3\n0.001500\n");
    }
}
