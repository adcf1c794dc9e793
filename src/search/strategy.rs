// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::str::FromStr;

/// Selects how [find_route](crate::find_route) orders its frontier,
/// and whether a node's cost may be improved after it was first discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a great-circle
    /// distance heuristic. Frontier ordered by cost + estimate, ties broken by lower cost.
    #[default]
    AStar,

    /// [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
    /// Frontier ordered by cost.
    UniformCost,

    /// FIFO traversal; ignores edge costs when choosing the path.
    BreadthFirst,

    /// LIFO traversal; ignores edge costs when choosing the path.
    DepthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::AStar,
        Strategy::UniformCost,
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
    ];

    /// Returns `true` if a node's cost may be lowered after its discovery,
    /// `false` if only the first discovery of a node counts.
    pub fn relaxes(self) -> bool {
        matches!(self, Self::AStar | Self::UniformCost)
    }

    /// Returns `true` if frontier entries carry a heuristic estimate.
    pub fn uses_heuristic(self) -> bool {
        self == Self::AStar
    }

    /// Returns `true` if the returned route always has the lowest total cost
    /// (given an admissible heuristic).
    pub fn is_optimal(self) -> bool {
        self.relaxes()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::UniformCost => "dijkstra",
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [Strategy] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl std::fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown strategy: {:?} (expected astar, dijkstra, bfs or dfs)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" => Ok(Self::AStar),
            "dijkstra" | "ucs" | "uniform-cost" => Ok(Self::UniformCost),
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("UCS".parse::<Strategy>(), Ok(Strategy::UniformCost));
        assert_eq!("breadth-first".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert_eq!("Depth-First".parse::<Strategy>(), Ok(Strategy::DepthFirst));
        assert_eq!(
            "greedy".parse::<Strategy>(),
            Err(ParseStrategyError("greedy".to_string()))
        );
    }

    #[test]
    fn policies() {
        assert!(Strategy::AStar.relaxes());
        assert!(Strategy::AStar.uses_heuristic());
        assert!(Strategy::UniformCost.relaxes());
        assert!(!Strategy::UniformCost.uses_heuristic());
        assert!(!Strategy::BreadthFirst.relaxes());
        assert!(!Strategy::DepthFirst.is_optimal());
    }
}
