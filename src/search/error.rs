// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Error conditions which may occur during [find_route](crate::find_route).
///
/// Missing endpoints and unreachable goals are not errors - they produce
/// an empty [Route](crate::Route) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Route search has exceeded its limit of node expansions.
    /// Either the nodes are really far apart, or no route exists.
    ///
    /// Concluding that no route exists requires traversing everything reachable
    /// from the start node. The step limit lets callers bound that work.
    StepLimitExceeded(usize),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepLimitExceeded(limit) => write!(f, "step limit of {} exceeded", limit),
        }
    }
}

impl std::error::Error for SearchError {}
