// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Best-first route search over a [Graph](crate::Graph).
//!
//! [find_route] drives a [Frontier] (open set) and a [ClosedSet]
//! (best costs and predecessors) with one of four [Strategies](Strategy).
//! Both structures are created anew for every call.

mod closed;
mod engine;
mod error;
mod frontier;
mod heuristic;
mod strategy;

pub use closed::ClosedSet;
pub use engine::{find_route, Options, Route};
pub use error::SearchError;
pub use frontier::{Frontier, FrontierEntry};
pub use heuristic::Heuristic;
pub use strategy::{ParseStrategyError, Strategy};
