//! Planner configuration and result types.

use thiserror::Error;

use crate::types::Coordinate;

/// Ordered list of cells from start to destination, inclusive. Empty when no
/// route was found.
pub type Route = Vec<Coordinate>;

/// A* planner configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Give up after settling this many cells. `None` searches until the
    /// frontier is exhausted.
    pub max_expansions: Option<usize>,
}

impl PlannerConfig {
    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Reason a planning call produced no route
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlanFailure {
    /// Start or destination is outside the map or not traversable.
    #[error("start or destination is outside the terrain or not traversable")]
    InvalidEndpoint,
    /// The frontier emptied before the destination was reached.
    #[error("destination is unreachable from start")]
    Unreachable,
    #[error("expansion limit reached before the destination")]
    ExpansionLimit,
}

/// Result of a planning call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanResult {
    pub route: Route,
    /// Sum of the terrain cost of every route cell after the first.
    pub cost: u32,
    /// Number of cells settled during search
    pub nodes_expanded: usize,
    pub failure: Option<PlanFailure>,
}

impl PlanResult {
    pub(super) fn found(route: Route, cost: u32, nodes_expanded: usize) -> Self {
        Self {
            route,
            cost,
            nodes_expanded,
            failure: None,
        }
    }

    pub(super) fn failed(reason: PlanFailure, nodes_expanded: usize) -> Self {
        Self {
            route: Vec::new(),
            cost: 0,
            nodes_expanded,
            failure: Some(reason),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn into_result(self) -> Result<Route, PlanFailure> {
        match self.failure {
            None => Ok(self.route),
            Some(reason) => Err(reason),
        }
    }
}
