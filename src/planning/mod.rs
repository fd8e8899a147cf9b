//! Route planning on the terrain grid.
//!
//! ```rust,ignore
//! use terrain_planner::planning::plan;
//!
//! let result = plan(start, destination, &terrain);
//! if result.is_success() {
//!     println!("route with {} cells, cost {}", result.route.len(), result.cost);
//! }
//! ```

pub mod astar;
mod node;
pub mod route;
pub mod types;

pub use astar::{AStarPlanner, heuristic};
pub use route::{is_valid_route, route_cost};
pub use types::{PlanFailure, PlanResult, PlannerConfig, Route};

use crate::grid::TerrainGrid;
use crate::types::Coordinate;

/// Plan with the default configuration.
pub fn plan(start: Coordinate, destination: Coordinate, terrain: &TerrainGrid) -> PlanResult {
    AStarPlanner::with_defaults(terrain).plan(start, destination)
}
