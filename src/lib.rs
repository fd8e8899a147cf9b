pub mod config;
pub mod grid;
pub mod loaders;
pub mod planning;
pub mod types;
pub mod visualization;

pub use config::{MissionConfig, load_mission};
pub use grid::TerrainGrid;
pub use loaders::ppm::{load_terrain, save_terrain};
pub use planning::{AStarPlanner, PlanFailure, PlanResult, PlannerConfig, Route, plan};
pub use types::{Coordinate, TerrainClass, TerrainError};
