pub mod grid2d;
pub mod terrain;

pub use grid2d::Grid2d;
pub use terrain::{NEIGHBOR_OFFSETS, TerrainGrid};
