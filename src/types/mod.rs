pub mod constants;
pub mod error;
pub mod geometry;
pub mod terrain;

pub use constants::*;
pub use error::TerrainError;
pub use geometry::Coordinate;
pub use terrain::TerrainClass;
