//! Classified terrain map: cost lookup, adjacency and route overlay.

use glam::UVec2;
use log::debug;

use super::Grid2d;
use crate::types::{CHANNELS, Coordinate, TerrainClass, TerrainError};

/// 4-connected neighbor offsets as (d_row, d_col): north, south, west, east.
/// The order is fixed so that planner tie-breaking is reproducible.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Terrain map describing the environment in which the robot moves.
///
/// Rows run over `[0, height)` and columns over `[0, width)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainGrid {
    cells: Grid2d<TerrainClass>,
}

impl TerrainGrid {
    /// Classify a row-major RGB raster against the terrain palette.
    pub fn classify(width: u32, height: u32, triplets: &[u8]) -> Result<Self, TerrainError> {
        if triplets.len() % CHANNELS != 0 {
            return Err(TerrainError::MalformedTerrainInput(format!(
                "raster length {} is not a multiple of {CHANNELS}",
                triplets.len()
            )));
        }

        let classes: Vec<TerrainClass> = triplets
            .chunks_exact(CHANNELS)
            .map(|px| TerrainClass::from_rgb([px[0], px[1], px[2]]))
            .collect();

        let grid = Self::from_classes(width, height, classes)?;
        debug!(
            "classified {}x{} terrain, {} unknown cells",
            width,
            height,
            grid.count(TerrainClass::Unknown)
        );
        Ok(grid)
    }

    pub fn from_classes(
        width: u32,
        height: u32,
        classes: Vec<TerrainClass>,
    ) -> Result<Self, TerrainError> {
        Ok(Self {
            cells: Grid2d::new(width, height, classes)?,
        })
    }

    pub fn filled(width: u32, height: u32, class: TerrainClass) -> Self {
        Self {
            cells: Grid2d::new_with_value(width, height, class),
        }
    }

    pub fn width(&self) -> u32 {
        self.cells.width()
    }

    pub fn height(&self) -> u32 {
        self.cells.height()
    }

    pub fn len(&self) -> usize {
        self.cells.data().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.data().is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&UVec2::from(coord))
    }

    pub fn get(&self, coord: Coordinate) -> Option<TerrainClass> {
        self.cells.get(&coord.into()).copied()
    }

    /// Cost of entering `coord`. `None` for water, unknown, path markers and
    /// cells outside the map.
    #[inline]
    pub fn cost(&self, coord: Coordinate) -> Option<u32> {
        self.get(coord).and_then(TerrainClass::cost)
    }

    #[inline]
    pub fn is_traversable(&self, coord: Coordinate) -> bool {
        self.cost(coord).is_some()
    }

    /// Traversable 4-neighbors of `coord` in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(d_row, d_col)| coord.offset(d_row, d_col))
            .filter(move |n| self.is_traversable(*n))
    }

    /// Number of cells of the given class.
    pub fn count(&self, class: TerrainClass) -> usize {
        self.cells.data().iter().filter(|c| **c == class).count()
    }

    /// Copy of this terrain with every route cell marked as `RobotPath`.
    pub fn overlay(&self, route: &[Coordinate]) -> Result<TerrainGrid, TerrainError> {
        let mut marked = self.clone();
        marked.overlay_in_place(route)?;
        Ok(marked)
    }

    /// Mark every route cell as `RobotPath`. Either all cells are marked or,
    /// if any cell lies outside the map, none are.
    pub fn overlay_in_place(&mut self, route: &[Coordinate]) -> Result<(), TerrainError> {
        if let Some(outside) = route.iter().find(|c| !self.contains(**c)) {
            return Err(TerrainError::OutOfBounds(format!(
                "route cell {} outside terrain {}x{}",
                outside,
                self.width(),
                self.height()
            )));
        }
        for coord in route {
            self.cells.set(&UVec2::from(*coord), TerrainClass::RobotPath)?;
        }
        Ok(())
    }

    /// Row-major RGB raster using the palette colors.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len() * CHANNELS);
        for class in self.cells.data() {
            bytes.extend_from_slice(&class.to_rgb());
        }
        bytes
    }

    /// Cells paired with their coordinate in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, TerrainClass)> + '_ {
        self.cells
            .iter()
            .map(|(pos, class)| (Coordinate::from(pos), *class))
    }
}
