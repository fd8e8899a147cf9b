//! Route checks against a terrain.

use std::collections::HashSet;

use crate::grid::TerrainGrid;
use crate::types::Coordinate;

/// Sum of the terrain cost of every cell after the first. `None` if any of
/// those cells is not traversable.
pub fn route_cost(terrain: &TerrainGrid, route: &[Coordinate]) -> Option<u32> {
    route
        .iter()
        .skip(1)
        .try_fold(0u32, |acc, coord| Some(acc + terrain.cost(*coord)?))
}

/// A route is valid when it is non-empty, every cell is traversable, every
/// consecutive pair is 4-adjacent and no cell repeats.
pub fn is_valid_route(terrain: &TerrainGrid, route: &[Coordinate]) -> bool {
    if route.is_empty() {
        return false;
    }
    if !route.iter().all(|c| terrain.is_traversable(*c)) {
        return false;
    }
    if !route.windows(2).all(|w| w[0].is_adjacent(&w[1])) {
        return false;
    }
    let mut seen = HashSet::with_capacity(route.len());
    route.iter().all(|c| seen.insert(*c))
}
