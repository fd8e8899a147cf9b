//! A* planner over a [`TerrainGrid`].

use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use super::node::SearchNode;
use super::types::{PlanFailure, PlanResult, PlannerConfig, Route};
use crate::grid::TerrainGrid;
use crate::types::Coordinate;

/// A* pathfinder. Borrows the terrain read-only for its whole lifetime.
pub struct AStarPlanner<'a> {
    terrain: &'a TerrainGrid,
    config: PlannerConfig,
}

impl<'a> AStarPlanner<'a> {
    pub fn new(terrain: &'a TerrainGrid, config: PlannerConfig) -> Self {
        Self { terrain, config }
    }

    pub fn with_defaults(terrain: &'a TerrainGrid) -> Self {
        Self::new(terrain, PlannerConfig::default())
    }

    /// Find a minimum-cost route from `start` to `destination`.
    pub fn plan(&self, start: Coordinate, destination: Coordinate) -> PlanResult {
        trace!("[AStar] plan: start={} destination={}", start, destination);

        if !self.terrain.is_traversable(start) || !self.terrain.is_traversable(destination) {
            debug!(
                "[AStar] FAILED: InvalidEndpoint start={} ({:?}) destination={} ({:?})",
                start,
                self.terrain.get(start),
                destination,
                self.terrain.get(destination)
            );
            return PlanResult::failed(PlanFailure::InvalidEndpoint, 0);
        }

        if start == destination {
            return PlanResult::found(vec![start], 0, 0);
        }

        let mut frontier = BinaryHeap::new();
        let mut settled: HashSet<Coordinate> = HashSet::new();
        let mut parent: HashMap<Coordinate, Coordinate> = HashMap::new();
        let mut best_g: HashMap<Coordinate, u32> = HashMap::new();

        best_g.insert(start, 0);
        frontier.push(SearchNode {
            coord: start,
            g: 0,
            h: heuristic(start, destination),
        });

        let mut nodes_expanded = 0;

        while let Some(current) = frontier.pop() {
            // Stale duplicate of an already-settled cell
            if !settled.insert(current.coord) {
                continue;
            }
            nodes_expanded += 1;

            if current.coord == destination {
                return self.reconstruct(&parent, start, destination, current.g, nodes_expanded);
            }

            if let Some(limit) = self.config.max_expansions {
                if nodes_expanded >= limit {
                    debug!(
                        "[AStar] FAILED: ExpansionLimit ({} nodes)",
                        nodes_expanded
                    );
                    return PlanResult::failed(PlanFailure::ExpansionLimit, nodes_expanded);
                }
            }

            for neighbor in self.terrain.neighbors(current.coord) {
                if settled.contains(&neighbor) {
                    continue;
                }
                // neighbors() only yields traversable cells
                let Some(step) = self.terrain.cost(neighbor) else {
                    continue;
                };

                let tentative_g = current.g + step;
                let improves = best_g
                    .get(&neighbor)
                    .is_none_or(|&known| tentative_g < known);
                if improves {
                    best_g.insert(neighbor, tentative_g);
                    parent.insert(neighbor, current.coord);
                    frontier.push(SearchNode {
                        coord: neighbor,
                        g: tentative_g,
                        h: heuristic(neighbor, destination),
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: Unreachable after expanding {} nodes",
            nodes_expanded
        );
        PlanResult::failed(PlanFailure::Unreachable, nodes_expanded)
    }

    /// Walk `parent` back from the destination, then reverse into
    /// start -> destination order.
    fn reconstruct(
        &self,
        parent: &HashMap<Coordinate, Coordinate>,
        start: Coordinate,
        destination: Coordinate,
        cost: u32,
        nodes_expanded: usize,
    ) -> PlanResult {
        let mut route: Route = vec![destination];
        let mut current = destination;

        while current != start {
            match parent.get(&current) {
                Some(&prev) => {
                    route.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        route.reverse();

        trace!(
            "[AStar] SUCCESS: route length={} cells, cost={}, nodes_expanded={}",
            route.len(),
            cost,
            nodes_expanded
        );

        PlanResult::found(route, cost, nodes_expanded)
    }
}

/// Manhattan distance. Admissible because every step costs at least 1.
#[inline]
pub fn heuristic(a: Coordinate, b: Coordinate) -> u32 {
    a.manhattan(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TerrainClass;

    fn grid_from_rows(rows: &[&str]) -> TerrainGrid {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let classes = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| match c {
                '1' => TerrainClass::Level1,
                '2' => TerrainClass::Level2,
                '3' => TerrainClass::Level3,
                '4' => TerrainClass::Level4,
                '~' => TerrainClass::Water,
                _ => TerrainClass::Unknown,
            })
            .collect();
        TerrainGrid::from_classes(width, height, classes).unwrap()
    }

    #[test]
    fn three_by_three_unit_grid() {
        let terrain = TerrainGrid::filled(3, 3, TerrainClass::Level1);
        let planner = AStarPlanner::with_defaults(&terrain);

        let result = planner.plan(Coordinate::new(0, 0), Coordinate::new(2, 2));

        assert!(result.is_success());
        assert_eq!(result.route.len(), 5);
        assert_eq!(result.cost, 4);
        assert_eq!(result.route[0], Coordinate::new(0, 0));
        assert_eq!(*result.route.last().unwrap(), Coordinate::new(2, 2));
    }

    #[test]
    fn start_equals_destination() {
        let terrain = TerrainGrid::filled(2, 2, TerrainClass::Level3);
        let planner = AStarPlanner::with_defaults(&terrain);
        let cell = Coordinate::new(1, 1);

        let result = planner.plan(cell, cell);

        assert_eq!(result.route, vec![cell]);
        assert_eq!(result.cost, 0);
    }

    #[test]
    fn start_outside_map_is_invalid() {
        let terrain = TerrainGrid::filled(3, 3, TerrainClass::Level1);
        let planner = AStarPlanner::with_defaults(&terrain);

        let result = planner.plan(Coordinate::new(3, 0), Coordinate::new(0, 0));

        assert!(result.route.is_empty());
        assert_eq!(result.failure, Some(PlanFailure::InvalidEndpoint));
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test]
    fn destination_on_water_is_invalid() {
        let terrain = grid_from_rows(&["11~"]);
        let planner = AStarPlanner::with_defaults(&terrain);

        let result = planner.plan(Coordinate::new(0, 0), Coordinate::new(0, 2));

        assert_eq!(result.failure, Some(PlanFailure::InvalidEndpoint));
    }

    #[test]
    fn destination_enclosed_by_water() {
        let terrain = grid_from_rows(&[
            "11111", //
            "11~11", //
            "1~1~1", //
            "11~11",
        ]);
        let planner = AStarPlanner::with_defaults(&terrain);

        let result = planner.plan(Coordinate::new(0, 0), Coordinate::new(2, 2));

        assert!(result.route.is_empty());
        assert_eq!(result.failure, Some(PlanFailure::Unreachable));
        assert!(result.nodes_expanded > 0);
    }

    #[test]
    fn detours_around_expensive_terrain() {
        // Straight across costs 4 + 4 + 1 = 9; around the top costs 5.
        let terrain = grid_from_rows(&[
            "11111", //
            "11441", //
        ]);
        let planner = AStarPlanner::with_defaults(&terrain);

        let result = planner.plan(Coordinate::new(1, 1), Coordinate::new(1, 4));

        assert!(result.is_success());
        assert_eq!(result.cost, 5);
        assert!(!result.route.contains(&Coordinate::new(1, 2)));
    }

    #[test]
    fn expansion_limit_stops_search() {
        let terrain = TerrainGrid::filled(20, 20, TerrainClass::Level1);
        let planner = AStarPlanner::new(&terrain, PlannerConfig::with_max_expansions(5));

        let result = planner.plan(Coordinate::new(0, 0), Coordinate::new(19, 19));

        assert_eq!(result.failure, Some(PlanFailure::ExpansionLimit));
        assert_eq!(result.nodes_expanded, 5);
        assert!(result.route.is_empty());
    }

    #[test]
    fn tie_break_prefers_cells_closer_to_goal() {
        let terrain = TerrainGrid::filled(3, 3, TerrainClass::Level1);
        let planner = AStarPlanner::with_defaults(&terrain);

        let result = planner.plan(Coordinate::new(0, 0), Coordinate::new(2, 2));

        // Equal f and h at each step, so the smaller coordinate wins: (0, 1)
        // before (1, 0), and so on along the top row.
        assert_eq!(
            result.route,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(1, 2),
                Coordinate::new(2, 2),
            ]
        );
    }
}
