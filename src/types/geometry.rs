//! Cell addressing types shared by the terrain grid and the planner.

use std::fmt;
use std::str::FromStr;

use glam::UVec2;
use serde::{Deserialize, Serialize};

/// A grid cell addressed as (row, column).
///
/// Ordering is lexicographic by (row, column), which the planner relies on as
/// its final tie-breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Coordinate {
    pub row: u32,
    pub col: u32,
}

impl Coordinate {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Shift by a signed (row, column) offset. Returns `None` when the result
    /// would be negative or overflow.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub fn manhattan(&self, other: &Coordinate) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when `other` differs by exactly one step along one axis.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan(other) == 1
    }
}

/// Grid storage is keyed with x = column, y = row.
impl From<Coordinate> for UVec2 {
    fn from(coord: Coordinate) -> Self {
        UVec2::new(coord.col, coord.row)
    }
}

impl From<UVec2> for Coordinate {
    fn from(pos: UVec2) -> Self {
        Self::new(pos.y, pos.x)
    }
}

impl From<[u32; 2]> for Coordinate {
    fn from([row, col]: [u32; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for [u32; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.row, coord.col]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `"row,col"`, as accepted on the command line.
impl FromStr for Coordinate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
        let row = row
            .trim()
            .parse::<u32>()
            .map_err(|err| format!("invalid row `{row}`: {err}"))?;
        let col = col
            .trim()
            .parse::<u32>()
            .map_err(|err| format!("invalid column `{col}`: {err}"))?;
        Ok(Self::new(row, col))
    }
}
