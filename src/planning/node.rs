use std::cmp::Ordering;

use crate::types::Coordinate;

/// Frontier entry for one push of a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct SearchNode {
    pub coord: Coordinate,
    /// Cost from start
    pub g: u32,
    /// Heuristic estimate to the destination
    pub h: u32,
}

impl SearchNode {
    #[inline]
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

impl Ord for SearchNode {
    /// Reversed so that `BinaryHeap` pops the lowest `f` first, then the
    /// lowest `h`, then the smallest coordinate.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f()
            .cmp(&self.f())
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
