use glam::UVec2;

use crate::types::TerrainError;

/// Dense row-major 2D storage. `x` is the column and `y` the row; every flat
/// index in the crate goes through [`Grid2d::index`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2d<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T> Grid2d<T> {
    pub fn new(width: u32, height: u32, data: Vec<T>) -> Result<Self, TerrainError> {
        let expected_len = (width as usize) * (height as usize);
        if data.len() != expected_len {
            return Err(TerrainError::MalformedTerrainInput(format!(
                "data length {} does not match map size {}x{} ({} cells)",
                data.len(),
                width,
                height,
                expected_len
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn new_with_value(width: u32, height: u32, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            data: vec![value; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, pos: &UVec2) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn get(&self, pos: &UVec2) -> Option<&T> {
        if !self.contains(pos) {
            return None;
        }
        let idx = self.index(pos);
        Some(&self.data[idx])
    }

    pub fn set(&mut self, pos: &UVec2, value: T) -> Result<(), TerrainError> {
        if !self.contains(pos) {
            return Err(TerrainError::OutOfBounds(format!(
                "cell (x={}, y={}) out of bounds for map {}x{}",
                pos.x, pos.y, self.width, self.height
            )));
        }
        let idx = self.index(pos);
        self.data[idx] = value;
        Ok(())
    }

    #[inline]
    fn index(&self, pos: &UVec2) -> usize {
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Cells paired with their position, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (UVec2, &T)> + '_ {
        let width = self.width.max(1);
        self.data.iter().enumerate().map(move |(idx, value)| {
            let idx = idx as u32;
            (UVec2::new(idx % width, idx / width), value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_data_length() {
        let err = Grid2d::new(3, 2, vec![0u8; 5]).unwrap_err();
        assert!(matches!(err, TerrainError::MalformedTerrainInput(_)));
    }

    #[test]
    fn row_major_layout() {
        let grid = Grid2d::new(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(grid.get(&UVec2::new(2, 0)), Some(&2));
        assert_eq!(grid.get(&UVec2::new(0, 1)), Some(&3));
        assert_eq!(grid.get(&UVec2::new(3, 0)), None);
        assert_eq!(grid.get(&UVec2::new(0, 2)), None);
    }

    #[test]
    fn set_out_of_bounds_fails() {
        let mut grid = Grid2d::new_with_value(2, 2, 0u8);
        assert!(grid.set(&UVec2::new(1, 1), 9).is_ok());
        assert_eq!(grid.get(&UVec2::new(1, 1)), Some(&9));
        assert!(matches!(
            grid.set(&UVec2::new(2, 0), 1),
            Err(TerrainError::OutOfBounds(_))
        ));
    }

    #[test]
    fn iter_yields_positions_in_storage_order() {
        let grid = Grid2d::new(2, 2, vec!['a', 'b', 'c', 'd']).unwrap();
        let cells: Vec<_> = grid.iter().map(|(pos, v)| (pos, *v)).collect();
        assert_eq!(
            cells,
            vec![
                (UVec2::new(0, 0), 'a'),
                (UVec2::new(1, 0), 'b'),
                (UVec2::new(0, 1), 'c'),
                (UVec2::new(1, 1), 'd'),
            ]
        );
    }
}
