use image::{Rgb, RgbImage};

use crate::grid::TerrainGrid;
use crate::types::{Coordinate, RGB_UNKNOWN};

/// Render a terrain grid with its palette colors.
///
/// Row 0 is the top line of the image, matching the layout the terrain was
/// decoded from, so a load/render cycle reproduces the source pixels for
/// every palette color.
pub fn terrain_to_image(grid: &TerrainGrid) -> RgbImage {
    RgbImage::from_fn(grid.width(), grid.height(), |x, y| {
        let rgb = grid
            .get(Coordinate::new(y, x))
            .map(|class| class.to_rgb())
            .unwrap_or(RGB_UNKNOWN);
        Rgb(rgb)
    })
}
