//! Fixed terrain palette as stored in the source images.

/// An 8-bit RGB triplet.
pub type Rgb = [u8; 3];

pub const RGB_WATER: Rgb = [158, 217, 246];
pub const RGB_LEVEL_1: Rgb = [203, 226, 163];
pub const RGB_LEVEL_2: Rgb = [255, 250, 188];
pub const RGB_LEVEL_3: Rgb = [251, 203, 114];
pub const RGB_LEVEL_4: Rgb = [222, 163, 83];
pub const RGB_ROBOT_PATH: Rgb = [255, 0, 0];
/// Unknown cells are rendered black.
pub const RGB_UNKNOWN: Rgb = [0, 0, 0];

/// Bytes per pixel in the decoded terrain raster.
pub const CHANNELS: usize = 3;
