use super::constants::*;

/// Classification of a single terrain cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerrainClass {
    /// The robot can not move on water.
    Water,
    Level1,
    Level2,
    Level3,
    Level4,
    /// Render-only marker written by route overlay.
    RobotPath,
    #[default]
    Unknown,
}

impl TerrainClass {
    pub const ALL: [TerrainClass; 7] = [
        TerrainClass::Water,
        TerrainClass::Level1,
        TerrainClass::Level2,
        TerrainClass::Level3,
        TerrainClass::Level4,
        TerrainClass::RobotPath,
        TerrainClass::Unknown,
    ];

    /// Traversal cost of entering a cell of this class, `None` if the robot
    /// can not enter it.
    #[inline]
    pub fn cost(self) -> Option<u32> {
        match self {
            TerrainClass::Level1 => Some(1),
            TerrainClass::Level2 => Some(2),
            TerrainClass::Level3 => Some(3),
            TerrainClass::Level4 => Some(4),
            TerrainClass::Water | TerrainClass::RobotPath | TerrainClass::Unknown => None,
        }
    }

    #[inline]
    pub fn is_traversable(self) -> bool {
        self.cost().is_some()
    }

    /// Palette lookup. Anything not in the palette is `Unknown`.
    pub fn from_rgb(rgb: Rgb) -> Self {
        match rgb {
            RGB_WATER => TerrainClass::Water,
            RGB_LEVEL_1 => TerrainClass::Level1,
            RGB_LEVEL_2 => TerrainClass::Level2,
            RGB_LEVEL_3 => TerrainClass::Level3,
            RGB_LEVEL_4 => TerrainClass::Level4,
            RGB_ROBOT_PATH => TerrainClass::RobotPath,
            _ => TerrainClass::Unknown,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        match self {
            TerrainClass::Water => RGB_WATER,
            TerrainClass::Level1 => RGB_LEVEL_1,
            TerrainClass::Level2 => RGB_LEVEL_2,
            TerrainClass::Level3 => RGB_LEVEL_3,
            TerrainClass::Level4 => RGB_LEVEL_4,
            TerrainClass::RobotPath => RGB_ROBOT_PATH,
            TerrainClass::Unknown => RGB_UNKNOWN,
        }
    }
}
