//! Mission configuration loaded from YAML.
//!
//! ```yaml
//! start: [30, 2026]
//! destination: [2030, 25]
//! max_expansions: 5000000   # optional
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::planning::PlannerConfig;
use crate::types::{Coordinate, TerrainError};

pub const DEFAULT_START: Coordinate = Coordinate::new(30, 2026);
pub const DEFAULT_DESTINATION: Coordinate = Coordinate::new(2030, 25);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MissionConfig {
    #[serde(default = "default_start")]
    pub start: Coordinate,
    #[serde(default = "default_destination")]
    pub destination: Coordinate,
    #[serde(default, deserialize_with = "deserialize_expansions")]
    pub max_expansions: Option<usize>,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            destination: DEFAULT_DESTINATION,
            max_expansions: None,
        }
    }
}

fn default_start() -> Coordinate {
    DEFAULT_START
}

fn default_destination() -> Coordinate {
    DEFAULT_DESTINATION
}

fn deserialize_expansions<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<usize>::deserialize(deserializer)?;
    match value {
        Some(0) => Err(serde::de::Error::custom(
            "max_expansions must be greater than zero",
        )),
        other => Ok(other),
    }
}

impl MissionConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TerrainError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            max_expansions: self.max_expansions,
        }
    }
}

pub fn load_mission(path: impl AsRef<Path>) -> Result<MissionConfig, TerrainError> {
    let yaml_str = std::fs::read_to_string(path.as_ref())?;
    MissionConfig::from_yaml_str(&yaml_str)
}
