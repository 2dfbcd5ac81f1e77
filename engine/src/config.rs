use serde::{Deserialize, Serialize};

use crate::FovError;

/// Tunable visibility engine settings.
///
/// Deserializes from IDM with kebab-case field names, missing fields get
/// their default values:
///
/// ```notrust
/// max-radius 40
/// light-walls true
/// tile-width 16
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FovConfig {
    /// How many cells away from the viewer each octant scan may go.
    pub max_radius: i32,
    /// Show walls that are hit by light.
    pub light_walls: bool,
    /// Display size of one map tile in pixels.
    pub tile_width: i32,
}

impl Default for FovConfig {
    fn default() -> Self {
        FovConfig {
            max_radius: fov::MAX_RADIUS,
            light_walls: true,
            tile_width: 32,
        }
    }
}

impl FovConfig {
    pub fn validate(&self) -> Result<(), FovError> {
        if self.max_radius < 1 {
            return Err(FovError::BadRadius(self.max_radius));
        }
        if self.tile_width < 1 {
            return Err(FovError::BadTileWidth(self.tile_width));
        }
        Ok(())
    }
}
