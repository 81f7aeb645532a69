//! Scene editor settings.

use crate::error::{Result, SceneError};
use polydraw_core::POINT_SIZE;
use serde::{Deserialize, Serialize};

/// Tunable settings for a scene.
///
/// `point_size` is display data only: the render collaborator uses it as
/// the marker diameter. Collision radii stay fixed at the core policy so
/// proximity behaves the same regardless of how the markers are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    /// Canvas width, in canvas units.
    pub canvas_width: f64,
    /// Canvas height, in canvas units.
    pub canvas_height: f64,
    /// Diameter of a point marker when drawn.
    pub point_size: f64,
    /// Delay before a hover highlight reverts to the default color, in
    /// milliseconds.
    pub hover_revert_ms: u64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            canvas_width: 600.0,
            canvas_height: 600.0,
            point_size: POINT_SIZE,
            hover_revert_ms: 1000,
        }
    }
}

impl SceneSettings {
    /// Validates the settings, rejecting non-positive dimensions.
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas_width > 0.0) || !(self.canvas_height > 0.0) {
            return Err(SceneError::InvalidSettings {
                reason: format!(
                    "canvas dimensions must be positive, got {}x{}",
                    self.canvas_width, self.canvas_height
                ),
            });
        }
        if !(self.point_size > 0.0) {
            return Err(SceneError::InvalidSettings {
                reason: format!("point size must be positive, got {}", self.point_size),
            });
        }
        Ok(())
    }
}
