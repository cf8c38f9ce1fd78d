use serde::{Deserialize, Serialize};

use super::animator::{Timing, Timings};
use super::camera::CameraConfig;
use super::constants::*;
use super::easing::Easing;
use super::error::{ConfiguratorError, Result};

/// Scene tuning. Every field falls back to the constants when omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub radius: f32,
    pub scatter_extent: f32,
    /// Fixed seed for a reproducible scatter; entropy when absent.
    pub scatter_seed: Option<u64>,
    pub assemble: Timing,
    pub to_front: Timing,
    pub to_sphere: Timing,
    pub front_distance: f32,
    pub front_scale: f32,
    pub card_width: f32,
    pub card_height: f32,
    pub drag_threshold_px: f32,
    pub camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            radius: SPHERE_RADIUS,
            scatter_extent: SCATTER_EXTENT,
            scatter_seed: None,
            assemble: Timing::new(ASSEMBLE_SECS, Easing::EaseOutExpo),
            to_front: Timing::new(TO_FRONT_SECS, Easing::EaseOutExpo),
            to_sphere: Timing::new(TO_SPHERE_SECS, Easing::EaseOutExpo),
            front_distance: FRONT_DISTANCE,
            front_scale: FRONT_SCALE,
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            camera: CameraConfig::default(),
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfiguratorError::InvalidConfig {
            field,
            reason: format!("expected a positive finite number, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfiguratorError::InvalidConfig {
            field,
            reason: format!("expected a non-negative finite number, got {value}"),
        })
    }
}

impl SceneConfig {
    pub fn timings(&self) -> Timings {
        Timings {
            assemble: self.assemble,
            to_front: self.to_front,
            to_sphere: self.to_sphere,
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive("radius", self.radius as f64)?;
        positive("scatter_extent", self.scatter_extent as f64)?;
        non_negative("assemble.secs", self.assemble.secs)?;
        non_negative("to_front.secs", self.to_front.secs)?;
        non_negative("to_sphere.secs", self.to_sphere.secs)?;
        positive("front_distance", self.front_distance as f64)?;
        positive("front_scale", self.front_scale as f64)?;
        positive("card_width", self.card_width as f64)?;
        positive("card_height", self.card_height as f64)?;
        non_negative("drag_threshold_px", self.drag_threshold_px as f64)?;

        let cam = &self.camera;
        positive("camera.fov_deg", cam.fov_deg as f64)?;
        if cam.fov_deg >= 180.0 {
            return Err(ConfiguratorError::InvalidConfig {
                field: "camera.fov_deg",
                reason: format!("must be below 180, got {}", cam.fov_deg),
            });
        }
        positive("camera.near", cam.near as f64)?;
        positive("camera.far", cam.far as f64)?;
        if cam.far <= cam.near {
            return Err(ConfiguratorError::InvalidConfig {
                field: "camera.far",
                reason: format!("must exceed near ({}), got {}", cam.near, cam.far),
            });
        }
        positive("camera.min_distance", cam.min_distance as f64)?;
        positive("camera.max_distance", cam.max_distance as f64)?;
        if cam.max_distance < cam.min_distance {
            return Err(ConfiguratorError::InvalidConfig {
                field: "camera.max_distance",
                reason: format!(
                    "must not be below min_distance ({}), got {}",
                    cam.min_distance, cam.max_distance
                ),
            });
        }
        positive("camera.distance", cam.distance as f64)?;
        non_negative("camera.damping", cam.damping as f64)?;
        if cam.damping > 1.0 {
            return Err(ConfiguratorError::InvalidConfig {
                field: "camera.damping",
                reason: format!("must be at most 1, got {}", cam.damping),
            });
        }
        non_negative("camera.rotate_speed", cam.rotate_speed as f64)?;
        non_negative("camera.zoom_speed", cam.zoom_speed as f64)?;
        Ok(())
    }
}
