use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

use super::constants::*;
use super::picking::Ray;
use super::transform::{euler_xyz_from_basis, Transform};

/// Orbit tuning, all optional when decoded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            distance: CAMERA_DISTANCE,
            min_distance: CAMERA_MIN_DISTANCE,
            max_distance: CAMERA_MAX_DISTANCE,
            damping: CAMERA_DAMPING,
            rotate_speed: CAMERA_ROTATE_SPEED,
            zoom_speed: CAMERA_ZOOM_SPEED,
        }
    }
}

/// Damped orbit around the origin; panning is not supported.
///
/// The eye sits at `distance` from the origin, `elevation` above the XZ plane
/// and `azimuth` around Y from +Z, so the default eye is `(0, 0, distance)`.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub config: CameraConfig,
    distance: f32,
    elevation: f32,
    azimuth: f32,
    pending_elevation: f32,
    pending_azimuth: f32,
    pending_zoom: f32,
}

impl OrbitCamera {
    pub fn new(config: CameraConfig) -> Self {
        let distance = config
            .distance
            .clamp(config.min_distance, config.max_distance);
        Self {
            config,
            distance,
            elevation: 0.0,
            azimuth: 0.0,
            pending_elevation: 0.0,
            pending_azimuth: 0.0,
            pending_zoom: 1.0,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Queue an orbit from a pointer drag of `delta` pixels.
    pub fn rotate_by_pixels(&mut self, delta: Vec2, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_azimuth -= TAU * delta.x / h * self.config.rotate_speed;
        self.pending_elevation += TAU * delta.y / h * self.config.rotate_speed;
    }

    /// Queue a dolly from a wheel step; negative `delta_y` moves closer.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        let step = 0.95_f32.powf(self.config.zoom_speed);
        if delta_y < 0.0 {
            self.pending_zoom *= step;
        } else if delta_y > 0.0 {
            self.pending_zoom /= step;
        }
    }

    /// Apply queued motion with damping. Returns whether the eye moved.
    pub fn update(&mut self) -> bool {
        let before = self.eye();
        let damping = self.config.damping.clamp(0.0, 1.0);

        self.azimuth += self.pending_azimuth * damping;
        let limit = FRAC_PI_2 - CAMERA_ELEVATION_EPS;
        self.elevation = (self.elevation + self.pending_elevation * damping).clamp(-limit, limit);
        self.pending_azimuth *= 1.0 - damping;
        self.pending_elevation *= 1.0 - damping;

        self.distance = (self.distance * self.pending_zoom)
            .clamp(self.config.min_distance, self.config.max_distance);
        self.pending_zoom = 1.0;

        let moved = self.eye().distance_squared(before) > 1e-10;
        if moved {
            log::trace!(
                "[camera] eye=({:.1},{:.1},{:.1})",
                self.eye().x,
                self.eye().y,
                self.eye().z
            );
        }
        moved
    }

    pub fn eye(&self) -> Vec3 {
        let h = self.elevation.cos() * self.distance;
        Vec3::new(
            h * self.azimuth.sin(),
            self.elevation.sin() * self.distance,
            h * self.azimuth.cos(),
        )
    }

    pub fn forward(&self) -> Vec3 {
        (-self.eye()).normalize_or_zero()
    }

    /// Camera axes `(right, up, back)` in world space.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = self.forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        (right, up, -forward)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.config.fov_deg.to_radians(),
            aspect.max(1e-6),
            self.config.near,
            self.config.far,
        )
    }

    /// World-space ray through normalized device coordinates (`-1..1`, +y up).
    pub fn ray_from_ndc(&self, ndc: Vec2, aspect: f32) -> Ray {
        let inv = (self.projection_matrix(aspect) * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = p_far.truncate() / p_far.w;
        let eye = self.eye();
        Ray::new(eye, far - eye)
    }

    /// Pose on the view axis `distance` in front of the eye, oriented like the
    /// camera. For the default camera the rotation is the identity.
    pub fn front_pose(&self, distance: f32, scale: f32) -> Transform {
        let (right, up, back) = self.basis();
        Transform::new(
            self.eye() + self.forward() * distance,
            euler_xyz_from_basis(right, up, back),
            scale,
        )
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}
