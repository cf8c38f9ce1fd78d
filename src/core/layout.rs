use glam::{DVec3, Vec3};
use std::f64::consts::PI;

use super::error::{ConfiguratorError, Result};
use super::transform::{look_at_rotation, Transform};

/// Resting place of one catalog item on the sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePoint {
    pub position: Vec3,
    /// XYZ Euler angles; the item's local +Z points radially outward.
    pub rotation: Vec3,
}

impl SpherePoint {
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.rotation, 1.0)
    }
}

/// Cartesian point for spherical coordinates, with `phi` measured from +Y and
/// `theta` around Y starting at +Z.
#[inline]
pub fn spherical_to_cartesian(radius: f64, phi: f64, theta: f64) -> DVec3 {
    let sin_phi_r = phi.sin() * radius;
    DVec3::new(
        sin_phi_r * theta.sin(),
        phi.cos() * radius,
        sin_phi_r * theta.cos(),
    )
}

/// Place item `index` of `count` on a sphere of `radius`.
///
/// Spiral sampling: `phi = acos(-1 + 2i/n)`, `theta = sqrt(n*pi) * phi`. The
/// facing is a look-at toward `position * 2`, so items face away from the
/// center. Everything runs in f64 before narrowing, which keeps the poles'
/// headings stable. Callers must keep `index < count`.
pub fn sphere_point(index: usize, count: usize, radius: f32) -> SpherePoint {
    let n = count as f64;
    let phi = (-1.0 + (2.0 * index as f64) / n).clamp(-1.0, 1.0).acos();
    let theta = (n * PI).sqrt() * phi;
    let position = spherical_to_cartesian(f64::from(radius), phi, theta);
    let rotation = look_at_rotation(position, position * 2.0, DVec3::Y);
    SpherePoint {
        position: position.as_vec3(),
        rotation,
    }
}

/// Layout for a whole catalog. An empty catalog yields an empty layout.
pub fn sphere_layout(count: usize, radius: f32) -> Vec<SpherePoint> {
    (0..count).map(|i| sphere_point(i, count, radius)).collect()
}

/// Like [`sphere_layout`] but reports an empty catalog to the caller.
pub fn checked_sphere_layout(count: usize, radius: f32) -> Result<Vec<SpherePoint>> {
    if count == 0 {
        return Err(ConfiguratorError::InvalidCatalogSize { count });
    }
    log::debug!("[layout] {} points on radius {}", count, radius);
    Ok(sphere_layout(count, radius))
}
