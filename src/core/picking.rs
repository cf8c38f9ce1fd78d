use glam::{Vec2, Vec3};

use super::transform::Transform;

/// Half-line in world space. `dir` is expected to be normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    // Origin inside the sphere still counts as a hit.
    let t = if -b - sq >= 0.0 { -b - sq } else { -b + sq };
    (t >= 0.0).then_some(t)
}

/// Distance along `ray` to a card rectangle lying in the local XY plane of
/// `transform`, or `None` on a miss. Both faces are hittable.
pub fn ray_card(ray: &Ray, transform: &Transform, half_extents: Vec2) -> Option<f32> {
    let half = half_extents * transform.scale.abs();
    if ray_sphere(ray.origin, ray.dir, transform.position, half.length()).is_none() {
        return None;
    }
    let rot = transform.rotation_matrix();
    let normal = rot.z_axis;
    let denom = normal.dot(ray.dir);
    if denom.abs() < 1e-8 {
        return None;
    }
    let t = normal.dot(transform.position - ray.origin) / denom;
    if t < 0.0 {
        return None;
    }
    let local = rot.transpose() * (ray.at(t) - transform.position);
    (local.x.abs() <= half.x && local.y.abs() <= half.y).then_some(t)
}

/// Nearest card hit among `(index, transform)` candidates.
pub fn pick_nearest<'a, I>(ray: &Ray, candidates: I, half_extents: Vec2) -> Option<usize>
where
    I: IntoIterator<Item = (usize, &'a Transform)>,
{
    let mut best = None::<(usize, f32)>;
    for (i, transform) in candidates {
        if let Some(t) = ray_card(ray, transform, half_extents) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
