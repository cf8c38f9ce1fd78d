use bytemuck::{Pod, Zeroable};
use glam::{DVec3, Mat3, Vec3};

// Past this |sin(pitch)| the XYZ decomposition is treated as gimbal-locked.
const GIMBAL_LIMIT: f64 = 0.9999999;

/// Position, XYZ Euler rotation (radians) and uniform scale of one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    pub fn new(position: Vec3, rotation: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Component-wise blend. Rotation is blended as plain Euler angles, not
    /// spherically.
    pub fn lerp(&self, other: &Transform, t: f32) -> Transform {
        Transform {
            position: self.position.lerp(other.position, t),
            rotation: self.rotation.lerp(other.rotation, t),
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }

    pub fn rotation_matrix(&self) -> Mat3 {
        rotation_matrix(self.rotation)
    }
}

/// Rotation matrix for XYZ Euler angles (`Rx * Ry * Rz`).
#[inline]
pub fn rotation_matrix(euler: Vec3) -> Mat3 {
    Mat3::from_rotation_x(euler.x) * Mat3::from_rotation_y(euler.y) * Mat3::from_rotation_z(euler.z)
}

/// Extract XYZ Euler angles from the columns of an orthonormal basis.
pub fn euler_xyz_from_basis(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Vec3 {
    euler_xyz_from_basis_f64(x_axis.as_dvec3(), y_axis.as_dvec3(), z_axis.as_dvec3()).as_vec3()
}

pub fn euler_xyz_from_basis_f64(x_axis: DVec3, y_axis: DVec3, z_axis: DVec3) -> DVec3 {
    // Row/column naming follows m{row}{col}; columns are the basis axes.
    let (m11, m12, m13) = (x_axis.x, y_axis.x, z_axis.x);
    let (m22, m23) = (y_axis.y, z_axis.y);
    let (m32, m33) = (y_axis.z, z_axis.z);

    let y = m13.clamp(-1.0, 1.0).asin();
    if m13.abs() < GIMBAL_LIMIT {
        DVec3::new((-m23).atan2(m33), y, (-m12).atan2(m11))
    } else {
        DVec3::new(m32.atan2(m22), y, 0.0)
    }
}

/// Rotation that points an object's local +Z from `position` toward `target`.
///
/// The basis is built in f64 and only the angles are narrowed, so points a
/// hair off the up axis keep their own heading. Only an exactly parallel `up`
/// nudges the direction by 1e-4.
pub fn look_at_rotation(position: DVec3, target: DVec3, up: DVec3) -> Vec3 {
    let mut z = target - position;
    if z.length_squared() == 0.0 {
        z.z = 1.0;
    }
    z = z.normalize();

    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        if up.z.abs() == 1.0 {
            z.x += 1e-4;
        } else {
            z.z += 1e-4;
        }
        z = z.normalize();
        x = up.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    euler_xyz_from_basis_f64(x, y, z).as_vec3()
}

/// Packed per-item transform handed to the renderer, eight floats per item.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TransformRaw {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: f32,
    pub visible: f32,
}

impl TransformRaw {
    pub const FLOATS: usize = 8;

    pub fn new(t: &Transform, visible: bool) -> Self {
        Self {
            position: t.position.to_array(),
            rotation: t.rotation.to_array(),
            scale: t.scale,
            visible: if visible { 1.0 } else { 0.0 },
        }
    }
}
