use crate::{DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Affine transform stored column-major, used to place canonical curve
/// primitives (rotation about Z, translation, mirroring) in their final frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    /// Counter-clockwise rotation by `angle` radians about the Z axis.
    pub fn from_rotation_z(angle: f64) -> Self {
        Self::from_mat4(DMat4::from_rotation_z(angle))
    }

    /// Reflection across the x-z plane (y -> -y).
    pub fn mirror_y() -> Self {
        Self::from_mat4(DMat4::from_scale(Vector3::new(1.0, -1.0, 1.0)))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    /// Apply `self` first, then `other`.
    pub fn then(&self, other: &Transform) -> Transform {
        Self::from_mat4(other.to_mat4() * self.to_mat4())
    }
}
