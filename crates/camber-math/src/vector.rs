//! Small vector helpers on top of glam.

use crate::Vector3;

/// Sign of `x` as +1 or -1, where both zeros count as positive.
///
/// Marching code multiplies frames by this, so it must never return 0.
pub fn sign_nonzero(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Whether all three components are finite.
pub fn is_finite(v: Vector3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

/// Project `reference` onto the plane perpendicular to the unit vector `axis`.
///
/// Falls back to an arbitrary perpendicular when `reference` is parallel to
/// `axis`. Returns a unit vector.
pub fn perpendicular_to(axis: Vector3, reference: Vector3) -> Vector3 {
    let projected = reference - axis * reference.dot(axis);
    if let Some(v) = projected.try_normalize() {
        return v;
    }
    // Choose a vector not parallel to axis to build the frame
    let ref_vec = if axis.x.abs() < 0.9 {
        Vector3::X
    } else {
        Vector3::Y
    };
    axis.cross(ref_vec).normalize()
}

/// Round each component to `decimals` fractional digits.
pub fn round_to(v: Vector3, decimals: u32) -> Vector3 {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}
