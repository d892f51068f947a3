//! Frenet frame extraction from curve derivatives.
//!
//! Curvature is signed by the z component of `v × a`, so the sign tells a
//! left turn (positive) from a right turn (negative) when the curve is viewed
//! from above in the x-y plane. This is not torsion-aware framing; curves that
//! leave the plane keep a magnitude-correct curvature but the sign only
//! reflects the plan-view turn direction.

use camber_core::error::{CamberError, Result};
use camber_core::Tolerance;
use camber_math::vector::perpendicular_to;
use camber_math::Vector3;
use serde::{Deserialize, Serialize};

use crate::sample::Sample;

/// Orthonormal (tangent, normal, binormal) triple with `normal = binormal × tangent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tangent: Vector3,
    pub normal: Vector3,
    pub binormal: Vector3,
}

impl Frame {
    /// Build a frame from a unit tangent and unit binormal.
    pub fn from_tangent_binormal(tangent: Vector3, binormal: Vector3) -> Self {
        Self {
            tangent,
            normal: binormal.cross(tangent),
            binormal,
        }
    }
}

/// What frame extraction may fall back on when the derivatives do not
/// determine a frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// The sample emitted just before this one, if any.
    pub previous: Option<&'a Sample>,
    /// Binormal used for straight runs when there is no previous sample.
    pub up: Vector3,
    pub tol: Tolerance,
}

impl<'a> FrameContext<'a> {
    pub fn new(up: Vector3, tol: Tolerance) -> Self {
        Self {
            previous: None,
            up,
            tol,
        }
    }

    pub fn after(self, previous: Option<&'a Sample>) -> Self {
        Self { previous, ..self }
    }

    /// Frame for a straight run along `tangent`: keep the previous binormal
    /// when there is one, else the up axis, made perpendicular to the tangent.
    pub fn straight_frame(&self, tangent: Vector3) -> Frame {
        let reference = self.previous.map_or(self.up, |s| s.binormal);
        Frame::from_tangent_binormal(tangent, perpendicular_to(tangent, reference))
    }
}

/// k = |v × a| / |v|³, negated when (v × a).z < 0.
///
/// Returns 0 for a vanishing velocity.
pub fn signed_curvature(velocity: Vector3, acceleration: Vector3) -> f64 {
    let speed = velocity.length();
    if speed == 0.0 {
        return 0.0;
    }
    let cross = velocity.cross(acceleration);
    let k = cross.length() / (speed * speed * speed);
    if cross.z < 0.0 {
        -k
    } else {
        k
    }
}

/// Signed curvature and frame at parameter `t` from velocity and acceleration.
///
/// Both vanishing tests are relative, so the result does not depend on the
/// curve's scale: the point is stationary when `|v| <= tol.linear * |a|`, and
/// the run is straight when `|v × a| <= tol.linear * |v| |a|` (the sine of the
/// angle between them is below the tolerance).
///
/// A stationary point reuses the previous sample's curvature and frame, and
/// fails with [`CamberError::DegenerateTangent`] when there is none. An
/// inflection or straight run has curvature 0 and takes its binormal from
/// [`FrameContext::straight_frame`].
pub fn frame_at(
    velocity: Vector3,
    acceleration: Vector3,
    t: f64,
    ctx: &FrameContext<'_>,
) -> Result<(f64, Frame)> {
    let speed = velocity.length();
    let accel = acceleration.length();
    if speed == 0.0 || speed <= ctx.tol.linear * accel {
        return match ctx.previous {
            Some(prev) => {
                log::warn!("stationary point at t={}, reusing previous frame", t);
                Ok((prev.curvature, prev.frame()))
            }
            None => Err(CamberError::DegenerateTangent { t }),
        };
    }

    let tangent = velocity / speed;
    let cross = velocity.cross(acceleration);
    let cross_len = cross.length();
    if cross_len <= ctx.tol.linear * speed * accel {
        return Ok((0.0, ctx.straight_frame(tangent)));
    }

    let binormal = cross / cross_len;
    Ok((
        signed_curvature(velocity, acceleration),
        Frame::from_tangent_binormal(tangent, binormal),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use camber_math::{dvec3, Point3};

    fn ctx<'a>() -> FrameContext<'a> {
        FrameContext::new(Vector3::Z, Tolerance::default())
    }

    #[test]
    fn test_left_turn_is_positive() {
        // Unit circle counter-clockwise at angle 0: v = (0,1,0), a = (-1,0,0)
        let (k, frame) = frame_at(Vector3::Y, -Vector3::X, 0.0, &ctx()).unwrap();
        assert_abs_diff_eq!(k, 1.0, epsilon = 1e-12);
        assert_eq!(frame.tangent, Vector3::Y);
        assert_eq!(frame.binormal, Vector3::Z);
        // Normal points towards the center
        assert_abs_diff_eq!(frame.normal.x, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_right_turn_is_negative() {
        let (k, frame) = frame_at(Vector3::Y, Vector3::X, 0.0, &ctx()).unwrap();
        assert_abs_diff_eq!(k, -1.0, epsilon = 1e-12);
        assert_eq!(frame.binormal, -Vector3::Z);
        assert_abs_diff_eq!(frame.normal.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_curvature_scales_with_radius() {
        // Circle of radius 4 at unit angular speed: |v| = 4, |a| = 4
        let k = signed_curvature(dvec3(0.0, 4.0, 0.0), dvec3(-4.0, 0.0, 0.0));
        assert_abs_diff_eq!(k, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_is_orthonormal() {
        let (_, f) = frame_at(dvec3(1.0, 2.0, 0.5), dvec3(-0.3, 0.2, 1.0), 0.5, &ctx()).unwrap();
        assert_abs_diff_eq!(f.tangent.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.normal.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.binormal.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.tangent.dot(f.normal), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.tangent.dot(f.binormal), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.normal.dot(f.binormal), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_straight_run_uses_up_axis() {
        let (k, f) = frame_at(dvec3(2.0, 0.0, 0.0), dvec3(4.0, 0.0, 0.0), 0.3, &ctx()).unwrap();
        assert_eq!(k, 0.0);
        assert_eq!(f.binormal, Vector3::Z);
        assert_abs_diff_eq!(f.normal.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_straight_run_keeps_previous_binormal() {
        let prev = Sample::new(Point3::ZERO, 0.5, Vector3::X, -Vector3::Z);
        let c = ctx().after(Some(&prev));
        let (_, f) = frame_at(Vector3::X, Vector3::ZERO, 1.0, &c).unwrap();
        assert_eq!(f.binormal, -Vector3::Z);
    }

    #[test]
    fn test_tiny_bend_keeps_its_curvature() {
        // Radius 1e-6 circle: |v| = 1e-6, |a| = 1e-6, |v x a| = 1e-12
        let (k, f) = frame_at(dvec3(0.0, 1e-6, 0.0), dvec3(-1e-6, 0.0, 0.0), 0.0, &ctx()).unwrap();
        assert_abs_diff_eq!(k, 1e6, epsilon = 1e-3);
        assert_eq!(f.binormal, Vector3::Z);
    }

    #[test]
    fn test_huge_straight_run_ignores_rounding_noise() {
        // Direction error of 1e-12 at a scale of 1e6
        let v = dvec3(1e6, 1e-6, 0.0);
        let a = dvec3(2e6, 0.0, 0.0);
        let (k, f) = frame_at(v, a, 0.5, &ctx()).unwrap();
        assert_eq!(k, 0.0);
        assert_eq!(f.binormal, Vector3::Z);
    }

    #[test]
    fn test_stationary_relative_to_acceleration() {
        let err = frame_at(dvec3(1e-9, 0.0, 0.0), dvec3(0.0, 1.0, 0.0), 0.0, &ctx()).unwrap_err();
        assert!(matches!(err, CamberError::DegenerateTangent { .. }));
        // The same velocity on a tiny curve is a real tangent
        assert!(frame_at(dvec3(1e-9, 0.0, 0.0), dvec3(0.0, 1e-9, 0.0), 0.0, &ctx()).is_ok());
    }

    #[test]
    fn test_stationary_without_previous_fails() {
        let err = frame_at(Vector3::ZERO, Vector3::X, 0.0, &ctx()).unwrap_err();
        assert!(matches!(err, CamberError::DegenerateTangent { t } if t == 0.0));
    }

    #[test]
    fn test_stationary_reuses_previous_frame() {
        let prev = Sample::new(dvec3(1.0, 1.0, 0.0), -0.2, Vector3::Y, -Vector3::Z);
        let c = ctx().after(Some(&prev));
        let (k, f) = frame_at(Vector3::ZERO, Vector3::X, 0.0, &c).unwrap();
        assert_eq!(k, -0.2);
        assert_eq!(f, prev.frame());
    }
}
