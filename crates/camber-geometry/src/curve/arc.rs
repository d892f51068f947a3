//! Circular arc primitive: marching samples, closed-form evaluation and
//! conversion to a cubic Bezier segment.

use std::f64::consts::{FRAC_PI_2, TAU};

use camber_core::error::{CamberError, Result};
use camber_core::traits::Validate;
use camber_math::{dvec3, Point3, Transform, Vector3};
use serde::{Deserialize, Serialize};

use super::bezier::check_resolution;
use super::clothoid::{check_length, march};
use super::{BezierSegment, Curve};
use crate::control_point::ControlPoint;
use crate::sample::Sample;

/// A circular arc of `length` starting at the origin heading +X.
///
/// A positive `radius` turns left (counter-clockwise seen from +Z), a
/// negative one turns right. Curvature is `1 / radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub length: f64,
    pub radius: f64,
}

impl Arc {
    pub fn new(length: f64, radius: f64) -> Self {
        Self { length, radius }
    }

    pub fn curvature(&self) -> f64 {
        1.0 / self.radius
    }

    /// Swept angle `length / radius`, signed like the radius.
    pub fn sweep(&self) -> f64 {
        self.length / self.radius
    }

    /// Center of the supporting circle.
    pub fn center(&self) -> Point3 {
        dvec3(0.0, self.radius, 0.0)
    }

    /// March along the arc in `resolution` equal arc-length steps.
    pub fn sample(&self, resolution: u32) -> Result<Vec<Sample>> {
        self.validate()?;
        check_resolution(resolution)?;
        let curvature = self.curvature();
        Ok(march(self.length, resolution, curvature, |_, _| curvature))
    }

    /// The cubic Bezier segment approximating this arc, oriented so `p0` is
    /// the travel-in point at the origin.
    ///
    /// The symmetric arc spanning `±θ/2` about +X is built first, with inner
    /// control points at `((4R - x0) / 3, ±(R - x0)(3R - x0) / (3 y0))`. It is
    /// rotated by `θ/2 - π/2`, moved up by `R` so it starts at the origin, and
    /// reversed into travel order. A right turn is the mirror image of the
    /// matching left turn across the x axis.
    pub fn to_bezier(&self) -> Result<BezierSegment> {
        self.validate()?;
        let radius = self.radius.abs();
        let theta = self.sweep().abs();
        if theta >= TAU {
            return Err(CamberError::InvalidArgument(format!(
                "arc sweeps {} rad, a single cubic segment needs less than a full turn",
                theta
            )));
        }

        let half = theta * 0.5;
        let x0 = radius * half.cos();
        let y0 = radius * half.sin();
        let p0 = dvec3(x0, y0, 0.0);
        let p3 = dvec3(x0, -y0, 0.0);
        let p1 = dvec3(
            (4.0 * radius - x0) / 3.0,
            (radius - x0) * (3.0 * radius - x0) / (3.0 * y0),
            0.0,
        );
        let p2 = dvec3(p1.x, -p1.y, 0.0);

        let mut placement = Transform::from_rotation_z(half - FRAC_PI_2)
            .then(&Transform::from_translation(dvec3(0.0, radius, 0.0)));
        if self.radius < 0.0 {
            placement = placement.then(&Transform::mirror_y());
        }

        // Canonical order runs clockwise; travel order starts at p3.
        Ok(BezierSegment::new(
            placement.transform_point(p3),
            placement.transform_point(p2),
            placement.transform_point(p1),
            placement.transform_point(p0),
        ))
    }

    /// [`Arc::to_bezier`] as two control points whose outer handles mirror the
    /// inner ones, ready to splice into a spline.
    pub fn to_control_points(&self) -> Result<[ControlPoint; 2]> {
        let seg = self.to_bezier()?;
        Ok([
            ControlPoint::new(seg.p0, 2.0 * seg.p0 - seg.p1, seg.p1),
            ControlPoint::new(seg.p3, seg.p2, 2.0 * seg.p3 - seg.p2),
        ])
    }
}

impl Validate for Arc {
    fn validate(&self) -> Result<()> {
        check_length(self.length)?;
        if self.radius == 0.0 || !self.radius.is_finite() {
            return Err(CamberError::InvalidArgument(format!(
                "arc radius must be finite and non-zero, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Exact evaluation in arc length `s ∈ [0, length]`.
impl Curve for Arc {
    fn point_at(&self, s: f64) -> Point3 {
        let angle = s / self.radius;
        dvec3(
            self.radius * angle.sin(),
            self.radius * (1.0 - angle.cos()),
            0.0,
        )
    }

    fn tangent_at(&self, s: f64) -> Vector3 {
        let angle = s / self.radius;
        dvec3(angle.cos(), angle.sin(), 0.0)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, self.length)
    }
}
