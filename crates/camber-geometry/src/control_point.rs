//! Bezier control points.

use camber_core::error::{CamberError, Result};
use camber_core::traits::Validate;
use camber_core::Tolerance;
use camber_math::vector::is_finite;
use camber_math::Point3;
use serde::{Deserialize, Serialize};

/// An anchor position with two absolute tangent handles.
///
/// `tilt` is in degrees and wraps modulo 360; `radius` is the bevel weight
/// the host applies when it sweeps a cross section along the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub co: Point3,
    pub handle_left: Point3,
    pub handle_right: Point3,
    pub tilt: f64,
    pub radius: f64,
}

impl ControlPoint {
    pub fn new(co: Point3, handle_left: Point3, handle_right: Point3) -> Self {
        Self {
            co,
            handle_left,
            handle_right,
            tilt: 0.0,
            radius: 1.0,
        }
    }

    /// A corner point: both handles sit on the anchor.
    pub fn corner(co: Point3) -> Self {
        Self::new(co, co, co)
    }

    pub fn with_tilt(mut self, tilt: f64) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Whether both handles have collapsed onto the anchor.
    pub fn is_degenerate(&self, tol: Tolerance) -> bool {
        tol.is_collapsed_handle(self.co.distance(self.handle_left))
            && tol.is_collapsed_handle(self.co.distance(self.handle_right))
    }

    /// Tilt mapped into `[0, 360)`.
    pub fn normalized_tilt(&self) -> f64 {
        let t = self.tilt.rem_euclid(360.0);
        // rem_euclid can round up to the modulus for tiny negative inputs
        if t >= 360.0 {
            0.0
        } else {
            t
        }
    }

    /// Apply `f` to the anchor and both handles.
    pub fn map_positions(&mut self, mut f: impl FnMut(Point3) -> Point3) {
        self.co = f(self.co);
        self.handle_left = f(self.handle_left);
        self.handle_right = f(self.handle_right);
    }
}

impl Validate for ControlPoint {
    fn validate(&self) -> Result<()> {
        for (name, p) in [
            ("co", self.co),
            ("handle_left", self.handle_left),
            ("handle_right", self.handle_right),
        ] {
            if !is_finite(p) {
                return Err(CamberError::Geometry(format!(
                    "control point {} is not finite: {:?}",
                    name, p
                )));
            }
        }
        if !self.tilt.is_finite() || !self.radius.is_finite() {
            return Err(CamberError::Geometry(format!(
                "control point tilt/radius not finite: tilt={} radius={}",
                self.tilt, self.radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camber_math::dvec3;

    #[test]
    fn test_corner_is_degenerate() {
        let p = ControlPoint::corner(dvec3(1.0, 2.0, 3.0));
        assert!(p.is_degenerate(Tolerance::default()));
    }

    #[test]
    fn test_single_short_handle_is_not_degenerate() {
        let co = dvec3(0.0, 0.0, 0.0);
        let p = ControlPoint::new(co, dvec3(5e-5, 0.0, 0.0), dvec3(1.0, 0.0, 0.0));
        assert!(!p.is_degenerate(Tolerance::default()));

        let q = ControlPoint::new(co, dvec3(5e-5, 0.0, 0.0), dvec3(0.0, -5e-5, 0.0));
        assert!(q.is_degenerate(Tolerance::default()));
    }

    #[test]
    fn test_normalized_tilt() {
        let p = ControlPoint::corner(dvec3(0.0, 0.0, 0.0));
        assert_eq!(p.with_tilt(370.0).normalized_tilt(), 10.0);
        assert_eq!(p.with_tilt(-90.0).normalized_tilt(), 270.0);
        assert_eq!(p.with_tilt(720.0).normalized_tilt(), 0.0);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut p = ControlPoint::corner(dvec3(0.0, 0.0, 0.0));
        p.handle_right.y = f64::NAN;
        assert!(matches!(p.validate(), Err(CamberError::Geometry(_))));

        let q = ControlPoint::corner(dvec3(0.0, 0.0, 0.0)).with_radius(f64::INFINITY);
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_map_positions() {
        let mut p = ControlPoint::new(
            dvec3(1.0, 1.0, 1.0),
            dvec3(0.0, 1.0, 2.0),
            dvec3(2.0, 1.0, 0.0),
        );
        p.map_positions(|v| v * 2.0);
        assert_eq!(p.co, dvec3(2.0, 2.0, 2.0));
        assert_eq!(p.handle_left, dvec3(0.0, 2.0, 4.0));
        assert_eq!(p.handle_right, dvec3(4.0, 2.0, 0.0));
    }
}
