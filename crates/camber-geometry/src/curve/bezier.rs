//! Cubic Bezier segment evaluation.

use camber_core::error::{CamberError, Result};
use camber_core::Tolerance;
use camber_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::control_point::ControlPoint;

/// A cubic Bezier segment `p0 -> p3` with inner control points `p1`, `p2`,
/// parameterized over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl BezierSegment {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// The segment leaving `from` through its right handle and entering `to`
    /// through its left handle.
    pub fn between(from: &ControlPoint, to: &ControlPoint) -> Self {
        Self::new(from.co, from.handle_right, to.handle_left, to.co)
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    pub fn position(&self, t: f64) -> Point3 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.p0 + 3.0 * inv2 * t * self.p1 + 3.0 * inv * t2 * self.p2 + t2 * t * self.p3
    }

    /// B'(t) = 3(1-t)²(P1-P0) + 6(1-t)t(P2-P1) + 3t²(P3-P2)
    pub fn velocity(&self, t: f64) -> Vector3 {
        let inv = 1.0 - t;
        3.0 * inv * inv * (self.p1 - self.p0)
            + 6.0 * inv * t * (self.p2 - self.p1)
            + 3.0 * t * t * (self.p3 - self.p2)
    }

    /// B''(t) = 6(1-t)(P2-2P1+P0) + 6t(P3-2P2+P1)
    pub fn acceleration(&self, t: f64) -> Vector3 {
        6.0 * (1.0 - t) * (self.p2 - 2.0 * self.p1 + self.p0)
            + 6.0 * t * (self.p3 - 2.0 * self.p2 + self.p1)
    }

    /// Both handles collapsed onto their anchors: the segment is the straight
    /// chord `p0 -> p3`.
    pub fn is_degenerate(&self, tol: Tolerance) -> bool {
        tol.is_collapsed_handle(self.p0.distance(self.p1))
            && tol.is_collapsed_handle(self.p3.distance(self.p2))
    }

    /// The segment traversed backwards.
    pub fn reversed(&self) -> Self {
        Self::new(self.p3, self.p2, self.p1, self.p0)
    }

    /// Positions at `t = i / resolution`, or just the two endpoints for a
    /// degenerate segment.
    pub fn polyline(&self, resolution: u32, tol: Tolerance) -> Result<Vec<Point3>> {
        check_resolution(resolution)?;
        if self.is_degenerate(tol) {
            return Ok(vec![self.p0, self.p3]);
        }
        Ok((0..=resolution)
            .map(|i| self.position(parameter(i, resolution)))
            .collect())
    }

    /// Length of the sampled polyline at `resolution`.
    pub fn chord_length(&self, resolution: u32, tol: Tolerance) -> Result<f64> {
        let points = self.polyline(resolution, tol)?;
        Ok(points.windows(2).map(|w| w[0].distance(w[1])).sum())
    }
}

impl Curve for BezierSegment {
    fn point_at(&self, t: f64) -> Point3 {
        self.position(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.velocity(t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// Parameter of step `i` out of `resolution`, exact at both ends.
pub(crate) fn parameter(i: u32, resolution: u32) -> f64 {
    if i == resolution {
        1.0
    } else {
        i as f64 / resolution as f64
    }
}

pub(crate) fn check_resolution(resolution: u32) -> Result<()> {
    if resolution == 0 {
        return Err(CamberError::InvalidArgument(
            "resolution must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use camber_math::dvec3;

    fn s_curve() -> BezierSegment {
        BezierSegment::new(
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 2.0, 0.0),
            dvec3(3.0, -2.0, 0.0),
            dvec3(4.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_endpoints_interpolate() {
        let seg = s_curve();
        assert_eq!(seg.position(0.0), seg.p0);
        assert_eq!(seg.position(1.0), seg.p3);
    }

    #[test]
    fn test_velocity_at_ends_follows_handles() {
        let seg = s_curve();
        assert_eq!(seg.velocity(0.0), 3.0 * (seg.p1 - seg.p0));
        assert_eq!(seg.velocity(1.0), 3.0 * (seg.p3 - seg.p2));
    }

    #[test]
    fn test_velocity_matches_finite_difference() {
        let seg = s_curve();
        let h = 1e-6;
        for &t in &[0.2, 0.5, 0.8] {
            let numeric = (seg.position(t + h) - seg.position(t - h)) / (2.0 * h);
            let analytic = seg.velocity(t);
            assert_abs_diff_eq!(numeric.x, analytic.x, epsilon = 1e-6);
            assert_abs_diff_eq!(numeric.y, analytic.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_acceleration_matches_finite_difference() {
        let seg = s_curve();
        let h = 1e-5;
        for &t in &[0.1, 0.5, 0.9] {
            let numeric = (seg.velocity(t + h) - seg.velocity(t - h)) / (2.0 * h);
            let analytic = seg.acceleration(t);
            assert_abs_diff_eq!(numeric.x, analytic.x, epsilon = 1e-6);
            assert_abs_diff_eq!(numeric.y, analytic.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_degenerate_detection() {
        let tol = Tolerance::default();
        let a = ControlPoint::corner(dvec3(0.0, 0.0, 0.0));
        let b = ControlPoint::corner(dvec3(5.0, 1.0, 0.0));
        assert!(BezierSegment::between(&a, &b).is_degenerate(tol));
        assert!(!s_curve().is_degenerate(tol));
    }

    #[test]
    fn test_degenerate_polyline_has_two_points() {
        let tol = Tolerance::default();
        let seg = BezierSegment::new(
            dvec3(0.0, 0.0, 0.0),
            dvec3(0.0, 0.0, 0.0),
            dvec3(3.0, 4.0, 0.0),
            dvec3(3.0, 4.0, 0.0),
        );
        let points = seg.polyline(16, tol).unwrap();
        assert_eq!(points.len(), 2);
        assert_abs_diff_eq!(seg.chord_length(16, tol).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polyline_length_bounded_by_control_polygon() {
        let seg = s_curve();
        let tol = Tolerance::default();
        let coarse = seg.chord_length(2, tol).unwrap();
        let fine = seg.chord_length(64, tol).unwrap();
        let polygon = seg.p0.distance(seg.p1) + seg.p1.distance(seg.p2) + seg.p2.distance(seg.p3);
        assert!(coarse <= fine);
        assert!(fine <= polygon);
        assert!(fine >= seg.p0.distance(seg.p3));
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let err = s_curve().polyline(0, Tolerance::default()).unwrap_err();
        assert!(matches!(err, CamberError::InvalidArgument(_)));
    }

    #[test]
    fn test_reversed_traces_same_points() {
        let seg = s_curve();
        let rev = seg.reversed();
        assert_abs_diff_eq!(seg.position(0.3).distance(rev.position(0.7)), 0.0, epsilon = 1e-12);
    }
}
