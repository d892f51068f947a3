//! Adaptive flattening of curves into polylines for preview drawing.

use camber_math::Point3;

use crate::curve::Curve;
use crate::spline::Spline;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Splits always taken, so an S-shaped span whose midpoint happens to sit on
/// the chord still gets refined.
const MIN_DEPTH: u32 = 2;

/// Convert a curve to a polyline using adaptive subdivision.
///
/// Spans are halved in parameter space while the curve midpoint deviates from
/// the chord midpoint by more than `tolerance`.
pub fn curve_to_polyline(curve: &dyn Curve, tolerance: f64) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    let mut points = vec![curve.point_at(t_min)];
    subdivide_curve(curve, t_min, t_max, tolerance, &mut points, 0);
    points
}

/// Flatten every segment of `spline`, sharing the joint between segments.
/// A cyclic spline ends back on its first point.
pub fn spline_to_polyline(spline: &Spline, tolerance: f64) -> Vec<Point3> {
    let mut points: Vec<Point3> = Vec::new();
    for segment in spline.segments() {
        let part = curve_to_polyline(&segment, tolerance);
        let skip = usize::from(!points.is_empty());
        points.extend(part.into_iter().skip(skip));
    }
    points
}

fn subdivide_curve(
    curve: &dyn Curve,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point3>,
    depth: u32,
) {
    if depth >= MAX_DEPTH {
        points.push(curve.point_at(t1));
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let p_mid = curve.point_at(t_mid);
    let deviation = p_mid.distance((p0 + p1) * 0.5);

    if depth < MIN_DEPTH || deviation > tolerance {
        subdivide_curve(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}
