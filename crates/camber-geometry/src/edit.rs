//! Whole-spline edits: plan-view flattening and rounding, and automatic
//! Catmull-Rom handles.

use camber_core::error::Result;
use camber_math::vector::round_to;
use camber_math::{Plane, Point3};

use crate::control_point::ControlPoint;
use crate::spline::Spline;

/// Project every anchor and handle onto the ground plane `z = 0`.
pub fn align_to_xy_plane(spline: &mut Spline) {
    let ground = Plane::xy();
    for p in spline.points_mut() {
        p.map_positions(|v| ground.project_point(v));
    }
}

/// Round anchors and handles to `decimals` fractional digits and tilt to
/// whole degrees in `[0, 360)`.
pub fn round_plan_view(spline: &mut Spline, decimals: u32) {
    for p in spline.points_mut() {
        p.map_positions(|v| round_to(v, decimals));
        p.tilt = p.tilt.round();
        p.tilt = p.normalized_tilt();
    }
}

/// A smooth spline through `positions`.
///
/// Interior handles sit at `p ± (next - prev) / 6`, which makes each segment
/// the Catmull-Rom span between its anchors. On an open spline the end
/// handles use the one-sided difference `(p1 - p0) / 3`, mirrored so both
/// handles of an end point stay collinear.
pub fn auto_handles(positions: &[Point3], cyclic: bool) -> Result<Spline> {
    let mut spline = Spline::from_corners(positions, cyclic)?;
    let n = spline.len();
    let all: Vec<usize> = (0..n).collect();
    apply_catmull_rom(&mut spline, &all);
    Ok(spline)
}

/// Recompute handles of the interior points from their neighbours' anchors.
///
/// The first and last points of an open spline keep their handles. On a
/// cyclic spline every point is interior.
pub fn smooth_interior_handles(spline: &mut Spline) {
    let n = spline.len();
    let targets: Vec<usize> = if spline.is_cyclic() {
        (0..n).collect()
    } else {
        (1..n - 1).collect()
    };
    apply_catmull_rom(spline, &targets);
}

fn apply_catmull_rom(spline: &mut Spline, targets: &[usize]) {
    let n = spline.len();
    let cyclic = spline.is_cyclic();
    let anchors: Vec<Point3> = spline.points().iter().map(|p| p.co).collect();

    let points = spline.points_mut();
    for &i in targets {
        let co = anchors[i];
        let delta = match (i, cyclic) {
            (0, false) => (anchors[1] - co) / 3.0,
            (i, false) if i == n - 1 => (co - anchors[i - 1]) / 3.0,
            _ => (anchors[(i + 1) % n] - anchors[(i + n - 1) % n]) / 6.0,
        };
        set_handles(&mut points[i], co - delta, co + delta);
    }
}

fn set_handles(p: &mut ControlPoint, left: Point3, right: Point3) {
    p.handle_left = left;
    p.handle_right = right;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use camber_core::Tolerance;
    use camber_math::dvec3;

    #[test]
    fn test_align_to_xy_plane() {
        let mut spline = Spline::new(
            vec![
                ControlPoint::new(
                    dvec3(0.0, 0.0, 3.0),
                    dvec3(-1.0, 0.0, 2.0),
                    dvec3(1.0, 0.0, 4.0),
                ),
                ControlPoint::corner(dvec3(5.0, 1.0, -2.0)),
            ],
            false,
        )
        .unwrap();
        align_to_xy_plane(&mut spline);
        for p in spline.points() {
            assert_eq!(p.co.z, 0.0);
            assert_eq!(p.handle_left.z, 0.0);
            assert_eq!(p.handle_right.z, 0.0);
        }
        assert_eq!(spline.points()[1].co, dvec3(5.0, 1.0, 0.0));
    }

    #[test]
    fn test_round_plan_view() {
        let mut spline = Spline::new(
            vec![
                ControlPoint::corner(dvec3(1.23456, -0.0049, 2.0)).with_tilt(-90.4),
                ControlPoint::corner(dvec3(3.0, 4.0, 5.0)).with_tilt(719.6),
            ],
            false,
        )
        .unwrap();
        round_plan_view(&mut spline, 2);
        let [a, b] = [spline.points()[0], spline.points()[1]];
        assert_abs_diff_eq!(a.co.x, 1.23, epsilon = 1e-12);
        assert_abs_diff_eq!(a.co.y, 0.0, epsilon = 1e-12);
        assert_eq!(a.tilt, 270.0);
        assert_eq!(b.tilt, 0.0);
    }

    #[test]
    fn test_auto_handles_open_ends() {
        let spline = auto_handles(
            &[
                dvec3(0.0, 0.0, 0.0),
                dvec3(3.0, 0.0, 0.0),
                dvec3(6.0, 3.0, 0.0),
            ],
            false,
        )
        .unwrap();
        let p = spline.points();
        assert_eq!(p[0].handle_right, dvec3(1.0, 0.0, 0.0));
        assert_eq!(p[0].handle_left, dvec3(-1.0, 0.0, 0.0));
        assert_eq!(p[1].handle_right, dvec3(4.0, 0.5, 0.0));
        assert_eq!(p[1].handle_left, dvec3(2.0, -0.5, 0.0));
        assert_eq!(p[2].handle_left, dvec3(5.0, 2.0, 0.0));
    }

    #[test]
    fn test_auto_handles_cyclic_wraps_neighbours() {
        let square = [
            dvec3(1.0, 0.0, 0.0),
            dvec3(0.0, 1.0, 0.0),
            dvec3(-1.0, 0.0, 0.0),
            dvec3(0.0, -1.0, 0.0),
        ];
        let spline = auto_handles(&square, true).unwrap();
        let p0 = spline.points()[0];
        // (p1 - p3) / 6 = (0, 1/3, 0)
        assert_abs_diff_eq!(p0.handle_right.y, 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p0.handle_right.x, 1.0, epsilon = 1e-12);
        assert!(spline.points().iter().all(|p| !p.is_degenerate(Tolerance::default())));
    }

    #[test]
    fn test_smoothing_keeps_open_endpoints() {
        let mut spline = Spline::from_corners(
            &[
                dvec3(0.0, 0.0, 0.0),
                dvec3(1.0, 0.0, 1.0),
                dvec3(2.0, 0.0, 4.0),
                dvec3(3.0, 0.0, 9.0),
            ],
            false,
        )
        .unwrap();
        smooth_interior_handles(&mut spline);
        let p = spline.points();
        assert!(p[0].is_degenerate(Tolerance::default()));
        assert!(p[3].is_degenerate(Tolerance::default()));
        // (p2 - p0) / 6 = (1/3, 0, 2/3)
        assert_abs_diff_eq!(p[1].handle_right.z, 1.0 + 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[2].handle_left.z, 4.0 - 4.0 / 3.0, epsilon = 1e-12);
    }
}
