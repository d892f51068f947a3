//! Bezier splines and their assembly into one continuous sample sequence.

use camber_core::error::{CamberError, Result};
use camber_core::traits::{BoundingBox, Validate};
use camber_core::Tolerance;
use camber_math::{Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::control_point::ControlPoint;
use crate::curve::BezierSegment;
use crate::frame::FrameContext;
use crate::ring::next_index;
use crate::sample::Sample;
use crate::sampler::sample_segment;

/// An ordered chain of at least two control points, optionally closed.
///
/// An open spline has `n - 1` segments. A cyclic spline adds a closing
/// segment from the last point back to the first, for `n` segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spline {
    points: Vec<ControlPoint>,
    cyclic: bool,
}

impl Spline {
    pub fn new(points: Vec<ControlPoint>, cyclic: bool) -> Result<Self> {
        Self { points, cyclic }.validated()
    }

    /// Spline of corner points through `positions`.
    pub fn from_corners(positions: &[Point3], cyclic: bool) -> Result<Self> {
        Self::new(
            positions.iter().copied().map(ControlPoint::corner).collect(),
            cyclic,
        )
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a spline built through [`Spline::new`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Mutable access to the points; the count is fixed. Sampling and
    /// interpolation validate again, so non-finite edits surface there as
    /// [`CamberError::Geometry`].
    pub fn points_mut(&mut self) -> &mut [ControlPoint] {
        &mut self.points
    }

    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    pub fn set_cyclic(&mut self, cyclic: bool) {
        self.cyclic = cyclic;
    }

    pub fn segment_count(&self) -> usize {
        if self.cyclic {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// Segment `index`, joining point `index` to the next point on the ring.
    pub fn segment(&self, index: usize) -> Result<BezierSegment> {
        if index >= self.segment_count() {
            return Err(CamberError::InvalidArgument(format!(
                "segment index {} out of range for {} segments",
                index,
                self.segment_count()
            )));
        }
        let next = next_index(index, self.points.len());
        Ok(BezierSegment::between(&self.points[index], &self.points[next]))
    }

    pub fn segments(&self) -> impl Iterator<Item = BezierSegment> + '_ {
        let n = self.points.len();
        (0..self.segment_count())
            .map(move |i| BezierSegment::between(&self.points[i], &self.points[next_index(i, n)]))
    }
}

impl Validate for Spline {
    fn validate(&self) -> Result<()> {
        if self.points.len() < 2 {
            return Err(CamberError::InvalidArgument(format!(
                "a spline needs at least 2 control points, got {}",
                self.points.len()
            )));
        }
        for (i, p) in self.points.iter().enumerate() {
            p.validate().map_err(|e| {
                CamberError::Geometry(format!("control point {}: {}", i, e))
            })?;
        }
        Ok(())
    }
}

impl BoundingBox for Spline {
    type Point = Point3;

    /// Bounds of every anchor and handle (the convex hulls of the segments).
    fn bounding_box(&self) -> (Point3, Point3) {
        let aabb = Aabb3::from_points(
            self.points
                .iter()
                .flat_map(|p| [p.co, p.handle_left, p.handle_right]),
        )
        .unwrap_or_else(|| Aabb3::new(Point3::ZERO, Point3::ZERO));
        (aabb.min, aabb.max)
    }
}

/// Sample every segment of `spline` at `resolution` and stitch the results.
///
/// The first sample of each segment after the first repeats the previous
/// segment's last sample and is dropped. The closing segment of a cyclic
/// spline also drops its last sample, which repeats the ring's first sample.
/// Without degenerate segments this yields `(n - 1) * R + 1` samples for an
/// open spline and `n * R` for a cyclic one.
pub fn sample_spline(
    spline: &Spline,
    resolution: u32,
    up: Vector3,
    tol: Tolerance,
) -> Result<Vec<Sample>> {
    spline.validate()?;
    let count = spline.segment_count();
    let mut out: Vec<Sample> = Vec::with_capacity(count * resolution as usize + 1);

    for (i, segment) in spline.segments().enumerate() {
        let ctx = FrameContext {
            previous: out.last(),
            up,
            tol,
        };
        let samples = sample_segment(&segment, resolution, &ctx)?;

        let first = if i == 0 { 0 } else { 1 };
        let closing = spline.is_cyclic() && i + 1 == count;
        let last = if closing { samples.len() - 1 } else { samples.len() };
        if first < last {
            out.extend_from_slice(&samples[first..last]);
        }
    }

    log::debug!(
        "sampled {} segments ({}) at resolution {} into {} samples",
        count,
        if spline.is_cyclic() { "cyclic" } else { "open" },
        resolution,
        out.len()
    );
    Ok(out)
}
