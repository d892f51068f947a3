//! Ring indexing, marked-run resolution and arc-length interpolation of one
//! coordinate across a run of control points.

use camber_core::error::{CamberError, Result};
use camber_core::traits::Validate;
use camber_core::Tolerance;
use camber_math::Axis;

use crate::curve::bezier::check_resolution;
use crate::curve::BezierSegment;
use crate::spline::Spline;

/// Index after `i` on a ring of `len` entries.
pub fn next_index(i: usize, len: usize) -> usize {
    (i + 1) % len
}

/// Number of forward steps from `from` to `to` on a ring of `len` entries.
pub fn forward_steps(from: usize, to: usize, len: usize) -> usize {
    (to + len - from) % len
}

/// A run of ring indices walked forward from `start` to `end` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingRange {
    pub start: usize,
    pub end: usize,
    ring_len: usize,
}

impl RingRange {
    pub fn new(start: usize, end: usize, ring_len: usize) -> Self {
        Self {
            start,
            end,
            ring_len,
        }
    }

    /// Forward steps from `start` to `end`.
    pub fn steps(&self) -> usize {
        forward_steps(self.start, self.end, self.ring_len)
    }

    /// Whether the run passes from the last index back to index 0.
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// Indices from `start` to `end` inclusive, in walking order.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let (start, len) = (self.start, self.ring_len);
        (0..=self.steps()).map(move |k| (start + k) % len)
    }
}

/// Maximal run of unmarked indices: first index and length.
#[derive(Debug, Clone, Copy)]
struct Gap {
    first: usize,
    len: usize,
}

/// Resolve the marked indices on a ring of `ring_len` points into one run.
///
/// Walking the ring, the marked points must form a single contiguous run.
/// One isolated unmarked point inside the run is tolerated; a second gap of
/// any kind, two separate runs, fewer than two marked points, or a fully
/// marked ring (no ends) fail with [`CamberError::InvalidSelection`].
pub fn resolve_ring_range(ring_len: usize, marked: &[usize]) -> Result<RingRange> {
    let flags = marked_flags(ring_len, marked)?;
    if flags.iter().all(|&f| f) {
        return Err(CamberError::InvalidSelection(
            "every point is marked, the run has no ends".to_string(),
        ));
    }

    let gaps = collect_gaps(&flags);
    let boundary = match gaps.as_slice() {
        [only] => *only,
        [a, b] => match (a.len == 1, b.len == 1) {
            (true, false) => *b,
            (false, true) => *a,
            (true, true) => {
                return Err(CamberError::InvalidSelection(
                    "more than one isolated gap in the marked run".to_string(),
                ))
            }
            (false, false) => {
                return Err(CamberError::InvalidSelection(
                    "marked points form two separate runs".to_string(),
                ))
            }
        },
        _ => {
            return Err(CamberError::InvalidSelection(format!(
                "marked points form {} separate runs",
                gaps.len()
            )))
        }
    };

    let start = (boundary.first + boundary.len) % ring_len;
    let end = (boundary.first + ring_len - 1) % ring_len;
    Ok(RingRange::new(start, end, ring_len))
}

/// Resolve the marked indices on an open chain of `len` points.
///
/// The run spans the lowest to the highest marked index and never wraps.
/// Inside it the same single isolated gap is tolerated as on a ring.
pub fn resolve_open_range(len: usize, marked: &[usize]) -> Result<RingRange> {
    let flags = marked_flags(len, marked)?;
    let (Some(start), Some(end)) = (
        flags.iter().position(|&f| f),
        flags.iter().rposition(|&f| f),
    ) else {
        return Err(CamberError::InvalidSelection("no marked points".to_string()));
    };

    let mut gaps: Vec<Gap> = Vec::new();
    for i in start..=end {
        if flags[i] {
            continue;
        }
        match gaps.last_mut() {
            Some(gap) if gap.first + gap.len == i => gap.len += 1,
            _ => gaps.push(Gap { first: i, len: 1 }),
        }
    }
    match gaps.as_slice() {
        [] | [Gap { len: 1, .. }] => Ok(RingRange::new(start, end, len)),
        [_] => Err(CamberError::InvalidSelection(
            "marked points form two separate runs".to_string(),
        )),
        _ => Err(CamberError::InvalidSelection(format!(
            "{} gaps in the marked run",
            gaps.len()
        ))),
    }
}

/// Marked flags per index. At least two distinct indices must be marked.
fn marked_flags(len: usize, marked: &[usize]) -> Result<Vec<bool>> {
    if let Some(&bad) = marked.iter().find(|&&i| i >= len) {
        return Err(CamberError::InvalidArgument(format!(
            "marked index {} out of range for {} points",
            bad, len
        )));
    }

    let mut flags = vec![false; len];
    for &i in marked {
        flags[i] = true;
    }
    let marked_count = flags.iter().filter(|&&f| f).count();
    if marked_count < 2 {
        return Err(CamberError::InvalidSelection(format!(
            "need at least 2 marked points, got {}",
            marked_count
        )));
    }
    Ok(flags)
}

/// Unmarked runs in ring order. Requires at least one marked and one
/// unmarked flag.
fn collect_gaps(flags: &[bool]) -> Vec<Gap> {
    let len = flags.len();
    let Some(anchor) = flags.iter().position(|&f| f) else {
        return Vec::new();
    };

    let mut gaps = Vec::new();
    let mut current: Option<Gap> = None;
    for k in 1..=len {
        let i = (anchor + k) % len;
        match (flags[i], current.as_mut()) {
            (false, Some(gap)) => gap.len += 1,
            (false, None) => current = Some(Gap { first: i, len: 1 }),
            (true, Some(_)) => gaps.extend(current.take()),
            (true, None) => {}
        }
    }
    gaps
}

/// Redistribute one coordinate across the marked run of `spline` in
/// proportion to arc length.
///
/// A cyclic spline resolves the run with [`resolve_ring_range`], an open one
/// with [`resolve_open_range`].
///
/// The run's two ends keep their values; every point strictly between them
/// gets `v0 + d / D * (v1 - v0)` on `axis`, where `d` is the cumulative
/// length up to that point and `D` the run's total length. Segment lengths are
/// the sampled polyline lengths at `resolution`, measured before anything
/// changes. A point that was a corner (both handles collapsed) has its
/// handles moved with it on `axis`; other handles are left alone.
///
/// Nothing is modified unless the whole operation succeeds.
pub fn interpolate_elevation(
    spline: &mut Spline,
    marked: &[usize],
    axis: Axis,
    resolution: u32,
    tol: Tolerance,
) -> Result<RingRange> {
    check_resolution(resolution)?;
    spline.validate()?;
    let range = if spline.is_cyclic() {
        resolve_ring_range(spline.len(), marked)?
    } else {
        resolve_open_range(spline.len(), marked)?
    };

    let indices: Vec<usize> = range.indices().collect();
    let points = spline.points();

    let mut distance = Vec::with_capacity(indices.len());
    distance.push(0.0);
    let mut total = 0.0;
    for pair in indices.windows(2) {
        let segment = BezierSegment::between(&points[pair[0]], &points[pair[1]]);
        total += segment.chord_length(resolution, tol)?;
        distance.push(total);
    }
    if tol.is_zero(total) {
        return Err(CamberError::InvalidArgument(format!(
            "run {} -> {} has zero length",
            range.start, range.end
        )));
    }

    let corners: Vec<bool> = indices.iter().map(|&i| points[i].is_degenerate(tol)).collect();
    let v0 = axis.get(points[range.start].co);
    let v1 = axis.get(points[range.end].co);

    let points = spline.points_mut();
    let m = indices.len() - 1;
    for k in 1..m {
        let value = v0 + distance[k] / total * (v1 - v0);
        let p = &mut points[indices[k]];
        axis.set(&mut p.co, value);
        if corners[k] {
            axis.set(&mut p.handle_left, value);
            axis.set(&mut p.handle_right, value);
        }
    }

    log::debug!(
        "interpolated {:?} over run {} -> {} ({} points, length {:.4})",
        axis,
        range.start,
        range.end,
        indices.len(),
        total
    );
    Ok(range)
}
