//! Fixed-resolution sampling of a single Bezier segment.

use camber_core::error::{CamberError, Result};

use crate::curve::bezier::{check_resolution, parameter};
use crate::curve::BezierSegment;
use crate::frame::{frame_at, FrameContext};
use crate::sample::Sample;

/// Sample `segment` at `t = 0, 1/R, ..., 1`, producing `R + 1` samples.
///
/// A degenerate segment (both handles collapsed) is the straight chord
/// `p0 -> p3` and yields exactly its two endpoints with curvature 0 and the
/// chord direction as tangent. `ctx.previous` is the last sample emitted
/// before this segment, used when a frame cannot be derived locally.
pub fn sample_segment(
    segment: &BezierSegment,
    resolution: u32,
    ctx: &FrameContext<'_>,
) -> Result<Vec<Sample>> {
    check_resolution(resolution)?;

    if segment.is_degenerate(ctx.tol) {
        return sample_chord(segment, ctx);
    }

    let mut samples: Vec<Sample> = Vec::with_capacity(resolution as usize + 1);
    for i in 0..=resolution {
        let t = parameter(i, resolution);
        let local = ctx.after(samples.last().or(ctx.previous));
        let (curvature, frame) = frame_at(segment.velocity(t), segment.acceleration(t), t, &local)?;
        samples.push(Sample::from_frame(segment.position(t), curvature, frame));
    }
    Ok(samples)
}

fn sample_chord(segment: &BezierSegment, ctx: &FrameContext<'_>) -> Result<Vec<Sample>> {
    let frame = match (segment.p3 - segment.p0).try_normalize() {
        Some(tangent) => ctx.straight_frame(tangent),
        None => match ctx.previous {
            Some(prev) => {
                log::warn!("zero-length chord at {:?}, reusing previous frame", segment.p0);
                prev.frame()
            }
            None => return Err(CamberError::DegenerateTangent { t: 0.0 }),
        },
    };
    Ok(vec![
        Sample::from_frame(segment.p0, 0.0, frame),
        Sample::from_frame(segment.p3, 0.0, frame),
    ])
}
