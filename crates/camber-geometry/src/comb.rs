//! Curvature comb overlay data.

use camber_math::Point3;
use serde::{Deserialize, Serialize};

use crate::sample::Sample;

/// Radius drawn for straight or nearly straight samples.
pub const MAX_VIEW_RADIUS: f64 = 500.0;

/// One tooth of the comb, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombTooth {
    pub base: Point3,
    /// `base + k n`
    pub curvature_tip: Point3,
    /// `base + r n`, with `r = 1 / k` capped at [`MAX_VIEW_RADIUS`].
    pub radius_tip: Point3,
    /// `base + b`
    pub binormal_tip: Point3,
}

/// Signed radius of curvature for display, capped in magnitude.
pub fn view_radius(curvature: f64) -> f64 {
    if curvature == 0.0 {
        return MAX_VIEW_RADIUS;
    }
    let r = 1.0 / curvature;
    r.clamp(-MAX_VIEW_RADIUS, MAX_VIEW_RADIUS)
}

pub fn curvature_comb(samples: &[Sample]) -> Vec<CombTooth> {
    samples
        .iter()
        .map(|s| CombTooth {
            base: s.position,
            curvature_tip: s.position + s.curvature * s.normal,
            radius_tip: s.position + view_radius(s.curvature) * s.normal,
            binormal_tip: s.position + s.binormal,
        })
        .collect()
}
