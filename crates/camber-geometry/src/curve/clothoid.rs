//! Clothoid (Euler spiral) sampling, and the forward marching integrator it
//! shares with circular arcs.

use camber_core::error::{CamberError, Result};
use camber_core::traits::Validate;
use camber_math::vector::sign_nonzero;
use camber_math::{dvec3, Point3};
use serde::{Deserialize, Serialize};

use super::bezier::check_resolution;
use crate::sample::Sample;

/// A curve whose curvature varies linearly from `start_curvature` to
/// `end_curvature` over `length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clothoid {
    pub length: f64,
    pub start_curvature: f64,
    pub end_curvature: f64,
}

impl Clothoid {
    pub fn new(length: f64, start_curvature: f64, end_curvature: f64) -> Self {
        Self {
            length,
            start_curvature,
            end_curvature,
        }
    }

    /// Curvature change per unit arc length.
    pub fn sharpness(&self) -> f64 {
        (self.end_curvature - self.start_curvature) / self.length
    }

    /// Curvature at arc length `s`.
    pub fn curvature_at(&self, s: f64) -> f64 {
        self.start_curvature + s * self.sharpness()
    }

    /// March along the clothoid in `resolution` equal arc-length steps,
    /// starting at the origin heading +X.
    pub fn sample(&self, resolution: u32) -> Result<Vec<Sample>> {
        self.validate()?;
        check_resolution(resolution)?;
        Ok(march(self.length, resolution, self.start_curvature, |s0, s1| {
            self.curvature_at((s0 + s1) * 0.5)
        }))
    }
}

impl Validate for Clothoid {
    fn validate(&self) -> Result<()> {
        check_length(self.length)?;
        if !self.start_curvature.is_finite() || !self.end_curvature.is_finite() {
            return Err(CamberError::InvalidArgument(format!(
                "clothoid curvatures must be finite, got {} and {}",
                self.start_curvature, self.end_curvature
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_length(length: f64) -> Result<()> {
    if length <= 0.0 || !length.is_finite() {
        return Err(CamberError::InvalidArgument(format!(
            "length must be positive and finite, got {}",
            length
        )));
    }
    Ok(())
}

/// Integrate heading over `resolution` steps of `length / resolution`.
///
/// Each step uses the mean curvature over the step, `curvature_mid(s0, s1)`,
/// and advances position along the mid-step heading. The last step lands on
/// `length` exactly. Returns `resolution + 1` samples.
pub(crate) fn march(
    length: f64,
    resolution: u32,
    start_curvature: f64,
    curvature_mid: impl Fn(f64, f64) -> f64,
) -> Vec<Sample> {
    let step = length / resolution as f64;
    let mut samples = Vec::with_capacity(resolution as usize + 1);
    samples.push(heading_sample(Point3::ZERO, start_curvature, 0.0));

    let mut position = Point3::ZERO;
    let mut theta = 0.0_f64;
    let mut s_prev = 0.0;
    for i in 1..=resolution {
        let s = if i == resolution { length } else { i as f64 * step };
        let ds = s - s_prev;
        let curvature = curvature_mid(s_prev, s);
        let heading = theta + curvature * ds * 0.5;

        position += dvec3(ds * heading.cos(), ds * heading.sin(), 0.0);
        theta += curvature * ds;
        s_prev = s;

        samples.push(heading_sample(position, curvature, theta));
    }
    samples
}

/// Tangent (cos θ, sin θ, 0), binormal (-sin θ, cos θ, 0) scaled by the sign
/// of θ (positive at θ = 0).
fn heading_sample(position: Point3, curvature: f64, theta: f64) -> Sample {
    let (sin, cos) = theta.sin_cos();
    let sign = sign_nonzero(theta);
    Sample::new(
        position,
        curvature,
        dvec3(cos, sin, 0.0),
        dvec3(-sin * sign, cos * sign, 0.0),
    )
}
