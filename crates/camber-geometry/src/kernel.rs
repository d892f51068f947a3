//! Configured entry points for host editors.

use camber_core::error::Result;
use camber_core::{KernelConfig, Tolerance};
use camber_math::{Axis, DVec3, Vector3};

use crate::curve::{Arc, BezierSegment, Clothoid};
use crate::ring::{self, RingRange};
use crate::sample::Sample;
use crate::spline::{self, Spline};

/// The geometry operations with sampling resolutions, the up axis and
/// tolerances taken from a [`KernelConfig`].
///
/// A kernel holds no state besides its configuration; every operation reads
/// its inputs and returns fresh output, or mutates only the spline passed in.
#[derive(Debug, Clone, Default)]
pub struct Kernel {
    config: KernelConfig,
}

impl Kernel {
    /// Kernel with a validated configuration.
    pub fn new(config: KernelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::new(KernelConfig::from_toml_str(text)?)
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    fn up(&self) -> Vector3 {
        DVec3::from_array(self.config.up).normalize()
    }

    fn tol(&self) -> Tolerance {
        self.config.tolerance
    }

    /// Sample `spline` at `resolution` steps per segment.
    pub fn sample_spline(&self, spline: &Spline, resolution: u32) -> Result<Vec<Sample>> {
        spline::sample_spline(spline, resolution, self.up(), self.tol())
    }

    /// Sample `spline` at the configured Bezier resolution.
    pub fn sample_spline_default(&self, spline: &Spline) -> Result<Vec<Sample>> {
        self.sample_spline(spline, self.config.bezier_resolution)
    }

    pub fn sample_arc(&self, arc: &Arc) -> Result<Vec<Sample>> {
        let samples = arc.sample(self.config.arc_resolution)?;
        log::debug!(
            "marched arc length={} radius={} into {} samples",
            arc.length,
            arc.radius,
            samples.len()
        );
        Ok(samples)
    }

    pub fn sample_clothoid(&self, clothoid: &Clothoid) -> Result<Vec<Sample>> {
        let samples = clothoid.sample(self.config.arc_resolution)?;
        log::debug!(
            "marched clothoid length={} curvature {} -> {} into {} samples",
            clothoid.length,
            clothoid.start_curvature,
            clothoid.end_curvature,
            samples.len()
        );
        Ok(samples)
    }

    pub fn arc_to_bezier_segment(&self, arc: &Arc) -> Result<BezierSegment> {
        arc.to_bezier()
    }

    /// Interpolate `axis` across the marked run of `spline`, measuring
    /// segment lengths at the configured ring resolution.
    pub fn interpolate_elevation(
        &self,
        spline: &mut Spline,
        marked: &[usize],
        axis: Axis,
    ) -> Result<RingRange> {
        ring::interpolate_elevation(spline, marked, axis, self.config.ring_resolution, self.tol())
    }
}
