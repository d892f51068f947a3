//! Frame-annotated curve samples.

use camber_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// A point on a curve with its signed curvature and frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub position: Point3,
    pub curvature: f64,
    pub tangent: Vector3,
    pub normal: Vector3,
    pub binormal: Vector3,
}

impl Sample {
    /// The normal is derived as `binormal × tangent`.
    pub fn new(position: Point3, curvature: f64, tangent: Vector3, binormal: Vector3) -> Self {
        Self::from_frame(position, curvature, Frame::from_tangent_binormal(tangent, binormal))
    }

    pub fn from_frame(position: Point3, curvature: f64, frame: Frame) -> Self {
        Self {
            position,
            curvature,
            tangent: frame.tangent,
            normal: frame.normal,
            binormal: frame.binormal,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            tangent: self.tangent,
            normal: self.normal,
            binormal: self.binormal,
        }
    }
}

/// Total chord length through the sample positions.
pub fn polyline_length(samples: &[Sample]) -> f64 {
    samples
        .windows(2)
        .map(|w| w[0].position.distance(w[1].position))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use camber_math::dvec3;

    #[test]
    fn test_normal_is_binormal_cross_tangent() {
        let s = Sample::new(Point3::ZERO, 1.0, Vector3::X, Vector3::Z);
        assert_eq!(s.normal, Vector3::Y);
    }

    #[test]
    fn test_polyline_length() {
        let samples: Vec<_> = [dvec3(0.0, 0.0, 0.0), dvec3(3.0, 4.0, 0.0), dvec3(3.0, 4.0, 2.0)]
            .into_iter()
            .map(|p| Sample::new(p, 0.0, Vector3::X, Vector3::Z))
            .collect();
        assert_eq!(polyline_length(&samples), 7.0);
        assert_eq!(polyline_length(&samples[..1]), 0.0);
    }
}
