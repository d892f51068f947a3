//! Curve traits and primitives.

mod arc;
pub(crate) mod bezier;
pub(crate) mod clothoid;

use camber_math::{Point3, Vector3};

pub use arc::Arc;
pub use bezier::BezierSegment;
pub use clothoid::Clothoid;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the (unnormalized) tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}
