//! Camber geometry: Bezier splines with Frenet frames, arc and clothoid
//! marching, and arc-length interpolation across control point runs.

pub mod comb;
pub mod control_point;
pub mod curve;
pub mod edit;
pub mod frame;
pub mod kernel;
pub mod ring;
pub mod sample;
pub mod sampler;
pub mod spline;
pub mod tessellate;

pub use control_point::ControlPoint;
pub use curve::{Arc, BezierSegment, Clothoid, Curve};
pub use frame::{Frame, FrameContext};
pub use kernel::Kernel;
pub use ring::{interpolate_elevation, resolve_open_range, resolve_ring_range, RingRange};
pub use sample::Sample;
pub use spline::{sample_spline, Spline};
