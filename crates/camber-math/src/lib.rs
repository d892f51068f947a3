pub mod aabb;
pub mod axis;
pub mod plane;
pub mod transform;
pub mod vector;

pub use glam::{dvec3, DMat4, DVec3};
pub use aabb::Aabb3;
pub use axis::Axis;
pub use plane::Plane;
pub use transform::Transform;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
