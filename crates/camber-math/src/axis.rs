use serde::{Deserialize, Serialize};

use crate::Vector3;

/// A coordinate axis, used to pick the component a ring interpolation edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn get(self, v: Vector3) -> f64 {
        v[self.index()]
    }

    pub fn set(self, v: &mut Vector3, value: f64) {
        v[self.index()] = value;
    }

    /// Unit vector along this axis.
    pub fn unit(self) -> Vector3 {
        match self {
            Axis::X => Vector3::X,
            Axis::Y => Vector3::Y,
            Axis::Z => Vector3::Z,
        }
    }
}
