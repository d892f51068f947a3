/// Tolerances used by curve evaluation and control-point classification.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Linear tolerance for vanishing vectors (velocity, cross products)
    pub linear: f64,
    /// Handle-to-anchor distance below which a handle counts as collapsed
    pub handle: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_HANDLE: f64 = 1e-4;

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            handle: Self::DEFAULT_HANDLE,
        }
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// Check if a handle offset is short enough to be collapsed onto its anchor
    pub fn is_collapsed_handle(self, distance: f64) -> bool {
        distance < self.handle
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
