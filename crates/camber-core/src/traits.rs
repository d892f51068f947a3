use crate::error::Result;

/// Structural checks on input geometry: finite coordinates, enough points.
pub trait Validate {
    fn validate(&self) -> Result<()>;

    /// Hand `self` back only if it passes [`Validate::validate`].
    fn validated(self) -> Result<Self>
    where
        Self: Sized,
    {
        self.validate()?;
        Ok(self)
    }
}

/// Axis-aligned bounds as a `(min, max)` corner pair.
pub trait BoundingBox {
    type Point;
    fn bounding_box(&self) -> (Self::Point, Self::Point);
}
