//! Core geometry traits.
//!
//! Extents are always reported in `[width, height, depth]` order: width and
//! depth span the horizontal plane, height is the vertical axis.

use crate::Result;
use nalgebra::RealField;

/// Trait for box-shaped items that can be loaded into a container.
pub trait Geometry: Clone + Send + Sync {
    /// The coordinate type (f32 or f64).
    type Scalar: RealField + Copy;

    /// Returns the extents as `[width, height, depth]`.
    fn extents(&self) -> [Self::Scalar; 3];

    /// Returns the number of units to place.
    fn quantity(&self) -> usize;

    /// Returns the volume of a single unit.
    fn measure(&self) -> Self::Scalar {
        let [w, h, d] = self.extents();
        w * h * d
    }

    /// Returns the volume of all units together.
    fn total_measure(&self) -> Self::Scalar;

    /// Validates the geometry and returns an error if invalid.
    fn validate(&self) -> Result<()>;
}

/// Trait for boundaries/containers that hold geometries.
pub trait Boundary: Clone + Send + Sync {
    /// The coordinate type (f32 or f64).
    type Scalar: RealField + Copy;

    /// Returns the extents as `[width, height, depth]`.
    fn extents(&self) -> [Self::Scalar; 3];

    /// Returns the enclosed volume.
    fn measure(&self) -> Self::Scalar {
        let [w, h, d] = self.extents();
        w * h * d
    }

    /// Validates the boundary and returns an error if invalid.
    fn validate(&self) -> Result<()>;

    /// Checks if a box given by its min/max corners lies inside the boundary.
    fn contains_box(&self, min: &[Self::Scalar; 3], max: &[Self::Scalar; 3]) -> bool;

    /// Checks if a geometry could fit inside the boundary in its given orientation.
    fn admits_extents(&self, extents: &[Self::Scalar; 3]) -> bool {
        let bounds = self.extents();
        (0..3).all(|i| extents[i] <= bounds[i])
    }
}
