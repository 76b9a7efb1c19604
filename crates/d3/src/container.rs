//! Container bounds.

use crate::spatial_index::Aabb3D;
use u_loading_core::geometry::Boundary;
use u_loading_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed bounding box items are loaded into.
///
/// In container-local coordinates the box spans `[-width/2, width/2]` on x,
/// `[0, height]` on y and `[-depth/2, depth/2]` on z.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerSpec {
    width: f64,
    height: f64,
    depth: f64,
}

impl ContainerSpec {
    /// Creates a container, rejecting non-positive or non-finite extents.
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self> {
        let spec = Self {
            width,
            height,
            depth,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// The stock truck container: 4 wide, 2 high, 6 deep (volume 48).
    pub fn truck() -> Self {
        Self {
            width: 4.0,
            height: 2.0,
            depth: 6.0,
        }
    }

    /// Returns the width (x extent).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height (y extent).
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the depth (z extent).
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Returns the container volume.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// Returns the container box in container-local coordinates.
    pub fn aabb(&self) -> Aabb3D {
        Aabb3D::new(
            [-self.width / 2.0, 0.0, -self.depth / 2.0],
            [self.width / 2.0, self.height, self.depth / 2.0],
        )
    }
}

impl Default for ContainerSpec {
    fn default() -> Self {
        Self::truck()
    }
}

impl Boundary for ContainerSpec {
    type Scalar = f64;

    fn extents(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    fn measure(&self) -> f64 {
        self.volume()
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidInput(format!(
                    "container {} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    fn contains_box(&self, min: &[f64; 3], max: &[f64; 3]) -> bool {
        Aabb3D::new(*min, *max).is_within(&self.aabb())
    }
}
