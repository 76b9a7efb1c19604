//! Placed item representation.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unit that has been given a position inside the container.
///
/// `position` is the geometric centre of the item in container-local
/// coordinates: the horizontal plane is centred on the container (origin at
/// its middle), the vertical axis starts at the container floor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    /// Extent along x.
    pub width: f64,
    /// Extent along y (vertical).
    pub height: f64,
    /// Extent along z.
    pub depth: f64,
    /// Centre of the item.
    pub position: Point3<f64>,
}

impl PlacedItem {
    /// Creates a placed item from its extents and centre.
    pub fn new(width: f64, height: f64, depth: f64, position: Point3<f64>) -> Self {
        Self {
            width,
            height,
            depth,
            position,
        }
    }

    /// Returns `[width, height, depth]`.
    pub fn extents(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    /// Returns the item volume.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// Returns the (min, max) corners of the item's bounding box.
    pub fn aabb(&self) -> ([f64; 3], [f64; 3]) {
        let half = [self.width / 2.0, self.height / 2.0, self.depth / 2.0];
        let p = [self.position.x, self.position.y, self.position.z];
        (
            [p[0] - half[0], p[1] - half[1], p[2] - half[2]],
            [p[0] + half[0], p[1] + half[1], p[2] + half[2]],
        )
    }

    /// Returns the position as a plain array, the form renderers consume.
    pub fn position_array(&self) -> [f64; 3] {
        [self.position.x, self.position.y, self.position.z]
    }
}
