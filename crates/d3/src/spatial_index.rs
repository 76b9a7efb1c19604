//! Spatial indexing for 3D collision detection.
//!
//! Used by the strict geometry check to test a candidate unit against every
//! placed and staged unit. Container loads are small, so a flat AABB list
//! beats a tree on cache locality.

use u_loading_core::PlacedItem;

/// Tolerance for touching faces, which do not count as intersecting.
const EPSILON: f64 = 1e-9;

/// Simple 3D AABB (Axis-Aligned Bounding Box).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3D {
    /// Minimum corner (x, y, z)
    pub min: [f64; 3],
    /// Maximum corner (x, y, z)
    pub max: [f64; 3],
}

impl Aabb3D {
    /// Creates a new AABB.
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// Creates the AABB of a placed item.
    pub fn from_placed(item: &PlacedItem) -> Self {
        let (min, max) = item.aabb();
        Self { min, max }
    }

    /// Checks if the interiors of two AABBs intersect.
    pub fn intersects(&self, other: &Aabb3D) -> bool {
        (0..3).all(|i| {
            self.min[i] < other.max[i] - EPSILON && self.max[i] > other.min[i] + EPSILON
        })
    }

    /// Checks if this AABB is fully contained within another AABB.
    pub fn is_within(&self, other: &Aabb3D) -> bool {
        (0..3).all(|i| {
            self.min[i] >= other.min[i] - EPSILON && self.max[i] <= other.max[i] + EPSILON
        })
    }

    /// Returns the volume of this AABB.
    pub fn volume(&self) -> f64 {
        (self.max[0] - self.min[0]) * (self.max[1] - self.min[1]) * (self.max[2] - self.min[2])
    }
}

/// An entry in the 3D spatial index representing a placed item.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry3D {
    /// Index of the item in the placed sequence
    pub index: usize,
    /// Axis-aligned bounding box
    pub aabb: Aabb3D,
}

/// 3D spatial index using a simple AABB list.
#[derive(Debug, Default)]
pub struct SpatialIndex3D {
    entries: Vec<SpatialEntry3D>,
}

impl SpatialIndex3D {
    /// Creates a new empty spatial index.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds an index over a placed sequence, keyed by position in it.
    pub fn from_placed<'a>(items: impl IntoIterator<Item = &'a PlacedItem>) -> Self {
        let mut index = Self::new();
        for item in items {
            index.insert_item(item);
        }
        index
    }

    /// Appends a placed item; its index is the current length.
    pub fn insert_item(&mut self, item: &PlacedItem) {
        let index = self.entries.len();
        self.entries.push(SpatialEntry3D {
            index,
            aabb: Aabb3D::from_placed(item),
        });
    }

    /// Returns the number of entries in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the index of the earliest entry intersecting `query`.
    pub fn first_collision(&self, query: &Aabb3D) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.aabb.intersects(query))
            .map(|entry| entry.index)
    }
}
