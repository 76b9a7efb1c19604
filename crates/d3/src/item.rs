//! Item load requests.

use u_loading_core::geometry::Geometry;
use u_loading_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A request to load `quantity` identical boxes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemRequest {
    /// Extent along x.
    pub width: f64,
    /// Extent along y (vertical).
    pub height: f64,
    /// Extent along z.
    pub depth: f64,
    /// Number of units to place.
    pub quantity: usize,
}

impl ItemRequest {
    /// Creates a request for a single unit.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
            quantity: 1,
        }
    }

    /// Sets the number of units.
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    /// Volume of all units together, as used for admission.
    pub fn request_volume(&self) -> f64 {
        self.width * self.height * self.depth * self.quantity as f64
    }

    /// Validates the request against a minimum extent.
    pub fn validate_min_unit(&self, min_unit: f64) -> Result<()> {
        self.validate()?;
        for (name, value) in self.named_extents() {
            if value < min_unit {
                return Err(Error::InvalidInput(format!(
                    "item {} {} is below the minimum unit {}",
                    name, value, min_unit
                )));
            }
        }
        Ok(())
    }

    fn named_extents(&self) -> [(&'static str, f64); 3] {
        [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ]
    }
}

impl Geometry for ItemRequest {
    type Scalar = f64;

    fn extents(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    fn quantity(&self) -> usize {
        self.quantity
    }

    fn total_measure(&self) -> f64 {
        self.request_volume()
    }

    fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(Error::InvalidInput("quantity must be positive".into()));
        }
        for (name, value) in self.named_extents() {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidInput(format!(
                    "item {} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
