//! Loader configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest accepted minimum extent; a zero minimum would admit
/// arbitrarily many vanishingly small units.
pub const MIN_UNIT_FLOOR: f64 = 1e-6;

/// Default cap on the number of units in one request.
pub const DEFAULT_MAX_UNITS: usize = 100_000;

/// How strictly computed positions are checked before a request is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeometryCheck {
    /// Only the shelf-scan cursor is bounded against the container.
    ///
    /// Heterogeneous item sizes may produce numerically overlapping
    /// placements, because the cursor advances by the extents of the items
    /// already placed while the bounds test uses the new item's extents.
    #[default]
    Cursor,
    /// Every unit must lie inside the container box and must not intersect
    /// any placed or staged unit.
    Strict,
}

impl GeometryCheck {
    /// Returns true if collision checks are performed.
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Configuration for a loading session.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadConfig {
    /// Smallest accepted extent along any axis.
    pub min_unit: f64,

    /// Position checking policy.
    pub geometry_check: GeometryCheck,

    /// Largest quantity accepted in a single request.
    pub max_units: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            min_unit: 1.0,
            geometry_check: GeometryCheck::default(),
            max_units: DEFAULT_MAX_UNITS,
        }
    }
}

impl LoadConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum extent, clamped to at least [`MIN_UNIT_FLOOR`].
    pub fn with_min_unit(mut self, min_unit: f64) -> Self {
        self.min_unit = min_unit.max(MIN_UNIT_FLOOR);
        self
    }

    /// Sets the largest quantity accepted in one request (at least 1).
    pub fn with_max_units(mut self, max_units: usize) -> Self {
        self.max_units = max_units.max(1);
        self
    }

    /// Minimum extent actually enforced, also for configs built field by field.
    pub fn effective_min_unit(&self) -> f64 {
        if self.min_unit.is_nan() {
            MIN_UNIT_FLOOR
        } else {
            self.min_unit.max(MIN_UNIT_FLOOR)
        }
    }

    /// Sets the position checking policy.
    pub fn with_geometry_check(mut self, check: GeometryCheck) -> Self {
        self.geometry_check = check;
        self
    }
}
