//! Volume summary representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only occupancy snapshot of a loading session, for presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeSummary {
    /// Sum of placed item volumes.
    pub occupied: f64,
    /// Container volume.
    pub total: f64,
    /// Number of placed units.
    pub item_count: usize,
}

impl VolumeSummary {
    /// Creates a new summary.
    pub fn new(occupied: f64, total: f64, item_count: usize) -> Self {
        Self {
            occupied,
            total,
            item_count,
        }
    }

    /// Returns the volume still available.
    pub fn remaining(&self) -> f64 {
        (self.total - self.occupied).max(0.0)
    }

    /// Utilization ratio (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        if self.total > 0.0 {
            self.occupied / self.total
        } else {
            0.0
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }

    /// Returns true if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

impl fmt::Display for VolumeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Occupied Volume: {} / {} cubic units",
            self.occupied, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_empty() {
        let summary = VolumeSummary::new(0.0, 48.0, 0);
        assert!(summary.is_empty());
        assert_eq!(summary.utilization(), 0.0);
        assert_eq!(summary.remaining(), 48.0);
    }

    #[test]
    fn test_summary_utilization() {
        let summary = VolumeSummary::new(12.0, 48.0, 12);
        assert_eq!(summary.utilization(), 0.25);
        assert_eq!(summary.utilization_percent(), "25.0%");
        assert_eq!(summary.remaining(), 36.0);
    }

    #[test]
    fn test_summary_display() {
        let summary = VolumeSummary::new(4.0, 48.0, 4);
        assert_eq!(summary.to_string(), "Occupied Volume: 4 / 48 cubic units");
    }

    #[test]
    fn test_summary_zero_total() {
        let summary = VolumeSummary::new(0.0, 0.0, 0);
        assert_eq!(summary.utilization(), 0.0);
    }
}
