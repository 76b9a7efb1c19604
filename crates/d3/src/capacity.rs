//! Volume-only admission control.
//!
//! The tracker answers whether a request's aggregate volume still fits the
//! container. Passing the check does not mean the request is geometrically
//! placeable; the shelf scan can still reject it with a vertical overflow.

use crate::container::ContainerSpec;
use u_loading_core::{Error, PlacedItem, Result};

/// Running occupied-volume total for one container.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityTracker {
    total: f64,
    occupied: f64,
}

impl CapacityTracker {
    /// Creates an empty tracker for the given container.
    pub fn new(container: &ContainerSpec) -> Self {
        Self {
            total: container.volume(),
            occupied: 0.0,
        }
    }

    /// Container volume.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Sum of committed item volumes.
    pub fn occupied(&self) -> f64 {
        self.occupied
    }

    /// Volume not yet occupied.
    pub fn remaining(&self) -> f64 {
        (self.total - self.occupied).max(0.0)
    }

    /// Returns true iff `occupied + request_volume <= total`.
    pub fn can_admit(&self, request_volume: f64) -> bool {
        self.occupied + request_volume <= self.total
    }

    /// Like [`can_admit`](Self::can_admit), reporting `CapacityExceeded` on failure.
    pub fn admit(&self, request_volume: f64) -> Result<()> {
        if self.can_admit(request_volume) {
            Ok(())
        } else {
            Err(Error::CapacityExceeded {
                requested: request_volume,
                available: self.remaining(),
            })
        }
    }

    /// Adds the volumes of committed items, one at a time in placement order.
    pub(crate) fn commit<'a>(&mut self, items: impl IntoIterator<Item = &'a PlacedItem>) {
        for item in items {
            self.occupied += item.volume();
        }
    }

    /// Zeroes the occupied volume.
    pub(crate) fn reset(&mut self) {
        self.occupied = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn unit_cube() -> PlacedItem {
        PlacedItem::new(1.0, 1.0, 1.0, Point3::origin())
    }

    #[test]
    fn test_admission_is_inclusive() {
        let tracker = CapacityTracker::new(&ContainerSpec::truck());
        assert!(tracker.can_admit(48.0));
        assert!(!tracker.can_admit(48.0 + 1e-9));
        assert!(tracker.admit(0.0).is_ok());
    }

    #[test]
    fn test_admit_reports_available() {
        let mut tracker = CapacityTracker::new(&ContainerSpec::truck());
        let items = vec![unit_cube(); 4];
        tracker.commit(&items);

        assert_eq!(tracker.occupied(), 4.0);
        assert_eq!(tracker.remaining(), 44.0);
        assert!(tracker.can_admit(44.0));
        assert_eq!(
            tracker.admit(45.0),
            Err(Error::CapacityExceeded {
                requested: 45.0,
                available: 44.0
            })
        );
    }

    #[test]
    fn test_reset() {
        let mut tracker = CapacityTracker::new(&ContainerSpec::truck());
        tracker.commit(&[unit_cube()]);
        tracker.reset();
        assert_eq!(tracker.occupied(), 0.0);
        assert_eq!(tracker.total(), 48.0);
    }
}
