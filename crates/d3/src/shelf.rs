//! Shelf-scan placement engine.
//!
//! Positions are derived from a single pass over the placed-item sequence
//! with three cursors, each measured from the container's minimum face:
//!
//! - `a` along x (width), the primary axis that fills first;
//! - `b` along z (depth), advanced whenever `a` wraps;
//! - `v` along y (height), advanced whenever `b` wraps.
//!
//! Cursors step by the extents of the items already placed, while the wrap
//! tests use the extents of the item being placed. Items of differing sizes
//! can therefore end up at positions that overlap earlier items; only the
//! cursor is bounded against the container, and only `v` can reject a unit.
//! Gaps are never reused and nothing is moved once placed.

use crate::container::ContainerSpec;
use nalgebra::Point3;
use u_loading_core::{Error, PlacedItem, Result};

/// Scan state for placing items of one fixed size.
///
/// Feeding the placed sequence through [`advance`](Self::advance) in
/// insertion order and then calling [`position`](Self::position) gives the
/// next unit's centre. Because the wrap tests only depend on the new item's
/// extents, a scan can keep advancing over units it placed itself, so a
/// multi-unit request costs one pass plus one step per unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfScan {
    a: f64,
    b: f64,
    v: f64,
    /// New item extents `[width, height, depth]`.
    extents: [f64; 3],
    /// Container extents `[width, height, depth]`.
    bounds: [f64; 3],
}

impl ShelfScan {
    /// Starts a scan at the container's minimum corner.
    pub fn new(container: &ContainerSpec, extents: [f64; 3]) -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            v: 0.0,
            extents,
            bounds: [container.width(), container.height(), container.depth()],
        }
    }

    /// Starts a scan and advances it over every item in `placed`.
    pub fn over<'a>(
        container: &ContainerSpec,
        placed: impl IntoIterator<Item = &'a PlacedItem>,
        extents: [f64; 3],
    ) -> Self {
        let mut scan = Self::new(container, extents);
        for item in placed {
            scan.advance(item.extents());
        }
        scan
    }

    /// Steps the cursors past one existing item with extents `[w, h, d]`.
    pub fn advance(&mut self, existing: [f64; 3]) {
        let [width, height, depth] = existing;
        let [new_width, _, new_depth] = self.extents;
        let [bound_width, _, bound_depth] = self.bounds;

        self.a += width;
        if self.a + new_width > bound_width {
            self.a = 0.0;
            self.b += depth;
            if self.b + new_depth > bound_depth {
                self.b = 0.0;
                self.v += height;
            }
        }
    }

    /// Returns the cursors as `(a, b, v)`.
    pub fn cursor(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.v)
    }

    /// Returns the centre for the next unit, or `VerticalOverflow` if the
    /// unit would rise above the container. `unit` is only used for the error.
    pub fn position(&self, unit: usize) -> Result<Point3<f64>> {
        let [width, height, depth] = self.extents;
        let [bound_width, bound_height, bound_depth] = self.bounds;

        if self.v + height > bound_height {
            return Err(Error::VerticalOverflow {
                unit,
                required: self.v + height,
                available: bound_height,
            });
        }

        Ok(Point3::new(
            self.a + width / 2.0 - bound_width / 2.0,
            self.v + height / 2.0,
            self.b + depth / 2.0 - bound_depth / 2.0,
        ))
    }
}

/// Computes the centre of one new item from the full placed sequence.
pub fn next_position<'a>(
    container: &ContainerSpec,
    placed: impl IntoIterator<Item = &'a PlacedItem>,
    extents: [f64; 3],
) -> Result<Point3<f64>> {
    ShelfScan::over(container, placed, extents).position(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn place(container: &ContainerSpec, placed: &mut Vec<PlacedItem>, extents: [f64; 3]) {
        let position = next_position(container, placed.iter(), extents).unwrap();
        placed.push(PlacedItem::new(extents[0], extents[1], extents[2], position));
    }

    #[test]
    fn test_first_item_at_minimum_corner() {
        let truck = ContainerSpec::truck();
        let placed: Vec<PlacedItem> = Vec::new();
        let position = next_position(&truck, &placed, [1.0, 1.0, 1.0]).unwrap();
        assert_relative_eq!(position.x, -1.5);
        assert_relative_eq!(position.y, 0.5);
        assert_relative_eq!(position.z, -2.5);
    }

    #[test]
    fn test_fills_width_then_depth_then_height() {
        let truck = ContainerSpec::truck();
        let mut placed = Vec::new();
        for _ in 0..25 {
            place(&truck, &mut placed, [1.0, 1.0, 1.0]);
        }

        // Row of four along x.
        for (i, x) in [-1.5, -0.5, 0.5, 1.5].iter().enumerate() {
            assert_relative_eq!(placed[i].position.x, *x);
            assert_relative_eq!(placed[i].position.z, -2.5);
        }
        // Fifth wraps to the next row along z.
        assert_relative_eq!(placed[4].position.x, -1.5);
        assert_relative_eq!(placed[4].position.z, -1.5);
        assert_relative_eq!(placed[4].position.y, 0.5);
        // Twenty-fifth starts the second layer.
        assert_relative_eq!(placed[24].position.x, -1.5);
        assert_relative_eq!(placed[24].position.y, 1.5);
        assert_relative_eq!(placed[24].position.z, -2.5);
    }

    #[test]
    fn test_vertical_overflow() {
        let truck = ContainerSpec::truck();
        let placed = vec![PlacedItem::new(4.0, 2.0, 4.0, Point3::new(0.0, 1.0, -1.0))];

        let err = next_position(&truck, &placed, [4.0, 1.0, 4.0]).unwrap_err();
        assert_eq!(
            err,
            Error::VerticalOverflow {
                unit: 0,
                required: 3.0,
                available: 2.0
            }
        );
    }

    #[test]
    fn test_cursor_steps_by_existing_extents() {
        let truck = ContainerSpec::truck();
        let mut placed = Vec::new();
        place(&truck, &mut placed, [1.0, 1.0, 2.0]);
        place(&truck, &mut placed, [1.0, 1.0, 1.0]);

        let scan = ShelfScan::over(&truck, &placed, [3.0, 1.0, 1.0]);
        // a goes to 1 (1 + 3 <= 4), then 2 (2 + 3 > 4) and wraps; b steps by
        // the second item's depth, not the new item's.
        assert_eq!(scan.cursor(), (0.0, 1.0, 0.0));

        let position = scan.position(0).unwrap();
        assert_relative_eq!(position.x, -0.5);
        assert_relative_eq!(position.z, -1.5);

        // The first item spans z in [-3, -1], so the new one overlaps it.
        let new_item = PlacedItem::new(3.0, 1.0, 1.0, position);
        let (min_a, max_a) = placed[0].aabb();
        let (min_b, max_b) = new_item.aabb();
        assert!(min_a[0] < max_b[0] && max_a[0] > min_b[0]);
        assert!(min_a[2] < max_b[2] && max_a[2] > min_b[2]);
    }

    #[test]
    fn test_incremental_scan_matches_rescan() {
        let truck = ContainerSpec::truck();
        let mut placed = Vec::new();
        place(&truck, &mut placed, [1.0, 1.0, 2.0]);
        place(&truck, &mut placed, [2.0, 1.0, 1.0]);
        place(&truck, &mut placed, [1.0, 1.0, 1.0]);

        let extents = [2.0, 1.0, 3.0];
        let mut scan = ShelfScan::over(&truck, &placed, extents);
        for unit in 0..3 {
            let incremental = scan.position(unit).unwrap();
            let rescanned = next_position(&truck, &placed, extents).unwrap();
            assert_eq!(incremental, rescanned);

            placed.push(PlacedItem::new(2.0, 1.0, 3.0, incremental));
            scan.advance(extents);
        }
    }

    #[test]
    fn test_positions_are_deterministic() {
        let truck = ContainerSpec::truck();
        let placed = vec![
            PlacedItem::new(1.0, 1.0, 2.0, Point3::new(-1.5, 0.5, -2.0)),
            PlacedItem::new(2.0, 1.0, 1.0, Point3::new(0.0, 0.5, -2.5)),
        ];
        let first = next_position(&truck, &placed, [2.0, 1.0, 1.0]).unwrap();
        let second = next_position(&truck, &placed, [2.0, 1.0, 1.0]).unwrap();
        assert_eq!(first.x.to_bits(), second.x.to_bits());
        assert_eq!(first.y.to_bits(), second.y.to_bits());
        assert_eq!(first.z.to_bits(), second.z.to_bits());
    }
}
