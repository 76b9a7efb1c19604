//! Loading sessions.
//!
//! A [`LoadingSession`] owns one container, the ordered sequence of placed
//! items and the occupied-volume total. Requests go through two phases:
//! [`plan`](LoadingSession::plan) validates, admits and positions every unit
//! without touching the session, and [`commit`](LoadingSession::commit)
//! applies the whole plan at once. A plan that fails, or is dropped, leaves
//! no trace.

use crate::capacity::CapacityTracker;
use crate::container::ContainerSpec;
use crate::item::ItemRequest;
use crate::shelf::ShelfScan;
use crate::spatial_index::{Aabb3D, SpatialIndex3D};
use u_loading_core::geometry::{Boundary, Geometry};
use u_loading_core::{Error, LoadConfig, PlacedItem, Result, VolumeSummary};

/// Positions computed for one request, not yet applied to the session.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a pending load has no effect until it is committed"]
pub struct PendingLoad {
    revision: u64,
    items: Vec<PlacedItem>,
}

impl PendingLoad {
    /// The staged units in placement order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Total volume of the staged units.
    pub fn volume(&self) -> f64 {
        self.items.iter().map(PlacedItem::volume).sum()
    }

    /// Session revision this load was planned against.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// One container and everything loaded into it.
#[derive(Debug, Clone)]
pub struct LoadingSession {
    container: ContainerSpec,
    config: LoadConfig,
    items: Vec<PlacedItem>,
    capacity: CapacityTracker,
    revision: u64,
}

/// Creates an empty session with the default configuration.
pub fn create_session(container: ContainerSpec) -> LoadingSession {
    LoadingSession::new(container)
}

impl LoadingSession {
    /// Creates an empty session with the default configuration.
    pub fn new(container: ContainerSpec) -> Self {
        Self::with_config(container, LoadConfig::default())
    }

    /// Creates an empty session with the given configuration.
    pub fn with_config(container: ContainerSpec, config: LoadConfig) -> Self {
        Self {
            capacity: CapacityTracker::new(&container),
            container,
            config,
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns the container bounds.
    pub fn container(&self) -> &ContainerSpec {
        &self.container
    }

    /// Returns the configuration.
    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Placed items in placement order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Number of placed units.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of placed item volumes.
    pub fn occupied_volume(&self) -> f64 {
        self.capacity.occupied()
    }

    /// Container volume.
    pub fn container_volume(&self) -> f64 {
        self.capacity.total()
    }

    /// Volume not yet occupied.
    pub fn remaining_volume(&self) -> f64 {
        self.capacity.remaining()
    }

    /// Counter bumped by every commit and reset.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Volume-only admission check for a prospective request.
    pub fn can_admit(&self, request_volume: f64) -> bool {
        self.capacity.can_admit(request_volume)
    }

    /// Occupancy snapshot for presentation.
    pub fn summary(&self) -> VolumeSummary {
        VolumeSummary::new(
            self.occupied_volume(),
            self.container_volume(),
            self.items.len(),
        )
    }

    /// Computes positions for every unit of `request` without mutating the session.
    ///
    /// Fails with `InvalidInput`, `CapacityExceeded`, `VerticalOverflow`, or
    /// `Overlap` (strict geometry check only). Units are positioned against
    /// the placed sequence followed by the units staged earlier in the same
    /// request.
    pub fn plan(&self, request: &ItemRequest) -> Result<PendingLoad> {
        request.validate_min_unit(self.config.effective_min_unit())?;
        if request.quantity > self.config.max_units {
            return Err(Error::InvalidInput(format!(
                "quantity {} exceeds the per-request limit of {}",
                request.quantity, self.config.max_units
            )));
        }

        let extents = request.extents();
        let strict = self.config.geometry_check.is_strict();
        if strict && !self.container.admits_extents(&extents) {
            return Err(Error::InvalidInput(format!(
                "item {:?} does not fit container {:?}",
                extents,
                self.container.extents()
            )));
        }

        self.capacity.admit(request.request_volume())?;

        let mut scan = ShelfScan::over(&self.container, &self.items, extents);
        let mut index = strict.then(|| SpatialIndex3D::from_placed(&self.items));
        let mut staged = Vec::new();

        for unit in 0..request.quantity {
            let position = scan.position(unit)?;
            let item = PlacedItem::new(request.width, request.height, request.depth, position);

            if let Some(index) = index.as_mut() {
                let aabb = Aabb3D::from_placed(&item);
                if !self.container.contains_box(&aabb.min, &aabb.max) {
                    return Err(Error::InvalidInput(format!(
                        "unit {} at {:?} leaves the container",
                        unit,
                        item.position_array()
                    )));
                }
                if let Some(other) = index.first_collision(&aabb) {
                    return Err(Error::Overlap { unit, other });
                }
                index.insert_item(&item);
            }

            log::debug!(
                "Unit {} of {} placed at {:?}",
                unit,
                request.quantity,
                item.position_array()
            );
            scan.advance(extents);
            staged.push(item);
        }

        Ok(PendingLoad {
            revision: self.revision,
            items: staged,
        })
    }

    /// Appends a planned load and adds its volume, all or nothing.
    ///
    /// Fails with `StaleLoad` if the session was committed to or reset after
    /// the load was planned.
    pub fn commit(&mut self, pending: PendingLoad) -> Result<&[PlacedItem]> {
        if pending.revision != self.revision {
            return Err(Error::StaleLoad {
                expected: pending.revision,
                actual: self.revision,
            });
        }

        let start = self.items.len();
        self.capacity.commit(&pending.items);
        self.items.extend(pending.items);
        self.revision += 1;

        log::debug!(
            "Committed {} units, occupied volume {} / {}",
            self.items.len() - start,
            self.occupied_volume(),
            self.container_volume()
        );

        Ok(&self.items[start..])
    }

    /// Plans and commits a request, returning the newly placed units.
    pub fn request_load(&mut self, request: &ItemRequest) -> Result<Vec<PlacedItem>> {
        let pending = match self.plan(request) {
            Ok(pending) => pending,
            Err(err) => {
                log::warn!("Load request {:?} rejected: {}", request, err);
                return Err(err);
            }
        };
        self.commit(pending).map(|placed| placed.to_vec())
    }

    /// Removes every placed item and zeroes the occupied volume.
    pub fn reset(&mut self) {
        self.items.clear();
        self.capacity.reset();
        self.revision += 1;
        log::debug!("Session reset");
    }
}
