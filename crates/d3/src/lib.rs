//! # U-Loading 3D
//!
//! Greedy single-container loading for the U-Loading allocator.
//!
//! Items arrive as an ordered stream of requests (box extents plus a
//! quantity). Each request is admitted by volume, then every unit is given a
//! deterministic position by a shelf scan that fills the container width
//! first, then its depth, then its height. A request either lands completely
//! or not at all.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_loading_d3::{create_session, ContainerSpec, ItemRequest};
//!
//! let mut session = create_session(ContainerSpec::truck());
//! let placed = session
//!     .request_load(&ItemRequest::new(1.0, 1.0, 1.0).with_quantity(4))
//!     .unwrap();
//!
//! assert_eq!(placed.len(), 4);
//! assert_eq!(session.occupied_volume(), 4.0);
//! println!("{}", session.summary());
//! ```
//!
//! ## Sharing a session
//!
//! [`LoadingSession`] is a plain value with no interior locking. When
//! several clients feed one container, wrap it in a [`SharedSession`]: each
//! request then runs admission, the per-unit placement loop and the commit
//! under one lock acquisition, so two requests never interleave.
//!
//! ```rust
//! use u_loading_d3::{ContainerSpec, ItemRequest, LoadingSession, SharedSession};
//!
//! let shared = SharedSession::new(LoadingSession::new(ContainerSpec::truck()));
//! let worker = shared.clone();
//! std::thread::spawn(move || worker.request_load(&ItemRequest::new(1.0, 1.0, 1.0)))
//!     .join()
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(shared.summary().item_count, 1);
//! ```
//!
//! ## Limitations
//!
//! - Admission only compares volumes; a request that passes can still fail
//!   with [`Error::VerticalOverflow`].
//! - With the default [`GeometryCheck::Cursor`] policy, mixed item sizes can
//!   produce overlapping placements. Use [`GeometryCheck::Strict`] to reject
//!   them instead.
//! - A single request may hold at most [`LoadConfig::max_units`] units.

pub mod capacity;
pub mod container;
pub mod item;
pub mod session;
pub mod shared;
pub mod shelf;
pub mod spatial_index;

// Re-exports
pub use capacity::CapacityTracker;
pub use container::ContainerSpec;
pub use item::ItemRequest;
pub use session::{create_session, LoadingSession, PendingLoad};
pub use shared::SharedSession;
pub use shelf::{next_position, ShelfScan};
pub use spatial_index::{Aabb3D, SpatialEntry3D, SpatialIndex3D};
pub use u_loading_core::{
    Boundary, Error, Geometry, GeometryCheck, LoadConfig, PlacedItem, Result, VolumeSummary,
};

/// Error returned by load requests.
pub type LoadError = Error;
