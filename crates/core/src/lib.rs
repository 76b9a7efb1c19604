//! # U-Loading Core
//!
//! Core traits and types for the U-Loading container allocator.
//!
//! This crate provides the foundational types shared by the loading engine
//! and whatever presentation layer consumes its output.
//!
//! ## Core Components
//!
//! - **Geometry traits**: [`Geometry`], [`Boundary`]
//! - **Configuration**: [`LoadConfig`], [`GeometryCheck`]
//! - **Output types**: [`PlacedItem`], [`VolumeSummary`]
//! - **Errors**: [`Error`] - every rejection a load request can produce
//!
//! ## Configuration
//!
//! ```rust
//! use u_loading_core::{GeometryCheck, LoadConfig};
//!
//! let config = LoadConfig::new()
//!     .with_min_unit(0.5)
//!     .with_geometry_check(GeometryCheck::Strict);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;

// Re-exports
pub use config::{GeometryCheck, LoadConfig, DEFAULT_MAX_UNITS, MIN_UNIT_FLOOR};
pub use error::{Error, Result};
pub use geometry::{Boundary, Geometry};
pub use placement::PlacedItem;
pub use result::VolumeSummary;
