//! Error types for container loading.

use thiserror::Error;

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while admitting or placing items.
///
/// Every variant is recoverable: the session a failed request was issued
/// against is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Non-positive, non-finite or undersized dimensions, or a zero quantity.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The aggregate request volume does not fit the remaining container volume.
    #[error("not enough space in the container: requested {requested}, available {available}")]
    CapacityExceeded {
        /// Total volume of the request (all units).
        requested: f64,
        /// Container volume not yet occupied.
        available: f64,
    },

    /// The shelf scan ran past the container height for a unit of the request.
    #[error(
        "not enough vertical space for unit {unit}: needs {required}, container height {available}"
    )]
    VerticalOverflow {
        /// Zero-based unit index within the request.
        unit: usize,
        /// Vertical extent the unit would reach (cursor + item height).
        required: f64,
        /// Container height.
        available: f64,
    },

    /// Strict geometry check: the unit would intersect an existing item.
    #[error("unit {unit} overlaps placed item {other}")]
    Overlap {
        /// Zero-based unit index within the request.
        unit: usize,
        /// Index of the intersecting item in the combined placed sequence.
        other: usize,
    },

    /// A pending load was committed after the session changed underneath it.
    #[error("pending load is stale: session revision {expected} != {actual}")]
    StaleLoad {
        /// Revision the load was planned against.
        expected: u64,
        /// Current session revision.
        actual: u64,
    },
}

impl Error {
    /// Returns true if the request was rejected before any placement was attempted.
    pub fn is_admission_failure(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::CapacityExceeded { .. })
    }
}
