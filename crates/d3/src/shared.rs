//! Session shared between threads.
//!
//! Each request runs admission, placement and commit under a single lock
//! acquisition, so two requests against the same container never interleave.

use crate::item::ItemRequest;
use crate::session::LoadingSession;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use u_loading_core::{PlacedItem, Result, VolumeSummary};

/// Cloneable handle to a mutex-guarded [`LoadingSession`].
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<LoadingSession>>,
}

impl SharedSession {
    /// Wraps a session for shared use.
    pub fn new(session: LoadingSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    // Every mutation is all-or-nothing, so a panicking holder cannot leave
    // the session half-updated and the poison flag can be ignored.
    fn lock(&self) -> MutexGuard<'_, LoadingSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs a whole load request under the lock.
    pub fn request_load(&self, request: &ItemRequest) -> Result<Vec<PlacedItem>> {
        self.lock().request_load(request)
    }

    /// Clears the session under the lock.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Occupancy snapshot.
    pub fn summary(&self) -> VolumeSummary {
        self.lock().summary()
    }

    /// Copy of the placed sequence.
    pub fn snapshot(&self) -> Vec<PlacedItem> {
        self.lock().items().to_vec()
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut LoadingSession) -> R) -> R {
        f(&mut self.lock())
    }
}

impl From<LoadingSession> for SharedSession {
    fn from(session: LoadingSession) -> Self {
        Self::new(session)
    }
}
