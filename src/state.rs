//! Process-wide lifecycle state cell.
//!
//! There is exactly one logical writer at a time (command dispatch hands the
//! cell to whichever handler runs), but the interrupt task and the supervisor
//! observe the same value, so reads and writes go through a mutex. A
//! poisoned lock is unrecoverable only for the panicking writer; readers
//! take the inner value as-is because the cell holds a plain `Copy` enum.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{Layout, LifecycleState};

/// Shared handle to the current [`LifecycleState`].
#[derive(Debug, Clone)]
pub struct LifecycleCell {
    inner: Arc<Mutex<LifecycleState>>,
}

impl LifecycleCell {
    /// Create a cell holding `initial`.
    #[must_use]
    pub fn new(initial: LifecycleState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(initial)),
        }
    }

    /// Create a cell seeded from the on-disk marker: `Installed` when the
    /// agent binary exists, `NotInstalled` otherwise.
    #[must_use]
    pub fn from_marker(layout: &Layout) -> Self {
        let initial = if layout.marker_exists() {
            LifecycleState::Installed
        } else {
            LifecycleState::NotInstalled
        };
        Self::new(initial)
    }

    /// Read the current state.
    #[must_use]
    pub fn get(&self) -> LifecycleState {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Overwrite the current state.
    pub fn set(&self, state: LifecycleState) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}
