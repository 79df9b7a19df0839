//! Application service — lifecycle status resolution.
//!
//! Sticky transitional/failure states are reported verbatim; otherwise the
//! on-disk marker decides between `Installed` and `NotInstalled`.

use crate::domain::{Layout, LifecycleState};
use crate::state::LifecycleCell;

/// Resolve the current lifecycle state.
///
/// Updates the cell when the state is re-derived from the marker. No other
/// side effects; never fails — absence of evidence is itself a valid state.
pub fn resolve(cell: &LifecycleCell, layout: &Layout) -> LifecycleState {
    let current = cell.get();
    if current.is_sticky() {
        tracing::debug!(state = %current, "status: sticky state reported verbatim");
        return current;
    }

    let resolved = if layout.marker_exists() {
        LifecycleState::Installed
    } else {
        LifecycleState::NotInstalled
    };
    cell.set(resolved);
    tracing::debug!(state = %resolved, "status: resolved from marker");
    resolved
}
