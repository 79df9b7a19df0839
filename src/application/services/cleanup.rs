//! Application service — exit/interrupt reconciliation.
//!
//! Runs on every exit path, including an interrupt landing mid-transition.
//! It trusts nothing about partial progress: only the lifecycle cell, the
//! disk, and the process table. It must never fail — this is the terminal
//! safety net.

use tracing::{debug, info};

use crate::application::ports::ProcessLocator;
use crate::domain::{Layout, LifecycleState, Settings};
use crate::state::LifecycleCell;

/// Reconcile an in-flight lifecycle state to a safe terminal value.
///
/// - `Installing` → `InstallFailed`: an interrupted install can never be
///   assumed complete.
/// - `Removing` → `RemoveFailed` first; then, after the grace period, if both
///   the agent process and the install directory are gone the removal
///   actually finished before the interrupt landed, so downgrade to
///   `NotInstalled`.
/// - Anything else → `NotInstalled`.
pub async fn reconcile(
    cell: &LifecycleCell,
    layout: &Layout,
    settings: &Settings,
    locator: &mut impl ProcessLocator,
) {
    let state = cell.get();
    debug!(state = %state, "cleanup: reconciling");
    match state {
        LifecycleState::Installing => {
            cell.set(LifecycleState::InstallFailed);
            info!("cleanup: interrupted install marked failed");
        }
        LifecycleState::Removing => {
            cell.set(LifecycleState::RemoveFailed);
            tokio::time::sleep(settings.grace_period).await;
            let process_gone = locator.find_agent().is_none();
            let dir_gone = !layout.install_dir().exists();
            if process_gone && dir_gone {
                cell.set(LifecycleState::NotInstalled);
                info!("cleanup: removal had completed; downgraded to not installed");
            } else {
                info!("cleanup: interrupted removal marked failed");
            }
        }
        _ => {
            cell.set(LifecycleState::NotInstalled);
        }
    }
}
