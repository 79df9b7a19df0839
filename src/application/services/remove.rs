//! Application service — agent removal use-case.
//!
//! Terminates the agent process, waits out the grace period, then deletes
//! the fixed list of installed paths. Removal proceeds even when nothing is
//! installed so that a half-removed tree is still cleaned up; the missing
//! marker is recorded and reported at the end.

use tracing::{info, warn};

use crate::application::ports::{ProcessLocator, ProgressReporter};
use crate::domain::layout::unit_matches;
use crate::domain::{Layout, LifecycleState, RemoveError, Settings};
use crate::state::LifecycleCell;

/// Remove the agent.
///
/// # Errors
///
/// Returns [`RemoveError::ProcessStillRunning`] when the agent survives the
/// grace period, or [`RemoveError::NotInstalled`] when there was nothing to
/// remove (the cleanup still ran in that case).
pub async fn remove(
    cell: &LifecycleCell,
    layout: &Layout,
    settings: &Settings,
    locator: &mut impl ProcessLocator,
    reporter: &impl ProgressReporter,
) -> Result<(), RemoveError> {
    let mut nothing_installed = false;
    if !layout.marker_exists() {
        cell.set(LifecycleState::NotInstalled);
        reporter.warn("Agent is not installed; cleaning up anyway");
        warn!("remove requested with no installed marker; continuing");
        nothing_installed = true;
    }

    cell.set(LifecycleState::Removing);

    if let Some(pid) = locator.find_agent() {
        reporter.step("Stopping agent process...");
        info!(pid, "terminating agent process");
        if let Err(e) = locator.terminate(pid) {
            warn!(pid, "termination signal failed: {e:#}");
        }
        tokio::time::sleep(settings.grace_period).await;
    }

    if let Some(pid) = locator.find_agent() {
        cell.set(LifecycleState::RemoveFailed);
        warn!(pid, "agent process survived the grace period");
        return Err(RemoveError::ProcessStillRunning { pid });
    }

    reporter.step("Deleting installed files...");
    delete_installed_paths(layout);

    cell.set(LifecycleState::NotInstalled);
    info!("agent removed");
    reporter.success("Agent removed");

    if nothing_installed {
        Err(RemoveError::NotInstalled)
    } else {
        Ok(())
    }
}

/// Delete the fixed removal list. Individual failures (for example a
/// permission error on one path) are logged but not surfaced: the removal
/// reports overall success once the sequence completes.
fn delete_installed_paths(layout: &Layout) {
    for path in layout.removal_targets() {
        if !path.exists() {
            continue;
        }
        if let Err(e) = std::fs::remove_dir_all(&path) {
            warn!("could not delete {}: {e}", path.display());
        }
    }

    for glob in &Layout::UNIT_GLOBS {
        let dir = layout.unit_dir(glob);
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let name = entry.file_name();
            if unit_matches(glob, &name.to_string_lossy()) {
                if let Err(e) = std::fs::remove_file(entry.path()) {
                    warn!("could not delete unit {}: {e}", entry.path().display());
                }
            }
        }
    }
}
