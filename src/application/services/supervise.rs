//! Application service — post-install supervision loop.
//!
//! Entered only when the state is `Installed` after command dispatch. Polls
//! the process table and reconciles the recorded state against observed
//! reality until the state leaves `Installed` or the invocation is
//! interrupted. The loop never restarts the agent.

use tracing::{debug, warn};

use crate::application::ports::ProcessLocator;
use crate::domain::{Layout, LifecycleState, Settings};
use crate::state::LifecycleCell;

/// Supervise the installed agent until the state leaves `Installed`.
pub async fn supervise(
    cell: &LifecycleCell,
    layout: &Layout,
    settings: &Settings,
    locator: &mut impl ProcessLocator,
) {
    debug!(
        interval_secs = settings.poll_interval.as_secs(),
        "supervisor: watching agent process"
    );
    while cell.get() == LifecycleState::Installed {
        tokio::time::sleep(settings.poll_interval).await;
        // The interrupt task may have reconciled the state during the sleep.
        if cell.get() != LifecycleState::Installed {
            break;
        }
        match locator.find_agent() {
            Some(pid) => debug!(pid, "supervisor: agent alive"),
            None => {
                warn!("supervisor: agent process disappeared");
                cell.set(LifecycleState::RemoveFailed);
                if !layout.install_dir().exists() {
                    // Files are gone too: treat it as an external removal
                    // rather than a crash.
                    cell.set(LifecycleState::NotInstalled);
                }
            }
        }
    }
    debug!(state = %cell.get(), "supervisor: exiting");
}
