//! `minionctl --remove` — stop the agent and delete its files.

use crate::application::ports::ProcessLocator;
use crate::application::services::remove;
use crate::domain::{Layout, RemoveError, Settings};
use crate::output::OutputContext;
use crate::state::LifecycleCell;

/// Run the remove action.
///
/// # Errors
///
/// Returns the removal error after the lifecycle state has been updated;
/// the dispatcher maps it to a non-zero exit code.
pub async fn run(
    ctx: &OutputContext,
    cell: &LifecycleCell,
    layout: &Layout,
    settings: &Settings,
    locator: &mut impl ProcessLocator,
) -> Result<(), RemoveError> {
    remove::remove(cell, layout, settings, locator, ctx).await
}
