//! `minionctl --install` — fetch, configure, and verify the agent.

use crate::application::services::install;
use crate::domain::{InstallError, Layout, Settings};
use crate::infra::{HttpPackageFetcher, IniConfigTranslator};
use crate::output::OutputContext;
use crate::state::LifecycleCell;

/// Run the install action.
///
/// # Errors
///
/// Returns the install error after the lifecycle state has been updated;
/// the dispatcher maps it to a non-zero exit code.
pub fn run(
    ctx: &OutputContext,
    cell: &LifecycleCell,
    layout: &Layout,
    settings: &Settings,
) -> Result<(), InstallError> {
    // Mutually-exclusive-installation guard: fail before any fetch and
    // without touching the state.
    install::guard_conflicting_install(layout)?;

    let fetcher = HttpPackageFetcher::new(&settings.package_base_url);
    let translator = IniConfigTranslator::new(&settings.host_config_section);
    install::install(cell, layout, &fetcher, &translator, ctx)
}
