//! Application service — agent install use-case.
//!
//! Orchestrates fetch + configure + verify, mutating the lifecycle cell as
//! it proceeds. Sub-step failures are combined: either one marks the whole
//! install failed, and a single error is reported to the dispatcher.

use tracing::{info, warn};

use crate::application::ports::{ConfigTranslator, PackageFetcher, ProgressReporter};
use crate::domain::{InstallError, Layout, LifecycleState};
use crate::state::LifecycleCell;

/// Guard run by the caller before the installer: a pre-existing standard
/// installation of the agent makes the whole operation fail fast, before any
/// fetch occurs and without touching the lifecycle state.
///
/// # Errors
///
/// Returns [`InstallError::ConflictingInstall`] when the system binary exists.
pub fn guard_conflicting_install(layout: &Layout) -> Result<(), InstallError> {
    if layout.system_binary().exists() {
        return Err(InstallError::ConflictingInstall);
    }
    Ok(())
}

/// Install the agent.
///
/// Always re-fetches the package — there is deliberately no "already up to
/// date" shortcut, to avoid running a stale version after a partial upgrade.
///
/// # Errors
///
/// Returns the first failed sub-step once both have run; the lifecycle state
/// is `InstallFailed` whenever an error is returned.
pub fn install(
    cell: &LifecycleCell,
    layout: &Layout,
    fetcher: &impl PackageFetcher,
    translator: &impl ConfigTranslator,
    reporter: &impl ProgressReporter,
) -> Result<(), InstallError> {
    cell.set(LifecycleState::Installing);
    info!("installing agent into {}", layout.install_dir().display());

    reporter.step("Fetching agent package...");
    let mut fetch_failed = false;
    if let Err(e) = fetcher.fetch(&layout.install_dir()) {
        warn!("package fetch failed: {e:#}");
        fetch_failed = true;
    }
    // The executable is the only evidence that counts: a "successful" fetch
    // that did not produce it is still a fetch failure.
    if !layout.marker_exists() {
        fetch_failed = true;
    }
    if fetch_failed {
        reporter.warn("Package fetch did not produce the agent executable");
    } else {
        reporter.success("Package unpacked");
    }

    reporter.step("Writing agent configuration...");
    let mut config_failed = false;
    if let Err(e) = translator.translate(layout) {
        warn!("config translation failed: {e:#}");
        reporter.warn("Agent configuration could not be written");
        config_failed = true;
    }

    if fetch_failed || config_failed {
        cell.set(LifecycleState::InstallFailed);
        return Err(if fetch_failed {
            InstallError::FetchFailed
        } else {
            InstallError::ConfigTranslationFailed
        });
    }

    cell.set(LifecycleState::Installed);
    info!("agent installed");
    reporter.success("Agent installed");
    Ok(())
}
