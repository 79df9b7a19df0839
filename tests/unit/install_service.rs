//! Unit tests for the install service and its caller-side guard.

use minionctl::application::ports::SilentReporter;
use minionctl::application::services::install::{guard_conflicting_install, install};
use minionctl::domain::{InstallError, LifecycleState};
use minionctl::state::LifecycleCell;
use tempfile::TempDir;

use crate::mocks::{
    FetchFails, FetchWritesBinary, FetchWritesNothing, TranslatorFails, TranslatorOk, rooted_layout,
};

#[test]
fn test_guard_passes_when_no_standard_install_exists() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    assert!(guard_conflicting_install(&layout).is_ok());
}

#[test]
fn test_guard_fails_fast_on_conflicting_standard_install() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    let system_bin = layout.system_binary();
    std::fs::create_dir_all(system_bin.parent().expect("parent")).expect("mkdir");
    std::fs::write(&system_bin, b"elf").expect("write system binary");

    let cell = LifecycleCell::new(LifecycleState::NotInstalled);
    let err = guard_conflicting_install(&layout).expect_err("conflict must fail");
    assert_eq!(err, InstallError::ConflictingInstall);
    // The guard runs before the installer: state untouched.
    assert_eq!(cell.get(), LifecycleState::NotInstalled);
}

#[test]
fn test_install_happy_path_ends_installed() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    let cell = LifecycleCell::new(LifecycleState::NotInstalled);

    let result = install(&cell, &layout, &FetchWritesBinary, &TranslatorOk, &SilentReporter);

    assert!(result.is_ok());
    assert_eq!(cell.get(), LifecycleState::Installed);
    assert!(layout.marker_exists());
    assert!(layout.minion_config().exists());
}

#[test]
fn test_install_fetch_without_executable_is_fetch_failure() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    let cell = LifecycleCell::new(LifecycleState::NotInstalled);

    let err = install(&cell, &layout, &FetchWritesNothing, &TranslatorOk, &SilentReporter)
        .expect_err("missing executable must fail");

    assert_eq!(err, InstallError::FetchFailed);
    assert_eq!(cell.get(), LifecycleState::InstallFailed);
}

#[test]
fn test_install_fetch_error_is_fetch_failure() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    let cell = LifecycleCell::new(LifecycleState::NotInstalled);

    let err = install(&cell, &layout, &FetchFails, &TranslatorOk, &SilentReporter)
        .expect_err("fetch error must fail");

    assert_eq!(err, InstallError::FetchFailed);
    assert_eq!(cell.get(), LifecycleState::InstallFailed);
}

#[test]
fn test_install_config_error_is_translation_failure() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    let cell = LifecycleCell::new(LifecycleState::NotInstalled);

    let err = install(&cell, &layout, &FetchWritesBinary, &TranslatorFails, &SilentReporter)
        .expect_err("config error must fail");

    assert_eq!(err, InstallError::ConfigTranslationFailed);
    assert_eq!(cell.get(), LifecycleState::InstallFailed);
}

#[test]
fn test_install_combined_failures_report_fetch_first() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    let cell = LifecycleCell::new(LifecycleState::NotInstalled);

    let err = install(&cell, &layout, &FetchFails, &TranslatorFails, &SilentReporter)
        .expect_err("both sub-steps failed");

    assert_eq!(err, InstallError::FetchFailed);
    assert_eq!(cell.get(), LifecycleState::InstallFailed);
}

#[test]
fn test_install_rerun_after_failure_can_succeed() {
    // Re-running always re-fetches; a previous InstallFailed is not sticky
    // for the installer itself.
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    let cell = LifecycleCell::new(LifecycleState::NotInstalled);

    let _ = install(&cell, &layout, &FetchFails, &TranslatorOk, &SilentReporter);
    assert_eq!(cell.get(), LifecycleState::InstallFailed);

    let result = install(&cell, &layout, &FetchWritesBinary, &TranslatorOk, &SilentReporter);
    assert!(result.is_ok());
    assert_eq!(cell.get(), LifecycleState::Installed);
}
