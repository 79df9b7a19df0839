//! Unit tests for the exit/interrupt reconciliation service.

use minionctl::application::services::cleanup::reconcile;
use minionctl::domain::{LifecycleState, Settings};
use minionctl::state::LifecycleCell;
use tempfile::TempDir;

use crate::mocks::{ImmortalAgent, NoAgent, place_marker, rooted_layout};

#[tokio::test]
async fn test_interrupted_install_becomes_install_failed() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    let cell = LifecycleCell::new(LifecycleState::Installing);
    let mut locator = NoAgent;

    reconcile(&cell, &layout, &Settings::immediate(), &mut locator).await;

    assert_eq!(cell.get(), LifecycleState::InstallFailed);
}

#[tokio::test]
async fn test_interrupted_removal_that_finished_downgrades_to_not_installed() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    // Process gone and install dir gone: the removal actually completed.
    let cell = LifecycleCell::new(LifecycleState::Removing);
    let mut locator = NoAgent;

    reconcile(&cell, &layout, &Settings::immediate(), &mut locator).await;

    assert_eq!(cell.get(), LifecycleState::NotInstalled);
}

#[tokio::test]
async fn test_interrupted_removal_with_surviving_process_stays_remove_failed() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    let cell = LifecycleCell::new(LifecycleState::Removing);
    let mut locator = ImmortalAgent::new(7);

    reconcile(&cell, &layout, &Settings::immediate(), &mut locator).await;

    assert_eq!(cell.get(), LifecycleState::RemoveFailed);
}

#[tokio::test]
async fn test_interrupted_removal_with_surviving_files_stays_remove_failed() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    place_marker(&layout); // install dir still present
    let cell = LifecycleCell::new(LifecycleState::Removing);
    let mut locator = NoAgent;

    reconcile(&cell, &layout, &Settings::immediate(), &mut locator).await;

    assert_eq!(cell.get(), LifecycleState::RemoveFailed);
}

#[tokio::test]
async fn test_non_transitional_states_default_to_not_installed() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    for state in [
        LifecycleState::Installed,
        LifecycleState::NotInstalled,
        LifecycleState::InstallFailed,
        LifecycleState::RemoveFailed,
    ] {
        let cell = LifecycleCell::new(state);
        let mut locator = NoAgent;
        reconcile(&cell, &layout, &Settings::immediate(), &mut locator).await;
        assert_eq!(
            cell.get(),
            LifecycleState::NotInstalled,
            "{state} must reconcile to the conservative default"
        );
    }
}
