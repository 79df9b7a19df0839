//! Unit tests for the post-install supervision loop.

use std::time::Duration;

use minionctl::application::services::supervise::supervise;
use minionctl::domain::{LifecycleState, Settings};
use minionctl::state::LifecycleCell;
use tempfile::TempDir;

use crate::mocks::{AgentAliveFor, NoAgent, place_marker, rooted_layout};

#[tokio::test]
async fn test_supervisor_exits_immediately_when_not_installed() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    let cell = LifecycleCell::new(LifecycleState::NotInstalled);
    let mut locator = NoAgent;

    supervise(&cell, &layout, &Settings::immediate(), &mut locator).await;

    assert_eq!(cell.get(), LifecycleState::NotInstalled);
}

#[tokio::test]
async fn test_supervisor_marks_vanished_agent_remove_failed_when_files_remain() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    place_marker(&layout); // install dir survives the crash
    let cell = LifecycleCell::new(LifecycleState::Installed);
    let mut locator = AgentAliveFor { pid: 9, remaining: 3 };

    supervise(&cell, &layout, &Settings::immediate(), &mut locator).await;

    assert_eq!(cell.get(), LifecycleState::RemoveFailed);
}

#[tokio::test]
async fn test_supervisor_downgrades_to_not_installed_when_files_also_gone() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    // No install dir: the agent and its files were removed externally.
    let cell = LifecycleCell::new(LifecycleState::Installed);
    let mut locator = AgentAliveFor { pid: 9, remaining: 1 };

    supervise(&cell, &layout, &Settings::immediate(), &mut locator).await;

    assert_eq!(cell.get(), LifecycleState::NotInstalled);
}

#[tokio::test]
async fn test_supervisor_exits_when_state_changes_externally() {
    let dir = TempDir::new().expect("tempdir");
    let layout = rooted_layout(&dir);
    place_marker(&layout);
    let cell = LifecycleCell::new(LifecycleState::Installed);
    // Agent stays alive; the loop must still terminate once another writer
    // (the interrupt path in production) moves the state off Installed.
    let mut locator = AgentAliveFor {
        pid: 9,
        remaining: u32::MAX,
    };
    let mut settings = Settings::immediate();
    settings.poll_interval = Duration::from_millis(1);

    let flipper = {
        let cell = cell.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            cell.set(LifecycleState::NotInstalled);
        })
    };

    supervise(&cell, &layout, &settings, &mut locator).await;
    flipper.await.expect("flipper task");

    assert_eq!(cell.get(), LifecycleState::NotInstalled);
}
