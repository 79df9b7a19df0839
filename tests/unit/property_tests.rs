//! Property-based tests for the lifecycle state machine.

use minionctl::application::services::status::resolve;
use minionctl::domain::{Layout, LifecycleState};
use minionctl::state::LifecycleCell;
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_state() -> impl Strategy<Value = LifecycleState> {
    prop_oneof![
        Just(LifecycleState::Installed),
        Just(LifecycleState::Installing),
        Just(LifecycleState::NotInstalled),
        Just(LifecycleState::InstallFailed),
        Just(LifecycleState::Removing),
        Just(LifecycleState::RemoveFailed),
    ]
}

fn arb_sticky() -> impl Strategy<Value = LifecycleState> {
    prop_oneof![
        Just(LifecycleState::Installing),
        Just(LifecycleState::InstallFailed),
        Just(LifecycleState::Removing),
        Just(LifecycleState::RemoveFailed),
    ]
}

fn layout_with_marker(dir: &TempDir, marker: bool) -> Layout {
    let layout = Layout::new(Some(dir.path().to_path_buf()));
    if marker {
        std::fs::create_dir_all(layout.install_dir()).expect("create install dir");
        std::fs::write(layout.agent_binary(), b"stub").expect("write marker");
    }
    layout
}

proptest! {
    /// Sticky states pass through resolve() regardless of filesystem contents.
    #[test]
    fn prop_sticky_states_pass_through(state in arb_sticky(), marker in any::<bool>()) {
        let dir = TempDir::new().expect("tempdir");
        let layout = layout_with_marker(&dir, marker);
        let cell = LifecycleCell::new(state);
        prop_assert_eq!(resolve(&cell, &layout), state);
        prop_assert_eq!(cell.get(), state);
    }

    /// Non-sticky starting states always resolve from the marker.
    #[test]
    fn prop_non_sticky_states_resolve_from_marker(marker in any::<bool>()) {
        let dir = TempDir::new().expect("tempdir");
        let layout = layout_with_marker(&dir, marker);
        for initial in [LifecycleState::Installed, LifecycleState::NotInstalled] {
            let cell = LifecycleCell::new(initial);
            let expected = if marker {
                LifecycleState::Installed
            } else {
                LifecycleState::NotInstalled
            };
            prop_assert_eq!(resolve(&cell, &layout), expected);
        }
    }

    /// resolve() is idempotent: repeated calls without intervening mutation
    /// return the same value.
    #[test]
    fn prop_resolve_is_idempotent(state in arb_state(), marker in any::<bool>()) {
        let dir = TempDir::new().expect("tempdir");
        let layout = layout_with_marker(&dir, marker);
        let cell = LifecycleCell::new(state);
        let first = resolve(&cell, &layout);
        let second = resolve(&cell, &layout);
        prop_assert_eq!(first, second);
    }

    /// Ordinals roundtrip for every state.
    #[test]
    fn prop_ordinal_roundtrip(state in arb_state()) {
        let back = LifecycleState::from_ordinal(state.ordinal());
        prop_assert_eq!(back, Ok(state));
    }
}
