//! Lifecycle state machine for the miniond agent.
//!
//! The ordinal values are part of the CLI contract: `minionctl --status`
//! exits with the ordinal of the resolved state, so the discriminants here
//! must never be reordered.

use serde::Serialize;

use crate::domain::error::StatusError;

/// Current lifecycle state of the agent installation.
///
/// Exactly one value is current at any instant; held in a process-wide
/// [`crate::state::LifecycleCell`] for the duration of one invocation and
/// never persisted across invocations (the disk marker carries installed /
/// not-installed across runs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// The agent binary is present on disk.
    Installed = 0,
    /// An install is in flight.
    Installing = 1,
    /// The agent binary is absent.
    NotInstalled = 2,
    /// An install ran and did not reach a clean end state.
    InstallFailed = 3,
    /// A removal is in flight.
    Removing = 4,
    /// A removal ran and did not reach a clean end state.
    RemoveFailed = 5,
}

impl LifecycleState {
    /// Exit-code ordinal for this state.
    #[must_use]
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// Whether this state is reported verbatim by the status resolver
    /// instead of being re-derived from the disk marker.
    ///
    /// The four transitional/failure states represent work that did not
    /// reach a clean terminal state, so filesystem evidence must not
    /// override them.
    #[must_use]
    pub fn is_sticky(self) -> bool {
        matches!(
            self,
            Self::Installing | Self::InstallFailed | Self::Removing | Self::RemoveFailed
        )
    }

    /// Map an ordinal back to a state.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Unknown`] for ordinals outside the known
    /// enumeration, so callers translating foreign exit codes never panic.
    pub fn from_ordinal(ordinal: i32) -> Result<Self, StatusError> {
        match ordinal {
            0 => Ok(Self::Installed),
            1 => Ok(Self::Installing),
            2 => Ok(Self::NotInstalled),
            3 => Ok(Self::InstallFailed),
            4 => Ok(Self::Removing),
            5 => Ok(Self::RemoveFailed),
            other => Err(StatusError::Unknown(other)),
        }
    }

    /// All states, in ordinal order.
    #[must_use]
    pub fn all() -> [Self; 6] {
        [
            Self::Installed,
            Self::Installing,
            Self::NotInstalled,
            Self::InstallFailed,
            Self::Removing,
            Self::RemoveFailed,
        ]
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Installed => "installed",
            Self::Installing => "installing",
            Self::NotInstalled => "not installed",
            Self::InstallFailed => "install failed",
            Self::Removing => "removing",
            Self::RemoveFailed => "remove failed",
        };
        write!(f, "{label}")
    }
}

/// Exit code for status values outside the known enumeration.
///
/// Deliberately distinct from every state ordinal (0–5).
pub const EXIT_UNKNOWN_STATUS: i32 = 6;
