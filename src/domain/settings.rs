//! Runtime settings with production defaults.
//!
//! Tests shrink the wait intervals to zero; everything else stays fixed.

use std::time::Duration;

/// Tunables for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Executable name of the supervised agent in the process table.
    pub agent_process_name: String,
    /// Base URL the package archive and checksum sidecar are fetched from.
    pub package_base_url: String,
    /// Host config section extracted into the agent configuration.
    pub host_config_section: String,
    /// Wait after sending a termination signal before re-checking.
    pub grace_period: Duration,
    /// Sleep between supervisor reconciliation passes.
    pub poll_interval: Duration,
    /// Host commands the agent needs at runtime.
    pub required_commands: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            agent_process_name: "miniond".to_string(),
            package_base_url: "https://packages.minionctl.dev/releases".to_string(),
            host_config_section: "minion".to_string(),
            grace_period: Duration::from_secs(5),
            poll_interval: Duration::from_secs(5),
            required_commands: vec!["systemctl".to_string()],
        }
    }
}

impl Settings {
    /// Settings with zero-length waits, for tests.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            grace_period: Duration::ZERO,
            poll_interval: Duration::ZERO,
            ..Self::default()
        }
    }
}
