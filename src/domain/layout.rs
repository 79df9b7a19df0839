//! Filesystem layout consumed and produced by the installer lifecycle.
//!
//! Every path the tool touches is derived here, rooted under an optional
//! prefix (`--root` / `MINIONCTL_ROOT`) so tests and non-root dry runs never
//! leave a sandbox directory. The agent binary path doubles as the
//! installed-state marker: its presence on disk is the ground truth for
//! installed vs not-installed whenever no sticky state is active.

use std::path::PathBuf;

/// A directory scanned for agent service units on removal, together with the
/// filename prefix and suffix a unit must carry to be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitGlob {
    /// Directory to scan, relative to the layout root.
    pub dir: &'static str,
    /// Required filename prefix.
    pub prefix: &'static str,
    /// Required filename suffix (empty matches anything).
    pub suffix: &'static str,
}

/// Target filesystem layout for one agent installation.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    const INSTALL_DIR: &'static str = "opt/miniond";
    const AGENT_BINARY: &'static str = "opt/miniond/miniond";
    const SYSTEM_BINARY: &'static str = "usr/bin/miniond";
    const CONFIG_DIR: &'static str = "etc/miniond";
    const MINION_CONFIG: &'static str = "etc/miniond/minion.conf";
    const HOST_CONFIG: &'static str = "etc/hostctl.conf";
    const RUN_DIR: &'static str = "var/run/miniond";
    const CACHE_DIR: &'static str = "var/cache/miniond";
    const LOG_DIR: &'static str = "var/log/miniond";
    const LOG_FILE: &'static str = "var/log/miniond/minionctl.log";

    /// Service-unit locations cleaned up on removal.
    pub const UNIT_GLOBS: [UnitGlob; 2] = [
        UnitGlob {
            dir: "etc/systemd/system",
            prefix: "miniond",
            suffix: ".service",
        },
        UnitGlob {
            dir: "etc/init.d",
            prefix: "miniond",
            suffix: "",
        },
    ];

    /// Create a layout rooted at `/`, or under `root` when given.
    #[must_use]
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            root: root.unwrap_or_else(|| PathBuf::from("/")),
        }
    }

    fn rooted(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Directory the agent package is unpacked into.
    #[must_use]
    pub fn install_dir(&self) -> PathBuf {
        self.rooted(Self::INSTALL_DIR)
    }

    /// The agent executable — the installed-state marker.
    #[must_use]
    pub fn agent_binary(&self) -> PathBuf {
        self.rooted(Self::AGENT_BINARY)
    }

    /// Whether the installed-state marker is present on disk.
    #[must_use]
    pub fn marker_exists(&self) -> bool {
        self.agent_binary().exists()
    }

    /// Path a pre-existing standard (package-manager) install would occupy.
    /// Its presence makes `--install` fail fast: the two installations are
    /// mutually exclusive.
    #[must_use]
    pub fn system_binary(&self) -> PathBuf {
        self.rooted(Self::SYSTEM_BINARY)
    }

    /// Agent configuration directory.
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.rooted(Self::CONFIG_DIR)
    }

    /// Agent configuration file written by the config translator.
    #[must_use]
    pub fn minion_config(&self) -> PathBuf {
        self.rooted(Self::MINION_CONFIG)
    }

    /// Host tooling configuration file (INI-style) the `[minion]` section is
    /// extracted from.
    #[must_use]
    pub fn host_config(&self) -> PathBuf {
        self.rooted(Self::HOST_CONFIG)
    }

    /// Agent runtime (pidfile) directory.
    #[must_use]
    pub fn run_dir(&self) -> PathBuf {
        self.rooted(Self::RUN_DIR)
    }

    /// Agent cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.rooted(Self::CACHE_DIR)
    }

    /// Log directory shared by the agent and this tool.
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.rooted(Self::LOG_DIR)
    }

    /// Log file this tool writes to.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.rooted(Self::LOG_FILE)
    }

    /// The fixed list of directories deleted on removal.
    ///
    /// Service units are handled separately via [`Self::UNIT_GLOBS`] because
    /// they live in shared directories that must not be deleted wholesale.
    #[must_use]
    pub fn removal_targets(&self) -> Vec<PathBuf> {
        vec![
            self.install_dir(),
            self.config_dir(),
            self.run_dir(),
            self.cache_dir(),
            self.log_dir(),
        ]
    }

    /// Resolve a unit glob's directory against the layout root.
    #[must_use]
    pub fn unit_dir(&self, glob: &UnitGlob) -> PathBuf {
        self.rooted(glob.dir)
    }
}

/// Whether a filename matches a unit glob.
#[must_use]
pub fn unit_matches(glob: &UnitGlob, file_name: &str) -> bool {
    file_name.starts_with(glob.prefix) && file_name.ends_with(glob.suffix)
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(None)
    }
}
