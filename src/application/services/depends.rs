//! Application service — host dependency check.
//!
//! Verifies the host prerequisites the agent needs before an install is
//! attempted: required commands resolvable on `PATH`, and the host tooling
//! config's parent directory writable (the translator bootstraps the config
//! file there, so an install on a read-only root would fail late otherwise).

use tracing::debug;

use crate::domain::{DependsError, Layout};

/// Check the host prerequisites.
///
/// # Errors
///
/// Returns [`DependsError::Missing`] naming the first command that does not
/// resolve on `PATH`, or [`DependsError::ConfigDirUnwritable`] when the host
/// config's parent directory cannot be created or written to.
pub fn check(layout: &Layout, required: &[String]) -> Result<(), DependsError> {
    for command in required {
        match which::which(command) {
            Ok(path) => debug!(command, path = %path.display(), "dependency present"),
            Err(_) => return Err(DependsError::Missing(command.clone())),
        }
    }
    config_dir_writable(layout)
}

/// Create the host config's parent directory if needed, then confirm it is
/// writable by creating and deleting a scratch file. A permissions check on
/// the directory metadata alone would miss read-only mounts.
fn config_dir_writable(layout: &Layout) -> Result<(), DependsError> {
    let host_config = layout.host_config();
    let Some(dir) = host_config.parent() else {
        return Err(DependsError::ConfigDirUnwritable(host_config));
    };
    let unwritable = || DependsError::ConfigDirUnwritable(dir.to_path_buf());

    std::fs::create_dir_all(dir).map_err(|_| unwritable())?;
    let scratch = dir.join(".minionctl-write-test");
    std::fs::write(&scratch, b"").map_err(|_| unwritable())?;
    let _ = std::fs::remove_file(&scratch);
    debug!(dir = %dir.display(), "host config directory writable");
    Ok(())
}
