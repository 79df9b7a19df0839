//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`, or
//! `crate::application`. All error types implement `thiserror::Error` and
//! convert to `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Install errors ────────────────────────────────────────────────────────────

/// Errors raised while installing the agent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstallError {
    #[error("a standard miniond installation already exists; remove it before using minionctl")]
    ConflictingInstall,

    #[error("package fetch did not produce the agent executable")]
    FetchFailed,

    #[error("writing the agent configuration failed")]
    ConfigTranslationFailed,
}

// ── Remove errors ─────────────────────────────────────────────────────────────

/// Errors raised while removing the agent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemoveError {
    #[error("nothing to remove: the agent is not installed")]
    NotInstalled,

    #[error("agent process {pid} survived the termination grace period")]
    ProcessStillRunning { pid: u32 },
}

// ── Dependency errors ─────────────────────────────────────────────────────────

/// Errors raised by the host dependency check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DependsError {
    #[error("required host command not found: {0}")]
    Missing(String),

    #[error("host config directory not writable: {0}")]
    ConfigDirUnwritable(std::path::PathBuf),
}

// ── Status errors ─────────────────────────────────────────────────────────────

/// Errors raised when translating status ordinals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    #[error("status ordinal {0} is outside the known enumeration")]
    Unknown(i32),
}
