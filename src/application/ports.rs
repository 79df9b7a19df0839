//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;

use anyhow::Result;

use crate::domain::Layout;

// ── Process Table Port ────────────────────────────────────────────────────────

/// Locates and signals the supervised agent process.
///
/// A located pid is ephemeral: re-derived on every call, never cached beyond
/// a single check. Scan errors are treated as "not found" — the locator is
/// infallible by contract.
pub trait ProcessLocator {
    /// Find the agent process, excluding the calling process itself.
    ///
    /// When several instances match, the lowest pid is returned; behavior
    /// under multiple concurrent agents is otherwise undefined.
    fn find_agent(&mut self) -> Option<u32>;

    /// Send a termination signal to `pid`. A pid that has already exited is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the signal cannot be delivered.
    fn terminate(&mut self, pid: u32) -> Result<()>;
}

// ── Package Fetch Port ────────────────────────────────────────────────────────

/// Downloads, verifies, and unpacks the agent package.
pub trait PackageFetcher {
    /// Fetch the package into `dest`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the download, checksum verification, or unpack
    /// fails. The installer treats any error here as a fetch failure.
    fn fetch(&self, dest: &Path) -> Result<()>;
}

// ── Config Translation Port ───────────────────────────────────────────────────

/// Produces the agent configuration file from host tooling configuration.
pub trait ConfigTranslator {
    /// Write the agent config derived from the host config named in `layout`.
    ///
    /// A missing host config file or section is not an error: the translator
    /// bootstraps an empty section and writes a config containing only the
    /// injected settings.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading or writing the files fails.
    fn translate(&self, layout: &Layout) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

/// Reporter that swallows everything, for callers with no console.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}
