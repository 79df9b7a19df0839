//! Tracing initialization: file log plus optional console echo.
//!
//! Every invocation logs to `<log_dir>/minionctl.log`; `--verbose` echoes
//! the same lines to stderr and `--debug` raises the filter level. When the
//! log directory cannot be created (for example running unprivileged without
//! `--root`), logging falls back to stderr only rather than failing the
//! invocation.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, fmt};

use crate::domain::Layout;

/// Initialize tracing. Returns the log file path when file logging is
/// active, for the "see the log" pointer in error output.
pub fn init(layout: &Layout, debug: bool, verbose: bool) -> Option<PathBuf> {
    let default_level = if debug { "minionctl=debug" } else { "minionctl=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_file = open_log_file(layout);
    let file_layer = log_file.as_ref().map(|(_, file)| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Arc::clone(file))
    });
    // Echo to stderr when asked for, or when the file sink is unavailable.
    let stderr_layer = (verbose || log_file.is_none()).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    // try_init: a second call (only possible from tests) keeps the first
    // subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    log_file.map(|(path, _)| path)
}

fn open_log_file(layout: &Layout) -> Option<(PathBuf, Arc<std::fs::File>)> {
    let path = layout.log_file();
    std::fs::create_dir_all(layout.log_dir()).ok()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((path, Arc::new(file)))
}
