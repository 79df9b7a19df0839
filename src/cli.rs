//! CLI argument parsing with clap derive, plus command dispatch.
//!
//! The surface is flag-based: exactly one of the four action flags selects
//! the handler. The interrupt handler and the end-of-dispatch reconciliation
//! are both registered here so every exit path runs the cleanup safety net.

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};

use crate::application::services::{cleanup, supervise};
use crate::commands;
use crate::domain::{Layout, Settings};
use crate::infra::{SysinfoLocator, logging};
use crate::output::OutputContext;
use crate::state::LifecycleCell;

/// Install, supervise, and remove the miniond host agent
#[derive(Parser)]
#[command(name = "minionctl", version, about)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["status", "depends", "install", "remove"])
))]
pub struct Cli {
    /// Report the agent lifecycle state; the exit code is the state ordinal
    #[arg(short = 'c', long)]
    pub status: bool,

    /// Check host dependencies
    #[arg(short = 'e', long)]
    pub depends: bool,

    /// Install the agent, then supervise it until interrupted
    #[arg(short = 'i', long)]
    pub install: bool,

    /// Stop the agent and remove its files
    #[arg(short = 'r', long)]
    pub remove: bool,

    /// Debug-level logging
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Echo log lines to the console in addition to the log file
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Prefix every filesystem path (sandboxed runs and tests)
    #[arg(long, env = "MINIONCTL_ROOT", hide = true)]
    pub root: Option<PathBuf>,
}

impl Cli {
    /// Execute the selected action and return the process exit code.
    pub async fn run(self) -> i32 {
        let layout = Layout::new(self.root.clone());
        let log_path = logging::init(&layout, self.debug, self.verbose);
        let settings = Settings::default();
        let cell = LifecycleCell::from_marker(&layout);
        let ctx = OutputContext::new(self.no_color, self.quiet);

        spawn_interrupt_handler(cell.clone(), layout.clone(), settings.clone());

        let exit_code = if self.status {
            commands::status::run(&ctx, &cell, &layout, self.json).ordinal()
        } else if self.depends {
            match commands::depends::run(&ctx, &layout, &settings) {
                Ok(()) => 0,
                Err(_) => 1,
            }
        } else if self.install {
            match commands::install::run(&ctx, &cell, &layout, &settings) {
                Ok(()) => {
                    let mut locator = SysinfoLocator::new(&settings.agent_process_name);
                    supervise::supervise(&cell, &layout, &settings, &mut locator).await;
                    // The loop only exits when the agent stopped matching
                    // reality; surface that state as the exit code.
                    cell.get().ordinal()
                }
                Err(e) => {
                    report_failure(&ctx, &e.to_string(), log_path.as_deref());
                    1
                }
            }
        } else {
            let mut locator = SysinfoLocator::new(&settings.agent_process_name);
            match commands::remove::run(&ctx, &cell, &layout, &settings, &mut locator).await {
                Ok(()) => 0,
                Err(e) => {
                    report_failure(&ctx, &e.to_string(), log_path.as_deref());
                    1
                }
            }
        };

        // Terminal safety net on the normal exit path; the code was computed
        // before reconciliation on purpose.
        let mut locator = SysinfoLocator::new(&settings.agent_process_name);
        cleanup::reconcile(&cell, &layout, &settings, &mut locator).await;
        exit_code
    }
}

/// Register the interrupt hook. It reconciles the shared state from
/// whatever point execution was interrupted at, then exits with the
/// reconciled state's ordinal.
fn spawn_interrupt_handler(cell: LifecycleCell, layout: Layout, settings: Settings) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let mut locator = SysinfoLocator::new(&settings.agent_process_name);
            cleanup::reconcile(&cell, &layout, &settings, &mut locator).await;
            tracing::info!(state = %cell.get(), "interrupted");
            std::process::exit(cell.get().ordinal());
        }
    });
}

fn report_failure(ctx: &OutputContext, message: &str, log_path: Option<&Path>) {
    ctx.error(message);
    if let Some(path) = log_path {
        ctx.info(&format!("details in {}", path.display()));
    }
}
