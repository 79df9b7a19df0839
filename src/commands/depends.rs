//! `minionctl --depends` — host dependency check.

use crate::application::services::depends;
use crate::domain::{DependsError, Layout, Settings};
use crate::output::OutputContext;

/// Run the dependency check, printing one line per requirement.
///
/// # Errors
///
/// Returns the [`DependsError`] for the first unmet requirement.
pub fn run(ctx: &OutputContext, layout: &Layout, settings: &Settings) -> Result<(), DependsError> {
    match depends::check(layout, &settings.required_commands) {
        Ok(()) => {
            for command in &settings.required_commands {
                ctx.success(&format!("{command} found"));
            }
            ctx.success("config directory writable");
            Ok(())
        }
        Err(e) => {
            ctx.error(&e.to_string());
            Err(e)
        }
    }
}
