//! `minionctl --status` — report the agent lifecycle state.

use crate::application::services::status;
use crate::domain::{Layout, LifecycleState};
use crate::output::OutputContext;
use crate::state::LifecycleCell;

/// Run the status action. The returned state's ordinal becomes the process
/// exit code.
pub fn run(ctx: &OutputContext, cell: &LifecycleCell, layout: &Layout, json: bool) -> LifecycleState {
    let state = status::resolve(cell, layout);
    if json {
        println!(
            "{}",
            serde_json::json!({
                "status": state,
                "ordinal": state.ordinal(),
            })
        );
    } else {
        ctx.kv("agent", &state.to_string());
    }
    state
}
