//! show command - Display an instance's regions, adjacencies and coloring

use super::{load_instance, print_json};
use crate::cli::args::InstanceArgs;
use crate::cli::{Context, Outcome};
use crate::ui::output;
use crate::ui::report::render_instance;
use anyhow::Result;

/// Display an instance without validating it.
pub fn show(ctx: &Context, args: &InstanceArgs) -> Result<Outcome> {
    let instance = load_instance(ctx, args)?;

    if ctx.json {
        print_json(&instance)?;
    } else {
        output::print(render_instance(&instance), ctx.verbosity);
    }

    Ok(Outcome::Success)
}
