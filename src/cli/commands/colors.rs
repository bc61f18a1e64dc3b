//! colors command - Show the distinct colors a coloring uses

use super::{load_instance, print_json};
use crate::cli::args::InstanceArgs;
use crate::cli::{Context, Outcome};
use crate::ui::output;
use crate::ui::report::render_colors;
use anyhow::Result;

/// Show the colors-used summary of an instance's coloring.
pub fn colors(ctx: &Context, args: &InstanceArgs) -> Result<Outcome> {
    let instance = load_instance(ctx, args)?;
    let summary = instance.coloring.colors_used();

    if ctx.json {
        print_json(&summary)?;
    } else {
        output::print(render_colors(&summary), ctx.verbosity);
    }

    Ok(Outcome::Success)
}
