//! check command - Validate a coloring against its adjacency graph

use serde::Serialize;

use super::{load_instance, print_json};
use crate::cli::args::InstanceArgs;
use crate::cli::{Context, Outcome};
use crate::core::coloring::ColorSummary;
use crate::core::types::NodeName;
use crate::core::validate::{validate_with, ScanMode, ValidationReport};
use crate::ui::output;
use crate::ui::report::render_report;
use anyhow::{Context as _, Result};

/// JSON shape of `check --json`.
#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    name: &'a str,
    scan: ScanMode,
    #[serde(flatten)]
    report: &'a ValidationReport,
    colors_used: &'a ColorSummary,
    asymmetric_arcs: Vec<[&'a NodeName; 2]>,
}

/// Validate a coloring and report the verdict.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `args` - Instance to check
/// * `all_conflicts` - Report every conflicting neighbor, overriding config
/// * `no_symmetry_warnings` - Suppress asymmetric-arc warnings
///
/// Returns `Outcome::Invalid` when the coloring has violations. A missing
/// label is an error, not an invalid coloring.
pub fn check(
    ctx: &Context,
    args: &InstanceArgs,
    all_conflicts: bool,
    no_symmetry_warnings: bool,
) -> Result<Outcome> {
    let instance = load_instance(ctx, args)?;
    let name = instance.display_name();

    let mode = if all_conflicts {
        ScanMode::AllConflicts
    } else {
        ctx.config.scan_mode()
    };
    output::debug(
        format!(
            "checking {} ({} nodes, {} edges, scan mode {:?})",
            name,
            instance.adjacency.node_count(),
            instance.adjacency.edge_count(),
            mode
        ),
        ctx.verbosity,
    );

    let asymmetric = instance.adjacency.asymmetric_arcs();
    if !no_symmetry_warnings && ctx.config.warn_asymmetric() {
        for (from, to) in &asymmetric {
            output::warn(
                format!(
                    "{} lists {} as a neighbor, but {} does not list {}",
                    from, to, to, from
                ),
                ctx.verbosity,
            );
        }
    }

    let report = validate_with(&instance.coloring, &instance.adjacency, mode)
        .with_context(|| format!("Cannot check {}", name))?;
    let colors = instance.coloring.colors_used();

    if ctx.json {
        print_json(&CheckOutput {
            name,
            scan: mode,
            report: &report,
            colors_used: &colors,
            asymmetric_arcs: asymmetric.iter().map(|(a, b)| [*a, *b]).collect(),
        })?;
    } else {
        output::print(render_report(name, &report, &colors), ctx.verbosity);
    }

    if report.is_valid {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::PresetArg;
    use crate::ui::output::Verbosity;
    use std::fs;
    use std::path::Path;

    fn ctx() -> Context {
        Context::new(Verbosity::Quiet, false)
    }

    fn file_args(path: &Path) -> InstanceArgs {
        InstanceArgs {
            file: Some(path.to_path_buf()),
            preset: None,
        }
    }

    #[test]
    fn australia_preset_is_valid() {
        let args = InstanceArgs {
            file: None,
            preset: Some(PresetArg::Australia),
        };
        assert_eq!(check(&ctx(), &args, false, false).unwrap(), Outcome::Success);
    }

    #[test]
    fn conflicting_file_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conflict.toml");
        fs::write(
            &path,
            "[coloring]\nA = \"red\"\nB = \"red\"\n\n[adjacency]\nA = [\"B\"]\nB = [\"A\"]\n",
        )
        .unwrap();

        let outcome = check(&ctx(), &file_args(&path), false, false).unwrap();
        assert_eq!(outcome, Outcome::Invalid);
    }

    #[test]
    fn missing_label_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        fs::write(&path, "[coloring]\nA = \"red\"\n\n[adjacency]\nA = [\"B\"]\n").unwrap();

        let err = check(&ctx(), &file_args(&path), false, true).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Cannot check coloring"));
        assert!(message.contains("node 'B' has no label"));
    }
}
