//! ui::report
//!
//! Pure functions for rendering validation results as text.
//!
//! # Design
//!
//! This module only formats. It takes a finished
//! [`ValidationReport`](crate::core::validate::ValidationReport) and returns
//! strings; the validator never prints.
//!
//! # Example Output
//!
//! ```text
//! WA(blue): neighbors = NT(green), SA(red) ✓
//! NT(green): neighbors = WA(blue), SA(red), Q(blue) ✓
//! T(red): neighbors = (none) ✓
//!
//! Result: ✅ Valid 3-coloring of Australia
//! Colors used: 3 - [blue, green, red]
//! ```

use super::output::{format_inline, format_list};
use crate::core::coloring::ColorSummary;
use crate::core::instance::Instance;
use crate::core::validate::{NodeCheck, ValidationReport, Violation};

/// Marker for a node consistent with its neighbors.
pub const PASS_MARKER: &str = "✓";

/// Marker for a node with a conflicting neighbor.
pub const FAIL_MARKER: &str = "❌";

/// Render one scanned node.
pub fn render_check(check: &NodeCheck) -> String {
    let neighbors = if check.neighbors.is_empty() {
        "(none)".to_string()
    } else {
        format_inline(
            check
                .neighbors
                .iter()
                .map(|n| format!("{}({})", n.node, n.label)),
        )
    };
    let marker = if check.is_consistent() {
        PASS_MARKER
    } else {
        FAIL_MARKER
    };
    format!(
        "{}({}): neighbors = {} {}",
        check.node, check.label, neighbors, marker
    )
}

/// Render one violation as a sentence.
pub fn render_violation(violation: &Violation) -> String {
    format!(
        "{} and {} both have color {}",
        violation.node, violation.neighbor, violation.shared_label
    )
}

/// Render the verdict line, followed by violations when invalid.
pub fn render_verdict(name: &str, report: &ValidationReport, colors: &ColorSummary) -> String {
    if report.is_valid {
        format!("Result: ✅ Valid {}-coloring of {}", colors.count, name)
    } else {
        let lines: Vec<_> = report.violations.iter().map(render_violation).collect();
        format!(
            "Result: {} Invalid coloring of {}\n{}",
            FAIL_MARKER,
            name,
            format_list(&lines, "  - ")
        )
    }
}

/// Render the colors-used summary.
pub fn render_colors(colors: &ColorSummary) -> String {
    format!(
        "Colors used: {} - [{}]",
        colors.count,
        format_inline(&colors.labels)
    )
}

/// Render the full narration of a check.
pub fn render_report(name: &str, report: &ValidationReport, colors: &ColorSummary) -> String {
    let mut out: Vec<String> = report.checks.iter().map(render_check).collect();
    out.push(String::new());
    out.push(render_verdict(name, report, colors));
    out.push(render_colors(colors));
    out.join("\n")
}

/// Render the regions, adjacencies and coloring of an instance.
pub fn render_instance(instance: &Instance) -> String {
    let graph = &instance.adjacency;
    let mut out = vec![format!(
        "{}: {} regions, {} borders",
        instance.display_name(),
        graph.node_count(),
        graph.edge_count()
    )];

    out.push(String::new());
    out.push("Adjacencies:".to_string());
    let width = graph
        .nodes()
        .map(|n| n.as_str().chars().count())
        .max()
        .unwrap_or(0);
    for (node, neighbors) in graph.iter() {
        let listed = if neighbors.is_empty() {
            "(no adjacencies)".to_string()
        } else {
            format_inline(neighbors)
        };
        out.push(format!(
            "  {:<width$} {}",
            format!("{}:", node),
            listed,
            width = width + 1
        ));
    }

    if !instance.coloring.is_empty() {
        out.push(String::new());
        out.push("Coloring:".to_string());
        for (node, label) in instance.coloring.iter() {
            out.push(format!("  {} = {}", node, label));
        }
    }

    out.join("\n")
}
