//! Fixed-width console rendering.
//!
//! Table rows are always plain text so that columns line up exactly;
//! styling is limited to the defects section and the not-found message.

use crate::report::{CountReport, ValidationReport};
use colored::Colorize;
use std::path::Path;

const COUNT_RULE_WIDTH: usize = 28;
const VALIDATE_RULE_WIDTH: usize = 48;

pub fn not_found(skills_dir: &Path) -> String {
    format!(
        "{}\n",
        format!("Skills directory not found: {}", skills_dir.display()).red()
    )
}

/// Renders the two-column `Category | Count` table with a Total row.
///
/// ```text
/// Category              Count
/// ----------------------------
/// documents                 3
/// ----------------------------
/// Total                     3
/// ```
pub fn render_count(report: &CountReport) -> String {
    let mut out = String::new();
    let rule = "-".repeat(COUNT_RULE_WIDTH);

    out.push_str(&format!("{:<20} {:>6}\n", "Category", "Count"));
    out.push_str(&format!("{rule}\n"));
    for (category, count) in &report.categories {
        out.push_str(&format!("{category:<20} {count:>6}\n"));
    }
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("{:<20} {:>6}\n", "Total", report.total()));

    out
}

/// Renders the optional defects section followed by the
/// `Category | Valid | Invalid | Total` summary table.
pub fn render_validation(report: &ValidationReport) -> String {
    let mut out = String::new();

    if !report.failures.is_empty() {
        out.push_str(&format!("{}\n\n", "Validation errors:".bold()));
        for failure in &report.failures {
            out.push_str(&format!("  {}:\n", failure.path().bold()));
            for defect in &failure.defects {
                out.push_str(&format!("    - {}\n", defect.to_string().red()));
            }
        }
        out.push('\n');
    }

    let rule = "-".repeat(VALIDATE_RULE_WIDTH);
    out.push_str(&format!(
        "{:<20} {:>8} {:>8} {:>8}\n",
        "Category", "Valid", "Invalid", "Total"
    ));
    out.push_str(&format!("{rule}\n"));
    for stats in &report.categories {
        out.push_str(&format!(
            "{:<20} {:>8} {:>8} {:>8}\n",
            stats.name,
            stats.valid,
            stats.invalid,
            stats.total()
        ));
    }
    out.push_str(&format!("{rule}\n"));

    let (valid, invalid) = (report.total_valid(), report.total_invalid());
    out.push_str(&format!(
        "{:<20} {:>8} {:>8} {:>8}\n",
        "Total",
        valid,
        invalid,
        valid + invalid
    ));

    out
}
