//! Plain text rendering of a comparison [`Report`].
//!
//! Layout:
//! - header and one fixed-width row per benchmark
//! - legend of significance markers
//! - summary of significant CPU improvements, or a notice when there are none

use crate::report::{ComparisonRow, Report};
use std::io::{self, Write};

/// Width of the horizontal rules.
pub const RULE_WIDTH: usize = 100;
/// Width of the benchmark name column.
pub const NAME_WIDTH: usize = 50;
/// Width of the time, CPU and significance columns.
pub const COLUMN_WIDTH: usize = 12;

/// Marker legend, one line per tier.
pub const LEGEND: [&str; 4] = [
    "  *** = p < 0.001 (Very significant)",
    "  **  = p < 0.01  (Significant)",
    "  *   = p < 0.05  (Marginally significant)",
    "  .   = p < 0.10  (Not significant)",
];

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Signed percentage with two decimals, e.g. `-25.00%` or ` +0.00%`.
#[must_use]
pub fn format_percent(pct: f64) -> String {
    format!("{pct:+6.2}%")
}

/// Significance cell: right-aligned marker then the t value.
#[must_use]
pub fn format_significance(row: &ComparisonRow) -> String {
    let marker = row.cpu_test.marker();
    let t = row.cpu_test.t;
    if marker.is_empty() {
        format!("    (t={t:.2})")
    } else {
        format!("{marker:>3} (t={t:.2})")
    }
}

/// One table line for `row`.
#[must_use]
pub fn format_row(row: &ComparisonRow) -> String {
    format!(
        "{:<name$} {:<col$} {:<col$} {:<col$}",
        row.name,
        format_percent(row.time_change_pct),
        format_percent(row.cpu_change_pct),
        format_significance(row),
        name = NAME_WIDTH,
        col = COLUMN_WIDTH,
    )
}

/// Write the full report.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    render_table(report, out)?;
    render_legend(out)?;
    render_summary(report, out)
}

fn render_table<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(
        out,
        "{:<name$} {:<col$} {:<col$} {:<col$}",
        "Benchmark",
        "Time",
        "CPU",
        "Significance",
        name = NAME_WIDTH,
        col = COLUMN_WIDTH,
    )?;
    writeln!(out, "{}", rule())?;
    for row in &report.rows {
        writeln!(out, "{}", format_row(row))?;
    }
    writeln!(out, "{}", rule())?;
    writeln!(out)
}

fn render_legend<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Significance markers:")?;
    for line in LEGEND {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

fn render_summary<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    match report.average_improvement_pct() {
        Some(average) => {
            writeln!(out, "SIGNIFICANT IMPROVEMENTS (CPU time):")?;
            writeln!(out, "{}", rule())?;
            for row in report.significant_improvements() {
                writeln!(
                    out,
                    "  {}: {:+.2}% {}",
                    row.name,
                    row.cpu_change_pct,
                    row.cpu_test.marker()
                )?;
            }
            writeln!(out)?;
            writeln!(out, "Average significant improvement: {average:+.2}%")
        }
        None => {
            writeln!(out, "NO STATISTICALLY SIGNIFICANT IMPROVEMENTS DETECTED")?;
            writeln!(out, "{}", rule())?;
            writeln!(out)?;
            writeln!(
                out,
                "Note: For gains < 3%, statistical significance (p < 0.05) is required."
            )?;
            writeln!(
                out,
                "      Without significance markers (* ** ***), gains may be noise."
            )
        }
    }
}
