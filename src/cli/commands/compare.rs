//! Compare command implementation.

use crate::aggregate::aggregate;
use crate::config::CompareConfig;
use crate::error::Result;
use crate::format::render_report;
use crate::loader::load_benchmark_file;
use crate::report::{Report, compare};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Load both runs and build the comparison.
///
/// Files are read one after the other; nothing is printed.
///
/// # Errors
///
/// Returns an error if either file cannot be loaded or a baseline mean is zero.
pub fn build_report(baseline: &Path, optimized: &Path, config: &CompareConfig) -> Result<Report> {
    let baseline_results = aggregate(&load_benchmark_file(baseline)?);
    let optimized_results = aggregate(&load_benchmark_file(optimized)?);
    let report = compare(&baseline_results, &optimized_results, config)?;
    info!(
        compared = report.rows.len(),
        improvements = report.significant_improvements().count(),
        "Comparison complete"
    );
    Ok(report)
}

/// Execute the compare command, printing the report to stdout.
///
/// # Errors
///
/// Returns an error if loading or comparison fails, or stdout cannot be
/// written.
pub fn execute(baseline: &Path, optimized: &Path, config: &CompareConfig) -> Result<()> {
    let report = build_report(baseline, optimized, config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_report(&report, &mut out)?;
    out.flush()?;
    Ok(())
}
