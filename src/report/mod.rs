//! Baseline vs. optimized comparison.
//!
//! Joins two [`ResultSet`]s by logical name and derives one
//! [`ComparisonRow`] per benchmark present in both runs with a mean.
//! Rendering lives in [`crate::format`].

use crate::config::CompareConfig;
use crate::error::{CompareError, Result};
use crate::model::{ResultSet, StatsBundle};
use crate::stats::{TTest, compute_significance};
use serde::Serialize;
use tracing::debug;

/// Comparison of one benchmark across both runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub time_change_pct: f64,
    pub cpu_change_pct: f64,
    /// Significance of the CPU time change.
    pub cpu_test: TTest,
}

/// All rows of a comparison, in ascending name order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<ComparisonRow>,
    pub min_improvement_pct: f64,
}

impl Report {
    /// Whether `row` is a significant CPU improvement.
    ///
    /// The CPU change must be below `-min_improvement_pct` and the marker
    /// one of `*`, `**`, `***`.
    #[must_use]
    pub fn is_significant_improvement(&self, row: &ComparisonRow) -> bool {
        row.cpu_change_pct < -self.min_improvement_pct && row.cpu_test.significance.is_significant()
    }

    /// Rows that are significant CPU improvements, in table order.
    pub fn significant_improvements(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows
            .iter()
            .filter(|row| self.is_significant_improvement(row))
    }

    /// Mean CPU change over the significant improvements.
    #[must_use]
    pub fn average_improvement_pct(&self) -> Option<f64> {
        let (count, sum) = self
            .significant_improvements()
            .fold((0usize, 0.0), |(count, sum), row| {
                (count + 1, sum + row.cpu_change_pct)
            });
        (count > 0).then(|| sum / count as f64)
    }
}

/// Compare two result sets.
///
/// Benchmarks missing from `optimized`, or lacking a mean in either run, are
/// skipped.
///
/// # Errors
///
/// Returns `ZeroBaseline` if a compared benchmark has a baseline mean time
/// or mean CPU of exactly zero.
pub fn compare(
    baseline: &ResultSet,
    optimized: &ResultSet,
    config: &CompareConfig,
) -> Result<Report> {
    let mut rows = Vec::new();

    for (name, base) in baseline.iter() {
        let Some(opt) = optimized.get(name) else {
            debug!(benchmark = name, "Not in optimized run; skipping");
            continue;
        };
        let (Some(base_mean), Some(opt_mean)) = (base.mean, opt.mean) else {
            debug!(benchmark = name, "No mean statistic; skipping");
            continue;
        };

        let time_change_pct = percent_change(name, "mean_time", base_mean.real, opt_mean.real)?;
        let cpu_change_pct = percent_change(name, "mean_cpu", base_mean.cpu, opt_mean.cpu)?;
        let cpu_test = compute_significance(
            base_mean.cpu,
            stddev_cpu(base),
            opt_mean.cpu,
            stddev_cpu(opt),
            config.sample_size,
        );

        debug!(
            benchmark = name,
            time_change_pct,
            cpu_change_pct,
            t = cpu_test.t,
            marker = cpu_test.marker(),
            "Compared benchmark"
        );

        rows.push(ComparisonRow {
            name: name.to_string(),
            time_change_pct,
            cpu_change_pct,
            cpu_test,
        });
    }

    Ok(Report {
        rows,
        min_improvement_pct: config.min_improvement_pct,
    })
}

fn stddev_cpu(bundle: &StatsBundle) -> f64 {
    bundle.stddev_cpu().unwrap_or(0.0)
}

fn percent_change(benchmark: &str, metric: &'static str, baseline: f64, optimized: f64) -> Result<f64> {
    if baseline == 0.0 {
        return Err(CompareError::ZeroBaseline {
            benchmark: benchmark.to_string(),
            metric,
        });
    }
    Ok((optimized - baseline) / baseline * 100.0)
}
