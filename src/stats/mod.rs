//! Significance estimate for a change in mean.
//!
//! A Welch-style t statistic is computed from two (mean, standard deviation)
//! pairs and an assumed per-group sample size. The input format carries no
//! repetition count, so the sample size is a fixed assumption
//! ([`DEFAULT_SAMPLE_SIZE`]) rather than derived from data.
//!
//! The t value is mapped to a marker with fixed cut-offs approximating
//! two-tailed p-values of 0.001, 0.01, 0.05 and 0.10 for 20 to 40 degrees
//! of freedom. This is a rough screen, not a rigorous test.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assumed number of repetitions behind each mean.
pub const DEFAULT_SAMPLE_SIZE: u32 = 20;

/// Significance tiers, strongest first. A tier applies when `t` is strictly
/// greater than its threshold.
pub const THRESHOLDS: [(f64, Significance); 4] = [
    (3.85, Significance::VeryHigh),
    (2.85, Significance::High),
    (2.09, Significance::Moderate),
    (1.68, Significance::Weak),
];

/// Qualitative confidence tier of an observed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    /// t <= 1.68
    NotSignificant,
    /// p < 0.10
    Weak,
    /// p < 0.05
    Moderate,
    /// p < 0.01
    High,
    /// p < 0.001
    VeryHigh,
}

impl Significance {
    /// Tier for a t statistic.
    #[must_use]
    pub fn from_t(t: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(threshold, _)| t > *threshold)
            .map_or(Self::NotSignificant, |&(_, tier)| tier)
    }

    /// Marker shown in the report.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::NotSignificant => "",
            Self::Weak => ".",
            Self::Moderate => "*",
            Self::High => "**",
            Self::VeryHigh => "***",
        }
    }

    /// Whether a change at this tier may be reported as an improvement.
    ///
    /// `.` (p < 0.10) does not qualify.
    #[must_use]
    pub const fn is_significant(&self) -> bool {
        matches!(self, Self::Moderate | Self::High | Self::VeryHigh)
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Outcome of [`compute_significance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTest {
    pub t: f64,
    pub significance: Significance,
}

impl TTest {
    /// No variability data; treated as not significant.
    #[must_use]
    pub const fn degenerate() -> Self {
        Self {
            t: 0.0,
            significance: Significance::NotSignificant,
        }
    }

    #[must_use]
    pub fn marker(&self) -> &'static str {
        self.significance.marker()
    }
}

/// Estimate the significance of the difference between two means.
///
/// Both groups are assumed to have `n` samples. When both standard deviations
/// are exactly zero, or the standard error comes out as zero, the result is
/// `t = 0` with no marker.
#[must_use]
pub fn compute_significance(
    baseline_mean: f64,
    baseline_stddev: f64,
    optimized_mean: f64,
    optimized_stddev: f64,
    n: u32,
) -> TTest {
    if baseline_stddev == 0.0 && optimized_stddev == 0.0 {
        return TTest::degenerate();
    }

    let n = f64::from(n);
    let standard_error =
        (baseline_stddev.powi(2) / n + optimized_stddev.powi(2) / n).sqrt();
    if standard_error == 0.0 {
        return TTest::degenerate();
    }

    let t = (baseline_mean - optimized_mean).abs() / standard_error;
    TTest {
        t,
        significance: Significance::from_t(t),
    }
}
