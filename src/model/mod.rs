//! Core data types for `bench_compare`.
//!
//! A benchmark file is a flat list of [`MeasurementRecord`]s. Records whose
//! names share a logical benchmark name are folded into one [`StatsBundle`],
//! and the bundles of one file form a [`ResultSet`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One entry of the `benchmarks` array.
///
/// `real_time` and `cpu_time` default to `0` when absent. This leniency is
/// deliberate: harnesses omit timings on error rows and the comparison only
/// needs the aggregate rows to be complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub name: String,
    #[serde(default)]
    pub real_time: f64,
    #[serde(default)]
    pub cpu_time: f64,
}

impl MeasurementRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, real_time: f64, cpu_time: f64) -> Self {
        Self {
            name: name.into(),
            real_time,
            cpu_time,
        }
    }

    /// The (wall-clock, CPU) pair carried by this record.
    #[must_use]
    pub const fn timing(&self) -> Timing {
        Timing {
            real: self.real_time,
            cpu: self.cpu_time,
        }
    }
}

/// Aggregate statistic a record carries, identified by its name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Mean,
    Median,
    Stddev,
    Cv,
}

impl StatKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Stddev => "stddev",
            Self::Cv => "cv",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wall-clock and CPU value of one statistic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Timing {
    pub real: f64,
    pub cpu: f64,
}

/// Optional aggregate statistics for one logical benchmark.
///
/// Each slot is filled only if the matching suffixed record was present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<Timing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median: Option<Timing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stddev: Option<Timing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv: Option<Timing>,
}

impl StatsBundle {
    /// Store a statistic, replacing any earlier value for the same kind.
    pub fn set(&mut self, kind: StatKind, timing: Timing) {
        *self.slot_mut(kind) = Some(timing);
    }

    #[must_use]
    pub const fn get(&self, kind: StatKind) -> Option<Timing> {
        match kind {
            StatKind::Mean => self.mean,
            StatKind::Median => self.median,
            StatKind::Stddev => self.stddev,
            StatKind::Cv => self.cv,
        }
    }

    fn slot_mut(&mut self, kind: StatKind) -> &mut Option<Timing> {
        match kind {
            StatKind::Mean => &mut self.mean,
            StatKind::Median => &mut self.median,
            StatKind::Stddev => &mut self.stddev,
            StatKind::Cv => &mut self.cv,
        }
    }

    #[must_use]
    pub fn mean_time(&self) -> Option<f64> {
        self.mean.map(|t| t.real)
    }

    #[must_use]
    pub fn mean_cpu(&self) -> Option<f64> {
        self.mean.map(|t| t.cpu)
    }

    #[must_use]
    pub fn median_time(&self) -> Option<f64> {
        self.median.map(|t| t.real)
    }

    #[must_use]
    pub fn median_cpu(&self) -> Option<f64> {
        self.median.map(|t| t.cpu)
    }

    #[must_use]
    pub fn stddev_time(&self) -> Option<f64> {
        self.stddev.map(|t| t.real)
    }

    #[must_use]
    pub fn stddev_cpu(&self) -> Option<f64> {
        self.stddev.map(|t| t.cpu)
    }

    #[must_use]
    pub fn cv_time(&self) -> Option<f64> {
        self.cv.map(|t| t.real)
    }

    #[must_use]
    pub fn cv_cpu(&self) -> Option<f64> {
        self.cv.map(|t| t.cpu)
    }

    /// A bundle takes part in a comparison only when it has a mean.
    #[must_use]
    pub const fn is_comparable(&self) -> bool {
        self.mean.is_some()
    }
}

/// Statistics bundles of one run keyed by logical benchmark name.
///
/// Iteration is in ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    bundles: BTreeMap<String, StatsBundle>,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle for `name`, created empty on first use.
    pub fn entry(&mut self, name: &str) -> &mut StatsBundle {
        self.bundles.entry(name.to_string()).or_default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StatsBundle> {
        self.bundles.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bundles.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatsBundle)> {
        self.bundles.iter().map(|(name, bundle)| (name.as_str(), bundle))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults_missing_timings() {
        let record: MeasurementRecord =
            serde_json::from_str(r#"{"name": "BM_Copy_mean"}"#).unwrap();
        assert_eq!(record.name, "BM_Copy_mean");
        assert_eq!(record.real_time, 0.0);
        assert_eq!(record.cpu_time, 0.0);
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let record: MeasurementRecord = serde_json::from_str(
            r#"{"name": "BM_Copy", "run_type": "iteration", "iterations": 1000,
                "real_time": 12.5, "cpu_time": 12.0, "time_unit": "ns"}"#,
        )
        .unwrap();
        assert_eq!(record.timing(), Timing { real: 12.5, cpu: 12.0 });
    }

    #[test]
    fn test_record_requires_name() {
        let err = serde_json::from_str::<MeasurementRecord>(r#"{"real_time": 1.0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_bundle_accessors() {
        let mut bundle = StatsBundle::default();
        assert!(!bundle.is_comparable());

        bundle.set(StatKind::Mean, Timing { real: 10.0, cpu: 9.0 });
        bundle.set(StatKind::Stddev, Timing { real: 1.0, cpu: 0.5 });
        assert!(bundle.is_comparable());
        assert_eq!(bundle.mean_time(), Some(10.0));
        assert_eq!(bundle.mean_cpu(), Some(9.0));
        assert_eq!(bundle.stddev_cpu(), Some(0.5));
        assert_eq!(bundle.median_cpu(), None);
        assert_eq!(bundle.cv_time(), None);
    }

    #[test]
    fn test_bundle_set_overwrites() {
        let mut bundle = StatsBundle::default();
        bundle.set(StatKind::Median, Timing { real: 1.0, cpu: 1.0 });
        bundle.set(StatKind::Median, Timing { real: 2.0, cpu: 3.0 });
        assert_eq!(bundle.median_time(), Some(2.0));
        assert_eq!(bundle.median_cpu(), Some(3.0));
    }

    #[test]
    fn test_result_set_is_sorted() {
        let mut set = ResultSet::new();
        set.entry("zeta");
        set.entry("alpha");
        set.entry("Mid");
        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["Mid", "alpha", "zeta"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_result_set_entry_reuses_bundle() {
        let mut set = ResultSet::new();
        set.entry("BM_Sort").set(StatKind::Mean, Timing { real: 1.0, cpu: 1.0 });
        set.entry("BM_Sort").set(StatKind::Cv, Timing { real: 0.1, cpu: 0.1 });
        let bundle = set.get("BM_Sort").unwrap();
        assert!(bundle.mean.is_some());
        assert!(bundle.cv.is_some());
        assert_eq!(set.len(), 1);
    }
}
