//! Grouping of measurement records into per-benchmark statistics.
//!
//! Record names carry the statistic they hold as a suffix
//! (`BM_Parse/64_mean`, `BM_Parse/64_stddev`, ...). The suffix is matched
//! against [`SUFFIX_RULES`] top to bottom and the first hit wins.

use crate::model::{MeasurementRecord, ResultSet, StatKind};
use tracing::{debug, info, trace};

/// Suffix routing table, evaluated in order with first-match semantics.
pub const SUFFIX_RULES: [(&str, StatKind); 4] = [
    ("_mean", StatKind::Mean),
    ("_median", StatKind::Median),
    ("_stddev", StatKind::Stddev),
    ("_cv", StatKind::Cv),
];

/// Split a record name into its logical benchmark name and statistic kind.
///
/// At most one suffix is stripped. Names matching no rule are returned
/// verbatim with `None`.
#[must_use]
pub fn split_logical_name(name: &str) -> (&str, Option<StatKind>) {
    SUFFIX_RULES
        .iter()
        .find_map(|&(suffix, kind)| name.strip_suffix(suffix).map(|base| (base, Some(kind))))
        .unwrap_or((name, None))
}

/// Fold the records of one run into a [`ResultSet`].
///
/// Every record creates a bundle for its logical name, even a raw
/// (unsuffixed) one, but only suffixed records fill bundle fields. A later
/// record for the same name and statistic overwrites an earlier one.
#[must_use]
pub fn aggregate(records: &[MeasurementRecord]) -> ResultSet {
    let mut results = ResultSet::new();
    let mut raw = 0usize;

    for record in records {
        let (logical, kind) = split_logical_name(&record.name);
        let bundle = results.entry(logical);
        match kind {
            Some(kind) => {
                if bundle.get(kind).is_some() {
                    debug!(benchmark = logical, stat = %kind, "Duplicate statistic; keeping last");
                }
                bundle.set(kind, record.timing());
            }
            None => {
                raw += 1;
                trace!(benchmark = logical, "Raw measurement record");
            }
        }
    }

    info!(
        records = records.len(),
        benchmarks = results.len(),
        raw_records = raw,
        "Aggregated benchmark records"
    );
    results
}
