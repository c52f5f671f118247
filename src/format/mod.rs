//! Output formatting for `bench_compare`.
//!
//! The report is plain text on standard output: a fixed-width table, a
//! legend of significance markers, and a summary of significant
//! improvements.

mod text;

pub use text::{
    COLUMN_WIDTH, LEGEND, NAME_WIDTH, RULE_WIDTH, format_percent, format_row,
    format_significance, render_report,
};
