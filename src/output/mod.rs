//! Findings report and console summary.

mod report;
mod summary;

pub use report::{read_report, write_report, REPORT_HEADER};
pub use summary::{render_npm_missing, render_summary};
