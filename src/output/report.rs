use crate::error::AuditError;
use crate::model::Finding;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;
use tracing::info;

/// Column header of the findings report.
pub const REPORT_HEADER: [&str; 4] = [
    "package_name",
    "installed_version",
    "impacted_version_from_csv",
    "location",
];

/// Writes `findings` to `path`, replacing any earlier report.
///
/// Parent directories are created as needed. The header row is always
/// written, so an empty `findings` still produces a valid report.
///
/// # Errors
///
/// Returns [`AuditError::ReportWrite`] if the directory or file cannot be
/// written.
pub fn write_report(path: &Path, findings: &[Finding]) -> Result<(), AuditError> {
    let write_err = |source: csv::Error| AuditError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };
    let io_err = |source: std::io::Error| write_err(source.into());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    // Header written by hand so that it is present with zero rows.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(write_err)?;
    writer.write_record(REPORT_HEADER).map_err(write_err)?;
    for finding in findings {
        writer.serialize(finding).map_err(write_err)?;
    }
    writer.flush().map_err(io_err)?;

    info!(path = %path.display(), findings = findings.len(), "wrote findings report");
    Ok(())
}

/// Reads a report written by [`write_report`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or a row does not parse.
pub fn read_report(path: &Path) -> Result<Vec<Finding>> {
    let mut reader = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("Failed to open report {}", path.display()))?;

    reader
        .deserialize()
        .map(|row| row.with_context(|| format!("Failed to parse report {}", path.display())))
        .collect()
}
