//! Error types.
//!
//! [`AuditError`] covers the conditions that end a run. [`ListingError`]
//! describes why one package-manager listing produced nothing; the audit
//! treats it as an empty scope rather than a failure.

use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("CSV not found: {}", .0.display())]
    CompromisedListNotFound(PathBuf),

    #[error("failed to read compromised package list {}", .path.display())]
    CompromisedListRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no impacted package names found in {}", .0.display())]
    EmptyCompromisedList(PathBuf),

    #[error("failed to write report {}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("failed to execute {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status} and no output: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to parse package listing")]
    Parse(#[from] serde_json::Error),
}
