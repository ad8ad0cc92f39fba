//! End-to-end audit run.
//!
//! [`run_audit`] loads the compromise list, enumerates the global scope and
//! every discovered project, matches each scope, and writes the report.
//! Rendering the summary is left to the caller.

use crate::compromised::load_compromised_packages;
use crate::error::AuditError;
use crate::matcher::match_packages;
use crate::model::{Finding, InstalledPackages, Location};
use crate::output::write_report;
use crate::scanner::{discover_projects, list_global, list_local, PackageManager};
use chrono::{DateTime, Utc};
use indicatif::ProgressBar;
use std::path::PathBuf;
use tracing::{debug, info};

/// Inputs for one audit run.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// CSV file listing compromised packages.
    pub compromised_list: PathBuf,
    /// Directories searched for local projects. Empty means global only.
    pub roots: Vec<PathBuf>,
    /// Where the findings report is written.
    pub report_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStatus {
    /// All scopes were enumerated and matched.
    Completed,
    /// The package manager is not installed; an empty report was written.
    PackageManagerMissing,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub status: AuditStatus,
    /// Findings in scan order: global first, then each project.
    pub findings: Vec<Finding>,
    pub projects_scanned: usize,
    pub report_path: PathBuf,
    pub completed_at: DateTime<Utc>,
}

/// Runs an audit.
///
/// Listing failures at any scope count as an empty scope and are logged at
/// debug level. `progress` is advanced once per scanned project.
///
/// # Errors
///
/// Returns an error if the compromise list is missing, unreadable, or has no
/// usable rows, or if the report cannot be written.
pub fn run_audit(
    request: &AuditRequest,
    pm: &dyn PackageManager,
    progress: &ProgressBar,
) -> Result<AuditOutcome, AuditError> {
    let compromised = load_compromised_packages(&request.compromised_list)?;
    if compromised.is_empty() {
        return Err(AuditError::EmptyCompromisedList(
            request.compromised_list.clone(),
        ));
    }
    info!(count = compromised.len(), "loaded compromised package list");

    if !pm.is_available() {
        info!(command = pm.name(), "package manager not found, nothing to scan");
        write_report(&request.report_path, &[])?;
        return Ok(AuditOutcome {
            status: AuditStatus::PackageManagerMissing,
            findings: Vec::new(),
            projects_scanned: 0,
            report_path: request.report_path.clone(),
            completed_at: Utc::now(),
        });
    }

    let global = list_global(pm).unwrap_or_else(|err| {
        debug!(error = %err, "global listing failed, treating as empty");
        InstalledPackages::new()
    });
    let mut findings = match_packages(&compromised, &global, &Location::Global);

    let projects = if request.roots.is_empty() {
        Vec::new()
    } else {
        discover_projects(&request.roots)
    };
    info!(count = projects.len(), "scanning local projects");

    progress.set_length(projects.len() as u64);
    for project in &projects {
        progress.set_message(project.display().to_string());

        let installed = list_local(pm, project).unwrap_or_else(|err| {
            debug!(project = %project.display(), error = %err, "local listing failed, treating as empty");
            InstalledPackages::new()
        });
        findings.extend(match_packages(
            &compromised,
            &installed,
            &Location::Local(project.clone()),
        ));

        progress.inc(1);
    }
    progress.finish_and_clear();

    write_report(&request.report_path, &findings)?;

    Ok(AuditOutcome {
        status: AuditStatus::Completed,
        findings,
        projects_scanned: projects.len(),
        report_path: request.report_path.clone(),
        completed_at: Utc::now(),
    })
}
