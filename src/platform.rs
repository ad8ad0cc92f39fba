//! Cross-platform path resolution.
//!
//! This module provides the well-known report location, the npm binary
//! name, and home-directory expansion for operator-supplied roots.

use crate::model::Platform;
use std::path::{Path, PathBuf};

/// File name of the findings report.
pub const REPORT_FILE_NAME: &str = "npm_findings.csv";

/// Returns the default path of the findings report.
///
/// Platform-specific locations:
/// - Linux: `/var/lib/security/intel/npm_findings.csv`
/// - macOS: `/Library/Application Support/Security/intel/npm_findings.csv`
/// - Windows: `%ProgramData%\Security\intel\npm_findings.csv`
pub fn default_report_path() -> PathBuf {
    match Platform::current() {
        Platform::Linux => PathBuf::from("/var/lib")
            .join("security")
            .join("intel")
            .join(REPORT_FILE_NAME),
        Platform::MacOS => PathBuf::from("/Library")
            .join("Application Support")
            .join("Security")
            .join("intel")
            .join(REPORT_FILE_NAME),
        Platform::Windows => std::env::var_os("ProgramData")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"))
            .join("Security")
            .join("intel")
            .join(REPORT_FILE_NAME),
    }
}

/// Returns the npm executable name for the current platform.
pub fn npm_command() -> &'static str {
    match Platform::current() {
        Platform::Windows => "npm.cmd",
        _ => "npm",
    }
}

/// Expands a leading `~` to the current user's home directory.
///
/// Paths without the shorthand, and `~user` forms, are returned unchanged.
/// If the home directory cannot be determined the path is also unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(first) if first.as_os_str() == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}
