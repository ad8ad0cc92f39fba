//! Installed package enumeration and project discovery.
//!
//! This module provides the [`PackageManager`] trait and the functions that
//! build an [`InstalledPackages`] mapping for one scope.
//!
//! | Function | Scope | Strategy |
//! |----------|-------|----------|
//! | [`list_global`] | Global install tree | `npm -g ls --depth=0 --json` |
//! | [`list_local`] | One project | `node_modules` manifests, then `npm ls --depth=0 --json` |
//! | [`discover_projects`] | Operator roots | Recursive `package.json` search |
//!
//! # Example
//!
//! ```no_run
//! use npmsweep::scanner::{list_global, NpmCli, PackageManager};
//!
//! let npm = NpmCli::default();
//! if npm.is_available() {
//!     let installed = list_global(&npm).unwrap_or_default();
//!     for (name, version) in &installed {
//!         println!("{}: {}", name, version);
//!     }
//! }
//! ```

mod discover;
mod global;
mod local;
mod npm;

pub use discover::{discover_projects, DEPENDENCY_DIR, MANIFEST_FILE};
pub use global::list_global;
pub use local::{list_local, read_dependency_dir};
pub use npm::NpmCli;

use crate::error::ListingError;
use crate::model::InstalledPackages;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Access to the package manager whose install state is being audited.
///
/// Implementors return the raw stdout of the depth-zero JSON listing; the
/// enumerators parse it with [`parse_listing`].
pub trait PackageManager {
    /// Returns the command shown in diagnostics.
    fn name(&self) -> &str;

    /// Returns true if the package manager is installed and answers a
    /// version query.
    fn is_available(&self) -> bool;

    /// Lists the globally installed packages.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be run, or fails without
    /// printing anything.
    fn list_global(&self) -> Result<String, ListingError>;

    /// Lists the packages installed in `project_dir`, running the command
    /// with `project_dir` as its working directory.
    ///
    /// # Errors
    ///
    /// Same conditions as [`list_global`](Self::list_global).
    fn list_local(&self, project_dir: &Path) -> Result<String, ListingError>;
}

#[derive(Deserialize)]
struct NpmListOutput {
    #[serde(default)]
    dependencies: Option<BTreeMap<String, NpmListEntry>>,
}

#[derive(Deserialize)]
struct NpmListEntry {
    #[serde(default)]
    version: Option<String>,
}

/// Parses the JSON printed by a depth-zero package listing.
///
/// npm may print warnings ahead of the payload, so when the full output is
/// not valid JSON the parse is retried from the first `{`. Empty output is an
/// empty mapping.
///
/// # Errors
///
/// Returns [`ListingError::Parse`] if neither attempt yields a listing.
pub fn parse_listing(output: &str) -> Result<InstalledPackages, ListingError> {
    let output = output.trim();
    if output.is_empty() {
        return Ok(InstalledPackages::new());
    }

    let listing: NpmListOutput = match serde_json::from_str(output) {
        Ok(listing) => listing,
        Err(err) => match output.find('{') {
            Some(start) => serde_json::from_str(&output[start..])?,
            None => return Err(err.into()),
        },
    };

    Ok(listing
        .dependencies
        .unwrap_or_default()
        .into_iter()
        .map(|(name, entry)| (name, entry.version.unwrap_or_default()))
        .collect())
}


#[cfg(test)]
mod tests {
    use super::*;

    const GLOBAL_LISTING: &str = r#"{
  "name": "lib",
  "dependencies": {
    "corepack": { "version": "0.29.4", "overridden": false },
    "npm": { "version": "10.8.2", "overridden": false },
    "typescript": { "version": "5.6.2", "overridden": false }
  }
}"#;

    #[test]
    fn test_parse_listing() {
        let installed = parse_listing(GLOBAL_LISTING).unwrap();
        assert_eq!(installed.len(), 3);
        assert_eq!(installed["typescript"], "5.6.2");
        assert_eq!(installed["npm"], "10.8.2");
    }

    #[test]
    fn test_parse_listing_with_leading_noise() {
        let noisy = format!(
            "npm WARN config global `--global`, `--local` are deprecated.\n{}",
            GLOBAL_LISTING
        );
        let installed = parse_listing(&noisy).unwrap();
        assert_eq!(installed["corepack"], "0.29.4");
    }

    #[test]
    fn test_parse_listing_missing_version_defaults_empty() {
        let installed =
            parse_listing(r#"{"dependencies": {"ghost": {"missing": true}}}"#).unwrap();
        assert_eq!(installed["ghost"], "");
    }

    #[test]
    fn test_parse_listing_without_dependencies() {
        assert!(parse_listing(r#"{"name": "empty-project"}"#).unwrap().is_empty());
        assert!(parse_listing(r#"{"dependencies": null}"#).unwrap().is_empty());
        assert!(parse_listing("").unwrap().is_empty());
        assert!(parse_listing("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_listing_garbage() {
        assert!(matches!(
            parse_listing("command not found"),
            Err(ListingError::Parse(_))
        ));
        assert!(matches!(
            parse_listing("warning { not json"),
            Err(ListingError::Parse(_))
        ));
    }
}
