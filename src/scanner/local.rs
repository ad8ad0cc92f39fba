use super::{parse_listing, PackageManager, DEPENDENCY_DIR, MANIFEST_FILE};
use crate::error::ListingError;
use crate::model::InstalledPackages;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
struct PackageJson {
    name: Option<String>,
    version: Option<String>,
}

/// Lists the packages installed in one project.
///
/// Manifests under `node_modules` are read first. The package manager is
/// only asked when that finds nothing (no `node_modules`, or a hoisted
/// workspace layout with nothing materialized here).
///
/// # Errors
///
/// Returns an error only from the package manager fallback.
pub fn list_local(
    pm: &dyn PackageManager,
    project_dir: &Path,
) -> Result<InstalledPackages, ListingError> {
    let installed = read_dependency_dir(project_dir);
    if !installed.is_empty() {
        debug!(
            project = %project_dir.display(),
            count = installed.len(),
            "enumerated packages from node_modules"
        );
        return Ok(installed);
    }

    let output = pm.list_local(project_dir)?;
    let installed = parse_listing(&output)?;
    debug!(
        project = %project_dir.display(),
        count = installed.len(),
        "enumerated packages from {}",
        pm.name()
    );
    Ok(installed)
}

/// Reads the manifests of the packages installed in `<project_dir>/node_modules`.
///
/// Scoped packages (`@scope/name`) are found one level deeper. Entries whose
/// name starts with `.` are skipped, and so is any entry whose manifest is
/// missing, unreadable, or malformed.
pub fn read_dependency_dir(project_dir: &Path) -> InstalledPackages {
    let mut installed = InstalledPackages::new();
    let dependency_dir = project_dir.join(DEPENDENCY_DIR);

    let entries = match fs::read_dir(&dependency_dir) {
        Ok(entries) => entries,
        Err(_) => return installed,
    };

    for entry in entries.flatten() {
        let dir_name = entry.file_name().to_string_lossy().to_string();
        if dir_name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if dir_name.starts_with('@') && path.is_dir() {
            let scoped = match fs::read_dir(&path) {
                Ok(scoped) => scoped,
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "skipping unreadable scope");
                    continue;
                }
            };
            for sub in scoped.flatten() {
                let fallback = format!("{}/{}", dir_name, sub.file_name().to_string_lossy());
                read_into(&sub.path(), &fallback, &mut installed);
            }
        } else {
            read_into(&path, &dir_name, &mut installed);
        }
    }

    installed
}

fn read_into(package_dir: &Path, fallback_name: &str, installed: &mut InstalledPackages) {
    let manifest = package_dir.join(MANIFEST_FILE);
    if !manifest.is_file() {
        return;
    }

    match read_manifest(&manifest) {
        Ok(pkg) => {
            let name = pkg.name.unwrap_or_else(|| fallback_name.to_string());
            installed.insert(name, pkg.version.unwrap_or_default());
        }
        Err(err) => {
            debug!(manifest = %manifest.display(), error = %err, "skipping package");
        }
    }
}

fn read_manifest(path: &Path) -> Result<PackageJson> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
