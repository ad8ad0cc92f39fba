use crate::platform::expand_home;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Directory where a project's installed packages live.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// File name of a package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Finds the project directories under `roots`.
///
/// A project is any directory holding a `package.json` that is not inside a
/// `node_modules` tree. Roots may start with `~`; roots that do not exist are
/// skipped. Each project appears once, in the order it was first found.
pub fn discover_projects<P: AsRef<Path>>(roots: &[P]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut projects = Vec::new();

    for root in roots {
        let root = root.as_ref();
        let resolved = match expand_home(root).canonicalize() {
            Ok(path) => path,
            Err(err) => {
                debug!(root = %root.display(), error = %err, "skipping root");
                continue;
            }
        };

        let walker = WalkDir::new(&resolved)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || e.file_name() != DEPENDENCY_DIR);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable path");
                    continue;
                }
            };

            if !entry.file_type().is_file() || entry.file_name() != MANIFEST_FILE {
                continue;
            }

            let path = entry.path();
            if in_dependency_dir(path) {
                continue;
            }

            if let Some(project) = path.parent() {
                if seen.insert(project.to_path_buf()) {
                    projects.push(project.to_path_buf());
                }
            }
        }
    }

    debug!(count = projects.len(), "discovered projects");
    projects
}

fn in_dependency_dir(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if name == DEPENDENCY_DIR))
}
