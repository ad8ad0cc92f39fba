//! Loading the compromised package list.
//!
//! The list is a CSV file with a header row. The package name column may be
//! called `package_name` or `name` and the version column `version`, in any
//! letter case. Other columns are ignored.
//!
//! # Example
//!
//! ```no_run
//! use npmsweep::compromised::load_compromised_packages;
//! use std::path::Path;
//!
//! let entries = load_compromised_packages(Path::new("shai-hulud.csv"))?;
//! println!("Loaded {} compromised packages", entries.len());
//! # Ok::<(), npmsweep::AuditError>(())
//! ```

use crate::error::AuditError;
use crate::model::CompromisedPackage;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;
use tracing::debug;

/// Recognized package name headers, in priority order.
const NAME_HEADERS: &[&str] = &["package_name", "name"];
const VERSION_HEADER: &str = "version";

/// Reads the compromised package list at `path`.
///
/// Rows with an empty (after trimming) package name are skipped. An empty
/// result is not an error here; callers decide what an empty list means.
///
/// # Errors
///
/// Returns [`AuditError::CompromisedListNotFound`] if `path` is not a file,
/// and [`AuditError::CompromisedListRead`] on I/O or CSV syntax errors.
pub fn load_compromised_packages(path: &Path) -> Result<Vec<CompromisedPackage>, AuditError> {
    if !path.is_file() {
        return Err(AuditError::CompromisedListNotFound(path.to_path_buf()));
    }

    let read_err = |source| AuditError::CompromisedListRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_path(path)
        .map_err(read_err)?;

    let headers = reader.headers().map_err(read_err)?.clone();
    let name_idx = NAME_HEADERS
        .iter()
        .find_map(|wanted| column_index(&headers, wanted));
    let version_idx = column_index(&headers, VERSION_HEADER);

    let Some(name_idx) = name_idx else {
        debug!(path = %path.display(), "no package name column in compromised list");
        return Ok(Vec::new());
    };

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_err)?;

        let name = record.get(name_idx).unwrap_or_default().trim();
        if name.is_empty() {
            continue;
        }

        let version = version_idx
            .and_then(|idx| record.get(idx))
            .unwrap_or_default()
            .trim();

        entries.push(CompromisedPackage::new(name, version));
    }

    debug!(path = %path.display(), count = entries.len(), "loaded compromised package list");
    Ok(entries)
}

fn column_index(headers: &StringRecord, wanted: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(wanted))
}
