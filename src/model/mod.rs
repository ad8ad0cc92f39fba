//! Core data types for compromised packages, installed packages, and findings.
//!
//! This module contains the fundamental types used throughout npmsweep:
//!
//! - [`CompromisedPackage`] - One row of the operator-supplied compromise list
//! - [`InstalledPackages`] - Name to version mapping for one enumeration scope
//! - [`Location`] - Where an installed package was found
//! - [`Finding`] - An installed package that appears on the compromise list
//! - [`Platform`] - Operating system platform
//!
//! # Example
//!
//! ```
//! use npmsweep::{CompromisedPackage, Finding, Location};
//!
//! let entry = CompromisedPackage::new("evil-pkg", "9.9.9");
//! let finding = Finding::new(&entry.package_name, "9.9.9", &entry.version, Location::Global);
//!
//! assert_eq!(finding.location.to_string(), "global");
//! ```

mod finding;
mod package;

pub use finding::*;
pub use package::*;
