use std::collections::BTreeMap;

/// Installed packages for one scope, keyed by package name.
///
/// Ordered by name so that findings come out in the same order on every run.
pub type InstalledPackages = BTreeMap<String, String>;

/// A package name (and optional version hint) from the compromise list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompromisedPackage {
    pub package_name: String,
    /// Version hint from the list. Empty when the list carries none.
    pub version: String,
}

impl CompromisedPackage {
    pub fn new(package_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            version: version.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        return Platform::MacOS;
        #[cfg(target_os = "windows")]
        return Platform::Windows;
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        return Platform::Linux;
    }
}
