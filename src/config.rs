//! Configuration file handling.
//!
//! This module provides loading of npmsweep configuration from a TOML file.
//! Every field is optional; command-line flags take precedence.
//!
//! # Configuration Location
//!
//! The configuration file is read from:
//! - Linux: `~/.config/npmsweep/config.toml`
//! - macOS: `~/Library/Application Support/npmsweep/config.toml`
//! - Windows: `%APPDATA%\npmsweep\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! report_path = "/var/tmp/npm_findings.csv"
//! npm_command = "/opt/homebrew/bin/npm"
//! default_roots = ["~/code", "/srv"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::platform::{default_report_path, npm_command};

/// Application configuration.
///
/// # Example
///
/// ```no_run
/// use npmsweep::Config;
///
/// // Load from file (or use defaults if file doesn't exist)
/// let config = Config::load().unwrap();
///
/// println!("Report: {}", config.report_path.display());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the findings report is written.
    ///
    /// Default: the platform's well-known security intel directory
    pub report_path: PathBuf,

    /// npm executable to invoke, as a name on `PATH` or an absolute path.
    ///
    /// Default: `npm` (`npm.cmd` on Windows)
    pub npm_command: String,

    /// Directories searched for local projects when `--roots` is not given.
    ///
    /// Default: none (global packages only)
    pub default_roots: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_path: default_report_path(),
            npm_command: npm_command().to_string(),
            default_roots: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path, which must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Returns the path to the configuration file.
    ///
    /// # Example
    ///
    /// ```
    /// use npmsweep::Config;
    ///
    /// let path = Config::config_path();
    /// assert!(path.ends_with("npmsweep/config.toml"));
    /// ```
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("npmsweep")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.report_path, default_report_path());
        assert_eq!(config.npm_command, npm_command());
        assert!(config.default_roots.is_empty());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_roots = [\"~/code\", \"/srv\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.default_roots,
            vec![PathBuf::from("~/code"), PathBuf::from("/srv")]
        );
        assert_eq!(config.report_path, default_report_path());
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "report_path = \"/var/tmp/findings.csv\"\nnpm_command = \"/opt/bin/npm\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.report_path, PathBuf::from("/var/tmp/findings.csv"));
        assert_eq!(config.npm_command, "/opt/bin/npm");
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from(&dir.path().join("missing.toml")).is_err());

        let path = dir.path().join("config.toml");
        fs::write(&path, "default_roots = 3\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
