use crate::error::ListingError;
use crate::platform::npm_command;
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// [`PackageManager`](super::PackageManager) backed by the npm CLI.
#[derive(Debug, Clone)]
pub struct NpmCli {
    command: String,
}

impl NpmCli {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.command, args.join(" "))
    }

    fn execute(&self, args: &[&str], dir: Option<&Path>) -> Result<Output, ListingError> {
        let command_line = self.command_line(args);
        debug!(command = %command_line, dir = ?dir, "running package manager");

        let mut cmd = Command::new(&self.command);
        cmd.args(args);
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }

        cmd.output().map_err(|source| ListingError::Spawn {
            command: command_line,
            source,
        })
    }

    fn list(&self, args: &[&str], dir: Option<&Path>) -> Result<String, ListingError> {
        let output = self.execute(args, dir)?;
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

        // npm ls exits 1 on peer dependency problems but still prints the listing
        if !output.status.success() && stdout.is_empty() {
            return Err(ListingError::Failed {
                command: self.command_line(args),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(stdout)
    }
}

impl Default for NpmCli {
    fn default() -> Self {
        Self::new(npm_command())
    }
}

impl super::PackageManager for NpmCli {
    fn name(&self) -> &str {
        &self.command
    }

    fn is_available(&self) -> bool {
        let output = match self.execute(&["-v"], None) {
            Ok(output) => output,
            Err(err) => {
                debug!(error = %err, "npm is not available");
                return false;
            }
        };

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() || version.is_empty() {
            debug!(status = %output.status, "npm version query failed");
            return false;
        }

        debug!(version = %version, "npm is available");
        true
    }

    fn list_global(&self) -> Result<String, ListingError> {
        self.list(&["-g", "ls", "--depth=0", "--json"], None)
    }

    fn list_local(&self, project_dir: &Path) -> Result<String, ListingError> {
        self.list(&["ls", "--depth=0", "--json"], Some(project_dir))
    }
}
