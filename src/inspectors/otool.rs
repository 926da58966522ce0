use std::io::{self, BufReader};
use std::process::{Command, Stdio};

use super::common::read_listing;
use super::{DependencyLister, InspectError};
use crate::core::config::DEFAULT_INSPECT_PROGRAM;

/// Runs `<program> [args...] -L <path>` and reads the tab-indented records from its stdout
pub struct OtoolLister {
    program: String,
    args: Vec<String>,
}

impl Default for OtoolLister {
    fn default() -> Self {
        Self::new(DEFAULT_INSPECT_PROGRAM)
    }
}

impl OtoolLister {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before `-L`, e.g. `otool` for `xcrun otool`
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

impl DependencyLister for OtoolLister {
    fn list_direct_dependencies(&self, path: &str) -> Result<Vec<String>, InspectError> {
        let command = self.command_line(path);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg("-L")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| InspectError::Launch {
                command: command.clone(),
                source,
            })?;

        // stdout is always captured above
        let listing = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "stdout not captured"))
            .and_then(|stdout| read_listing(BufReader::new(stdout)))
            .map_err(|source| InspectError::Read {
                command: command.clone(),
                source,
            });

        // Reap the child on every path, including read failures
        match child.wait() {
            Ok(status) if !status.success() => {
                log::debug!("`{}` exited with {}", command, status);
            }
            Ok(_) => {}
            Err(err) => log::debug!("failed waiting for `{}`: {}", command, err),
        }

        listing
    }

    fn lister_name(&self) -> &str {
        &self.program
    }

    fn command_line(&self, path: &str) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        format!("{} -L {}", line, path)
    }
}
