//! Real backend spawning the system `chsec` binary.

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::types::ToolOutput;
use std::path::Path;
use std::process::Command;

/// Backend that executes the real `chsec` command.
pub struct ChsecBackend {
    /// Path to the chsec executable
    chsec_path: String,
}

impl ChsecBackend {
    /// Create a new `ChsecBackend`.
    ///
    /// Returns an error if chsec cannot be located.
    pub fn new() -> Result<Self> {
        let chsec_path = find_chsec()?;
        Ok(Self { chsec_path })
    }

    /// Create a backend pointing at a specific executable.
    ///
    /// Useful for tests that substitute a stub script for chsec.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            chsec_path: path.into(),
        }
    }

    /// The executable path this backend will spawn.
    pub fn path(&self) -> &str {
        &self.chsec_path
    }
}

impl Backend for ChsecBackend {
    fn is_available(&self) -> bool {
        Path::new(&self.chsec_path).exists()
    }

    fn invoke(&self, args: &[String]) -> Result<ToolOutput> {
        log::debug!("running {} {}", self.chsec_path, args.join(" "));
        let output = Command::new(&self.chsec_path).args(args).output()?;
        Ok(output.into())
    }
}

/// Find the chsec executable path.
fn find_chsec() -> Result<String> {
    // Standard AIX install locations
    let paths = ["/usr/bin/chsec", "/usr/sbin/chsec"];

    for path in &paths {
        if Path::new(path).exists() {
            return Ok((*path).to_string());
        }
    }

    // Fall back to a PATH lookup
    let output = Command::new("which")
        .arg("chsec")
        .output()
        .map_err(|_| Error::ToolNotFound)?;

    if output.status.success() {
        let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !path.is_empty() {
            return Ok(path);
        }
    }

    Err(Error::ToolNotFound)
}
