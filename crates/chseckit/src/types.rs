//! Core types for stanza edit requests and results.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Output;

/// Desired state for the attributes listed in a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Attributes are added or updated in the stanza
    #[default]
    Present,
    /// Attributes are cleared from the stanza
    Absent,
}

impl State {
    /// Phase label attached to execution errors.
    pub fn phase(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// Success message reported for this state.
    pub fn message(self) -> &'static str {
        match self {
            Self::Present => "stanza added",
            Self::Absent => "stanza removed",
        }
    }
}

/// A single stanza edit: which file, which stanza, which attributes, and
/// whether those attributes should end up present or absent.
///
/// Options keep their input order; chsec applies repeated keys in the
/// order given. To remove a single attribute while leaving the rest of
/// the stanza alone, pass `key=` (empty value) with [`State::Present`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StanzaRequest {
    /// Path to the target stanza file
    pub path: PathBuf,
    /// Name of the stanza to edit
    pub stanza: String,
    /// Attributes as `key=value` strings, in application order
    pub options: Vec<String>,
    /// Desired state of the listed attributes
    #[serde(default)]
    pub state: State,
}

impl StanzaRequest {
    /// Create a new request.
    pub fn new(
        path: impl Into<PathBuf>,
        stanza: impl Into<String>,
        options: Vec<String>,
        state: State,
    ) -> Self {
        Self {
            path: path.into(),
            stanza: stanza.into(),
            options,
            state,
        }
    }

    /// Check the request invariants: at least one option, and at most one
    /// `=` per option.
    pub fn validate(&self) -> Result<()> {
        if self.options.is_empty() {
            return Err(Error::EmptyOptions);
        }
        for option in &self.options {
            if option.matches('=').count() > 1 {
                return Err(Error::MalformedOption(option.clone()));
            }
        }
        Ok(())
    }
}

/// Outcome of a single successful stanza edit.
///
/// Nothing persists across invocations; the editor is stateless and
/// `changed` reflects only that chsec exited cleanly (see the crate docs
/// on change detection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Whether the invocation is considered to have changed the file
    pub changed: bool,
    /// Human-readable outcome, "stanza added" or "stanza removed"
    pub msg: String,
}

/// Captured output from a chsec child process.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code, when the process exited normally
    pub code: Option<i32>,
    /// Captured standard output
    pub stdout: Vec<u8>,
    /// Captured standard error
    pub stderr: Vec<u8>,
    /// Whether the process exited with status zero
    pub success: bool,
}

impl From<Output> for ToolOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
            success: output.status.success(),
        }
    }
}

impl ToolOutput {
    /// Get stdout as a string.
    pub fn stdout_str(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    /// Get stderr as a string.
    pub fn stderr_str(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }
}
