//! Backend abstraction for chsec execution.
//!
//! The [`Backend`] trait defines the interface for running the stanza
//! editing tool, allowing for different implementations (real chsec
//! binary, mock for testing).

pub mod chsec;

use crate::error::Result;
use crate::types::ToolOutput;

/// Backend trait for executing the stanza editing tool.
pub trait Backend: Send + Sync {
    /// Check if the tool can be executed.
    fn is_available(&self) -> bool;

    /// Run the tool with the given arguments, blocking until it exits.
    ///
    /// Returns the captured output regardless of exit status; callers
    /// interpret success themselves.
    fn invoke(&self, args: &[String]) -> Result<ToolOutput>;
}

/// Get the default backend (real chsec binary).
pub fn default_backend() -> Result<chsec::ChsecBackend> {
    chsec::ChsecBackend::new()
}
