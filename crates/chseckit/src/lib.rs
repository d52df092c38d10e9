//! # chseckit
//!
//! Library for editing AIX stanza files (structured key/value
//! configuration blocks, e.g. `/etc/security/user`) through the system
//! `chsec` utility.
//!
//! This crate does not parse stanza files itself. Locating the stanza,
//! merging keys, and rewriting the file are all delegated to chsec; the
//! library's job is to build the correct command line for a desired
//! state, execute it, and interpret the exit status.
//!
//! ## Example
//!
//! ```no_run
//! use chseckit::{Editor, StanzaRequest, State};
//!
//! let editor = Editor::new().expect("chsec not available");
//!
//! let request = StanzaRequest::new(
//!     "/etc/security/user",
//!     "ldapuser",
//!     vec!["SYSTEM=LDAP".to_string(), "registry=LDAP".to_string()],
//!     State::Present,
//! );
//!
//! let result = editor.apply(&request).expect("chsec failed");
//! assert_eq!(result.msg, "stanza added");
//! ```
//!
//! ## Change detection
//!
//! chsec's exit code is the only signal this crate consumes, and it does
//! not distinguish a no-op run from a real edit. A successful `apply`
//! therefore always reports `changed = true`. The
//! [`fileattrs::FileAttributeReconciler`] collaborator, by contrast,
//! reads metadata first and reports changes accurately.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod command;
pub mod error;
pub mod fileattrs;
pub mod types;

pub use error::{Error, Result};
pub use fileattrs::{FileAttrs, FileAttributeReconciler, LocalReconciler};
pub use types::{ExecutionResult, StanzaRequest, State, ToolOutput};

use backend::Backend;

/// High-level client for stanza editing.
///
/// Wraps a [`Backend`] and turns a [`StanzaRequest`] into a chsec
/// invocation. The editor is stateless; every call spawns exactly one
/// child process and blocks until it exits.
pub struct Editor {
    backend: Box<dyn Backend>,
}

impl Editor {
    /// Create a new `Editor` with the default backend.
    ///
    /// Returns [`Error::ToolNotFound`] if chsec is not installed.
    pub fn new() -> Result<Self> {
        let backend = backend::default_backend()?;
        Ok(Self {
            backend: Box::new(backend),
        })
    }

    /// Create an editor with a custom backend (useful for testing).
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Check if the underlying tool is available.
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Apply a stanza edit.
    ///
    /// Validates the request, builds the chsec argument list, runs the
    /// tool, and maps the exit status to a result. A non-zero exit fails
    /// with [`Error::Execution`] carrying the phase ("present" or
    /// "absent"), the exit code, and captured stderr.
    pub fn apply(&self, request: &StanzaRequest) -> Result<ExecutionResult> {
        request.validate()?;

        let args = command::build_args(request);
        let output = self.backend.invoke(&args)?;

        if !output.success {
            return Err(Error::Execution {
                phase: request.state.phase(),
                rc: output.code.unwrap_or(-1),
                stderr: output.stderr_str().trim().to_string(),
            });
        }

        Ok(ExecutionResult {
            changed: true,
            msg: request.state.message().to_string(),
        })
    }
}
