//! Error types for chsec operations.
//!
//! Nothing is recovered locally: every failure is surfaced to the caller
//! with the underlying exit code and captured stderr attached. There is
//! no retry and no distinction between transient and permanent causes.

use thiserror::Error;

/// Errors that can occur while editing a stanza file.
#[derive(Debug, Error)]
pub enum Error {
    /// The chsec executable could not be located on this system
    #[error("chsec not found (is this an AIX host?)")]
    ToolNotFound,

    /// chsec exited non-zero
    ///
    /// Covers malformed stanza names, invalid option syntax, permission
    /// problems, and missing files alike; chsec reports all of them
    /// through its exit code and stderr only.
    #[error("chsec command failed ({phase}): exit code {rc}")]
    Execution {
        /// Which state transition was being applied ("present" or "absent")
        phase: &'static str,
        /// Exit code of the chsec child process
        rc: i32,
        /// Captured standard-error text
        stderr: String,
    },

    /// A request carried no options at all
    #[error("options must contain at least one key=value entry")]
    EmptyOptions,

    /// An option carried more than one `=`
    #[error("malformed option {0:?}: at most one '=' is allowed")]
    MalformedOption(String),

    /// Owner name not present in the passwd database
    #[error("unknown owner: {0}")]
    UnknownOwner(String),

    /// Group name not present in the group database
    #[error("unknown group: {0}")]
    UnknownGroup(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Exit code of the failed chsec invocation, when one actually ran.
    pub fn rc(&self) -> Option<i32> {
        match self {
            Self::Execution { rc, .. } => Some(*rc),
            _ => None,
        }
    }

    /// Captured stderr of the failed chsec invocation, when non-empty.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Execution { stderr, .. } if !stderr.is_empty() => Some(stderr),
            _ => None,
        }
    }
}

/// Result type for chsec operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_error_display_names_phase() {
        let err = Error::Execution {
            phase: "absent",
            rc: 255,
            stderr: "3004-692 Error changing attribute".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("absent"));
        assert!(msg.contains("255"));
    }

    #[test]
    fn test_rc_and_stderr_accessors() {
        let err = Error::Execution {
            phase: "present",
            rc: 1,
            stderr: "denied".to_string(),
        };
        assert_eq!(err.rc(), Some(1));
        assert_eq!(err.stderr(), Some("denied"));

        assert_eq!(Error::ToolNotFound.rc(), None);
        assert_eq!(Error::ToolNotFound.stderr(), None);
    }

    #[test]
    fn test_empty_stderr_is_none() {
        let err = Error::Execution {
            phase: "present",
            rc: 2,
            stderr: String::new(),
        };
        assert_eq!(err.stderr(), None);
    }
}
