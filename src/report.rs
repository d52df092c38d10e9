//! Output schema for apply results.

use serde::Serialize;
use std::path::PathBuf;

/// Successful apply outcome, echoing the target path.
#[derive(Debug, Serialize)]
pub struct ApplyReport {
    pub changed: bool,
    pub msg: String,
    pub path: PathBuf,
}

/// Structured failure: message plus exit code and stderr when a chsec
/// process actually ran.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl From<&chseckit::Error> for ErrorReport {
    fn from(err: &chseckit::Error) -> Self {
        Self {
            msg: err.to_string(),
            rc: err.rc(),
            stderr: err.stderr().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_report_json_shape() {
        let report = ApplyReport {
            changed: true,
            msg: "stanza added".to_string(),
            path: PathBuf::from("/etc/security/user"),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"changed":true,"msg":"stanza added","path":"/etc/security/user"}"#
        );
    }

    #[test]
    fn test_error_report_includes_rc_and_stderr() {
        let err = chseckit::Error::Execution {
            phase: "present",
            rc: 255,
            stderr: "denied".to_string(),
        };
        let report = ErrorReport::from(&err);
        assert_eq!(report.rc, Some(255));
        assert_eq!(report.stderr.as_deref(), Some("denied"));
    }

    #[test]
    fn test_error_report_omits_missing_fields() {
        let report = ErrorReport::from(&chseckit::Error::ToolNotFound);
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("\"rc\""));
        assert!(!json.contains("\"stderr\""));
    }
}
