//! chsec command-line construction.
//!
//! The argument shape `-f <path> -s <stanza> [-a key=value]...` is a
//! contract with the AIX chsec binary and must be preserved exactly.

use crate::types::{StanzaRequest, State};

/// Build the chsec argument vector for a request.
///
/// Options are appended in input order; chsec honors repetition order
/// when the same key appears more than once. For [`State::Absent`] every
/// option has its value blanked, which chsec interprets as deletion.
pub fn build_args(request: &StanzaRequest) -> Vec<String> {
    let mut args = vec![
        "-f".to_string(),
        request.path.display().to_string(),
        "-s".to_string(),
        request.stanza.clone(),
    ];

    for option in &request.options {
        args.push("-a".to_string());
        args.push(match request.state {
            State::Present => option.clone(),
            State::Absent => blank_value(option),
        });
    }

    args
}

/// Truncate an option to everything up to and including its first `=`.
///
/// chsec overloads "assign empty value" to mean "delete attribute", so
/// `SYSTEM=LDAP` becomes `SYSTEM=`. An option without `=` passes through
/// unmodified.
fn blank_value(option: &str) -> String {
    match option.find('=') {
        Some(pos) => option[..=pos].to_string(),
        None => option.to_string(),
    }
}
