use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stanzactl")]
#[command(version)]
#[command(about = "Manage AIX stanza configuration files via chsec", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add or remove stanza attributes in a target file
    Apply(ApplyArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
pub struct ApplyArgs {
    /// Path to the stanza file
    #[arg(short, long, visible_alias = "dest")]
    pub path: PathBuf,

    /// Name of the stanza to edit
    #[arg(short, long)]
    pub stanza: String,

    /// Attributes as key=value pairs, comma separated.
    /// With --state present, "key=" (empty value) removes that single attribute
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub options: Vec<String>,

    /// Desired state of the listed attributes
    #[arg(long, value_enum, default_value_t = StateArg::Present)]
    pub state: StateArg,

    /// Let chsec create the file and stanza when missing
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub create: bool,

    /// Owner (user name or uid) to set on the file after editing
    #[arg(long)]
    pub owner: Option<String>,

    /// Group (group name or gid) to set on the file after editing
    #[arg(long)]
    pub group: Option<String>,

    /// Permission bits to set on the file after editing, octal (e.g. 0644)
    #[arg(long)]
    pub mode: Option<String>,

    /// Emit the result as a JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    Present,
    Absent,
}

impl From<StateArg> for chseckit::State {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::Present => Self::Present,
            StateArg::Absent => Self::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_options_split_on_commas_in_order() {
        let cli = parse(&[
            "stanzactl",
            "apply",
            "--path",
            "/etc/security/user",
            "--stanza",
            "ldapuser",
            "--options",
            "SYSTEM=LDAP,registry=LDAP",
        ]);
        let Command::Apply(args) = cli.command else {
            panic!("expected apply");
        };
        assert_eq!(args.options, ["SYSTEM=LDAP", "registry=LDAP"]);
        assert_eq!(args.state, StateArg::Present);
        assert!(args.create);
    }

    #[test]
    fn test_dest_alias_and_absent_state() {
        let cli = parse(&[
            "stanzactl",
            "apply",
            "--dest",
            "/etc/security/login.cfg",
            "--stanza",
            "usw",
            "--options",
            "shells=/bin/ksh",
            "--state",
            "absent",
            "--create",
            "false",
        ]);
        let Command::Apply(args) = cli.command else {
            panic!("expected apply");
        };
        assert_eq!(args.path, PathBuf::from("/etc/security/login.cfg"));
        assert_eq!(args.state, StateArg::Absent);
        assert!(!args.create);
    }

    #[test]
    fn test_options_are_required() {
        let result = Cli::try_parse_from([
            "stanzactl",
            "apply",
            "--path",
            "/etc/security/user",
            "--stanza",
            "ldapuser",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_state_arg_converts() {
        assert_eq!(chseckit::State::from(StateArg::Present), chseckit::State::Present);
        assert_eq!(chseckit::State::from(StateArg::Absent), chseckit::State::Absent);
    }
}
