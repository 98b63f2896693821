use std::path::PathBuf;
use std::str::FromStr;

use chatter::{OutputConfig, Verb};
use clap::{Parser, ValueEnum};

/// Print a message through the quiet/verbose output policy
#[derive(Parser, Debug)]
#[command(name = "chatter", version, about, long_about = None)]
pub struct Cli {
    /// Suppress all output
    #[arg(short, long)]
    pub quiet: bool,

    /// Show babble and caution messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Flush the stream after writing
    #[arg(long)]
    pub sync: bool,

    /// Don't append a line break
    #[arg(short = 'n', long = "no-newline", action = clap::ArgAction::SetFalse, default_value_t = true)]
    pub newline: bool,

    /// TOML file with an `[output]` table
    ///
    /// Values from the file are overridden by `CHATTER_*` environment
    /// variables, which are overridden by flags.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How to emit the message
    #[arg(value_enum)]
    pub action: Action,

    /// Message words, joined with spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Print to stdout unless quiet
    Mention,
    /// Print to stderr unless quiet
    Warn,
    /// Print to stdout when verbose
    Babble,
    /// Print to stderr when verbose
    Caution,
    /// Report to stderr unless quiet, then exit with status 1
    Die,
}

impl Action {
    /// The output verb, or `None` for `die`
    pub fn verb(self) -> Option<Verb> {
        let value = self.to_possible_value()?;
        Verb::from_str(value.get_name()).ok()
    }
}

impl Cli {
    /// Switches given on the command line; absent flags stay unset so lower
    /// layers show through
    pub fn overrides(&self) -> OutputConfig {
        OutputConfig {
            quiet: self.quiet.then_some(true),
            verbose: self.verbose.then_some(true),
            sync: self.sync.then_some(true),
            auto_newline: (!self.newline).then_some(false),
        }
    }

    pub fn message(&self) -> String {
        self.words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_only_set_given_flags() {
        let cli = Cli::parse_from(["chatter", "-v", "mention", "hi"]);
        assert_eq!(
            cli.overrides(),
            OutputConfig {
                verbose: Some(true),
                ..Default::default()
            }
        );

        let cli = Cli::parse_from(["chatter", "-q", "-n", "--sync", "warn"]);
        assert_eq!(
            cli.overrides(),
            OutputConfig {
                quiet: Some(true),
                verbose: None,
                sync: Some(true),
                auto_newline: Some(false),
            }
        );
    }

    #[test]
    fn test_words_keep_hyphens() {
        let cli = Cli::parse_from(["chatter", "caution", "disk", "-", "90%", "--full"]);
        assert_eq!(cli.action, Action::Caution);
        assert_eq!(cli.message(), "disk - 90% --full");
    }

    #[test]
    fn test_die_has_no_verb() {
        assert_eq!(Action::Die.verb(), None);
    }

    #[test]
    fn test_actions_map_to_verbs_by_name() {
        assert_eq!(Action::Mention.verb(), Some(Verb::Mention));
        assert_eq!(Action::Warn.verb(), Some(Verb::Warn));
        assert_eq!(Action::Babble.verb(), Some(Verb::Babble));
        assert_eq!(Action::Caution.verb(), Some(Verb::Caution));
    }
}
