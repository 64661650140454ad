//! CLI argument parsing with clap.
//!
//! Parses the command surface and converts it to the core [`Command`] type.
//! Usage errors (unknown subcommand, missing arguments) are clap's to
//! report; it exits with status 2 for them.

use clap::{Parser, Subcommand};
use memoire_core::Command;
use std::path::PathBuf;

/// memoire - a personal key-value note store in a single text file
#[derive(Parser, Debug)]
#[command(
    name = "memoire",
    version,
    about = "A personal key-value note store backed by a single text file",
    long_about = "Stores key:value notes in a plain text file, one record per line.\n\
                  Without a subcommand, lists all entries. Mutations rewrite the file\n\
                  atomically and prompt before overwriting or deleting."
)]
pub struct Cli {
    /// Data file to use (default: the memoire config directory)
    #[arg(short = 'f', long = "file", value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// Assume yes for confirmations
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Report lines skipped while loading the data file
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Look up a key (exact match first, then fuzzy)
    Get {
        /// Key or fuzzy pattern to look up
        key: String,
    },
    /// Create a key, or overwrite an existing one (with confirmation)
    Set {
        key: String,
        /// Value; multiple words are joined with single spaces
        #[arg(required = true, num_args = 1..)]
        value: Vec<String>,
    },
    /// Overwrite the value of an existing key only
    Update {
        key: String,
        /// New value; multiple words are joined with single spaces
        #[arg(required = true, num_args = 1..)]
        value: Vec<String>,
    },
    /// Delete a key (with confirmation)
    Delete {
        key: String,
    },
}

impl Cli {
    /// Convert the parsed arguments to the core command.
    ///
    /// No subcommand means list mode. Trailing value words are joined with
    /// single spaces, so multi-word values need no quoting.
    pub fn into_command(self) -> Command {
        match self.command {
            None => Command::List,
            Some(CliCommand::Get { key }) => Command::Get { query: key },
            Some(CliCommand::Set { key, value }) => Command::Set {
                key,
                value: value.join(" "),
            },
            Some(CliCommand::Update { key, value }) => Command::Update {
                key,
                value: value.join(" "),
            },
            Some(CliCommand::Delete { key }) => Command::Delete { key },
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
    fn no_subcommand_is_list() {
        let cli = parse(&["memoire"]);
        assert_eq!(cli.into_command(), Command::List);
    }

    #[test]
    fn get_takes_one_key() {
        let cli = parse(&["memoire", "get", "mail"]);
        assert_eq!(
            cli.into_command(),
            Command::Get {
                query: "mail".to_string()
            }
        );
    }

    #[test]
    fn set_joins_value_words_with_single_spaces() {
        let cli = parse(&["memoire", "set", "greeting", "hello", "world"]);
        assert_eq!(
            cli.into_command(),
            Command::Set {
                key: "greeting".to_string(),
                value: "hello world".to_string()
            }
        );
    }

    #[test]
    fn update_joins_value_words() {
        let cli = parse(&["memoire", "update", "k", "a", "b", "c"]);
        assert_eq!(
            cli.into_command(),
            Command::Update {
                key: "k".to_string(),
                value: "a b c".to_string()
            }
        );
    }

    #[test]
    fn set_without_value_is_a_usage_error() {
        assert!(Cli::try_parse_from(["memoire", "set", "key"]).is_err());
    }

    #[test]
    fn delete_takes_one_key() {
        let cli = parse(&["memoire", "delete", "mail"]);
        assert_eq!(
            cli.into_command(),
            Command::Delete {
                key: "mail".to_string()
            }
        );
    }

    #[test]
    fn flags_parse_before_and_after_subcommand() {
        let cli = parse(&["memoire", "-y", "-f", "/tmp/x.txt", "get", "k"]);
        assert!(cli.yes);
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("/tmp/x.txt")));

        // global flags are accepted after the subcommand too
        let cli = parse(&["memoire", "get", "k", "-v"]);
        assert!(cli.verbose);
    }
}
