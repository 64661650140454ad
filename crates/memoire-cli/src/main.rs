// memoire-cli: command-line frontend for the memoire note store.
// Argument parsing, default path resolution, terminal prompts, exit codes.

mod cli;
mod config;
mod output;
mod paths;

use clap::Parser;
use memoire_core::{CommandOutcome, ExecutionFlags, execute_command};
use output::OutputHandler;
use std::process::ExitCode;

// Exit status contract: 0 success, 1 operational failure or declined
// confirmation, 2 usage errors (owned by clap).
fn main() -> ExitCode {
    let args = cli::Cli::parse();

    let file_config = match paths::config_dir() {
        Some(dir) => match config::load_cli_config(&dir) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::from(1);
            }
        },
        None => config::CliConfig::default(),
    };

    // Flags beat config file, config file beats built-in defaults
    let path = args
        .file
        .clone()
        .or(file_config.data_file)
        .unwrap_or_else(paths::default_data_path);
    let flags = ExecutionFlags {
        assume_yes: args.yes || file_config.assume_yes,
    };
    let handler = OutputHandler::new(args.verbose || file_config.verbose);
    let command = args.into_command();

    match execute_command(&path, &command, &flags, &handler) {
        Ok(CommandOutcome::Completed) => ExitCode::SUCCESS,
        Ok(CommandOutcome::Aborted) => {
            eprintln!("Aborted.");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}
