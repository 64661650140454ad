//! Terminal output handler.
//!
//! Results go to stdout, diagnostics to stderr. Skipped-line reports are
//! shown only in verbose mode; the fsync warning is always shown.
//! `confirm()` reads one line from stdin, so piped input (`printf y | …`)
//! works the same as an interactive terminal.

use memoire_core::{OutputSink, StoreEvent};
use std::io::{self, BufRead, Write};

/// CLI output handler implementing [`OutputSink`].
pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl OutputSink for OutputHandler {
    fn emit_result(&self, content: &str) {
        println!("{}", content);
    }

    fn emit_event(&self, event: StoreEvent) {
        match event {
            StoreEvent::LineSkipped {
                line_number,
                content,
                reason,
            } => {
                if self.verbose {
                    eprintln!(
                        "[WARN] line {}: skipping '{}' [{}]",
                        line_number,
                        content,
                        reason.describe()
                    );
                }
            }
            StoreEvent::SyncFailed { detail } => {
                eprintln!("[WARN] fsync failed: {}", detail);
            }
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N]: ", prompt);
        io::stderr().flush().ok();

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            return false;
        }
        matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
