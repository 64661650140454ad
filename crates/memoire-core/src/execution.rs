//! Command execution: load, dispatch, confirm, mutate, persist.
//!
//! [`execute_command`] handles the full lifecycle of one invocation:
//! load the store from disk, dispatch the command, ask the sink for
//! confirmation before destructive changes, and atomically save. Every
//! failure (and every declined confirmation) leaves the on-disk file exactly
//! as it was before the command ran.

use crate::error::StoreError;
use crate::input::{Command, ExecutionFlags};
use crate::output::{OutputSink, StoreEvent};
use crate::safe_io::SyncStatus;
use crate::store::{Entry, Store};
use std::path::Path;

/// How the command ended, for exit-status mapping by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Completed,
    /// The user declined a confirmation prompt. Nothing was written.
    Aborted,
}

/// Execute one command against the store at `path`.
///
/// Reads emit their output through `output`; mutations persist atomically
/// and emit `OK`. Skipped lines from the load are reported as
/// [`StoreEvent::LineSkipped`] before the command runs.
pub fn execute_command(
    path: &Path,
    command: &Command,
    flags: &ExecutionFlags,
    output: &dyn OutputSink,
) -> Result<CommandOutcome, StoreError> {
    let mut store = Store::load(path)?;
    for skip in store.skipped() {
        output.emit_event(StoreEvent::LineSkipped {
            line_number: skip.line_number,
            content: skip.content.clone(),
            reason: skip.reason,
        });
    }

    match command {
        Command::List => {
            for entry in store.entries() {
                output.emit_result(&format!("{}:{}", entry.key, entry.value));
            }
            Ok(CommandOutcome::Completed)
        }

        Command::Get { query } => {
            let index = store.find_fuzzy(query).ok_or_else(|| StoreError::NotFound {
                key: query.clone(),
            })?;
            let entry = &store.entries()[index];
            output.emit_result(&format!("{}:{}", entry.key, entry.value));
            Ok(CommandOutcome::Completed)
        }

        Command::Set { key, value } => {
            match store.find_exact(key) {
                Some(index) => {
                    let old = &store.entries()[index].value;
                    let prompt = format!(
                        "Key '{}' exists.\nOld value: {}\nNew value: {}\nConfirm overwrite?",
                        key, old, value
                    );
                    if !confirmed(flags, output, &prompt) {
                        return Ok(CommandOutcome::Aborted);
                    }
                    store.set_value(index, value.clone());
                }
                None => store.push(Entry::new(key.clone(), value.clone())),
            }
            persist(&store, path, output)?;
            output.emit_result("OK");
            Ok(CommandOutcome::Completed)
        }

        Command::Update { key, value } => {
            let index = store
                .find_exact(key)
                .ok_or_else(|| StoreError::UpdateTargetMissing { key: key.clone() })?;
            let old = &store.entries()[index].value;
            let prompt = format!(
                "Update key '{}'?\nOld value: {}\nNew value: {}\nConfirm update?",
                key, old, value
            );
            if !confirmed(flags, output, &prompt) {
                return Ok(CommandOutcome::Aborted);
            }
            store.set_value(index, value.clone());
            persist(&store, path, output)?;
            output.emit_result("OK");
            Ok(CommandOutcome::Completed)
        }

        Command::Delete { key } => {
            let index = store
                .find_exact(key)
                .ok_or_else(|| StoreError::NotFound { key: key.clone() })?;
            let prompt = format!(
                "Delete key '{}'?\nValue: {}\nConfirm delete?",
                key,
                store.entries()[index].value
            );
            if !confirmed(flags, output, &prompt) {
                return Ok(CommandOutcome::Aborted);
            }
            store.remove(index);
            persist(&store, path, output)?;
            output.emit_result("OK");
            Ok(CommandOutcome::Completed)
        }
    }
}

fn confirmed(flags: &ExecutionFlags, output: &dyn OutputSink, prompt: &str) -> bool {
    flags.assume_yes || output.confirm(prompt)
}

/// Save the store, downgrading an fsync failure to a diagnostic event.
fn persist(store: &Store, path: &Path, output: &dyn OutputSink) -> Result<(), StoreError> {
    if let SyncStatus::SyncFailed(e) = store.save(path)? {
        output.emit_event(StoreEvent::SyncFailed {
            detail: e.to_string(),
        });
    }
    Ok(())
}
