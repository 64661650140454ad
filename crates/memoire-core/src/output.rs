//! Output abstraction for command results, diagnostics, and confirmations.
//!
//! Core emits results and typed events through an [`OutputSink`]; clients
//! decide where each goes and which events to display. The CLI sends results
//! to stdout, events to stderr, and answers [`OutputSink::confirm`] with an
//! interactive `[y/N]` prompt.

use crate::store::SkipReason;

/// Diagnostic events emitted on the command path.
///
/// Core emits all variants unconditionally; clients decide which to display.
#[derive(Debug)]
pub enum StoreEvent {
    /// A line was dropped during load (verbose-tier).
    LineSkipped {
        line_number: usize,
        content: String,
        reason: SkipReason,
    },
    /// The save completed but fsync failed. Durability against power loss
    /// is weakened, atomicity is not. Always worth showing.
    SyncFailed { detail: String },
}

/// How command results and diagnostics are presented.
pub trait OutputSink {
    /// Emit a result line (the primary output of a command).
    fn emit_result(&self, content: &str);

    /// Emit a diagnostic event. Clients filter and format as appropriate.
    fn emit_event(&self, event: StoreEvent);

    /// Ask the user to confirm a destructive change. Returns true if
    /// confirmed.
    fn confirm(&self, prompt: &str) -> bool;
}

/// A capturing sink for tests. Collects results and events for assertions.
#[cfg(test)]
pub(crate) struct CaptureSink {
    pub results: std::cell::RefCell<Vec<String>>,
    pub events: std::cell::RefCell<Vec<StoreEvent>>,
    /// Return value for `confirm()`. Defaults to false.
    pub confirm_response: bool,
}

#[cfg(test)]
impl CaptureSink {
    pub fn new() -> Self {
        Self {
            results: std::cell::RefCell::new(vec![]),
            events: std::cell::RefCell::new(vec![]),
            confirm_response: false,
        }
    }

    pub fn confirming() -> Self {
        Self {
            confirm_response: true,
            ..Self::new()
        }
    }
}

#[cfg(test)]
impl OutputSink for CaptureSink {
    fn emit_result(&self, content: &str) {
        self.results.borrow_mut().push(content.to_string());
    }

    fn emit_event(&self, event: StoreEvent) {
        self.events.borrow_mut().push(event);
    }

    fn confirm(&self, _: &str) -> bool {
        self.confirm_response
    }
}
