//! memoire-core: storage and lookup engine for the memoire note store.
//!
//! The store is a single delimited text file, one `key:value` record per
//! line. Every invocation re-reads the whole file, applies exactly one
//! command against the in-memory [`Store`], and (for mutations) rewrites
//! the file atomically (temp file + rename).
//!
//! This crate owns the on-disk format, the match semantics, and the mutation
//! lifecycle. It performs no argument parsing and no environment access:
//! the binary hands it a resolved file path, a [`Command`], and an
//! [`OutputSink`] for results, diagnostics, and confirmation prompts.
//!
//! ```no_run
//! use memoire_core::{Command, ExecutionFlags, execute_command};
//! use memoire_core::output::OutputSink;
//! # struct Sink;
//! # impl OutputSink for Sink {
//! #     fn emit_result(&self, _: &str) {}
//! #     fn emit_event(&self, _: memoire_core::StoreEvent) {}
//! #     fn confirm(&self, _: &str) -> bool { true }
//! # }
//!
//! let sink = Sink;
//! let command = Command::Get { query: "mail".to_string() };
//! execute_command(
//!     std::path::Path::new("data.txt"),
//!     &command,
//!     &ExecutionFlags::default(),
//!     &sink,
//! )?;
//! # Ok::<(), memoire_core::StoreError>(())
//! ```

pub mod error;
pub mod execution;
pub mod input;
pub mod matching;
pub mod output;
pub mod safe_io;
pub mod store;

// Re-export commonly used types
pub use error::StoreError;
pub use execution::{CommandOutcome, execute_command};
pub use input::{Command, ExecutionFlags};
pub use output::{OutputSink, StoreEvent};
pub use store::{Entry, SkipReason, Store};
