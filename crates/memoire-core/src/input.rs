//! Core input types: what operation to perform and how.
//!
//! The binary owns argument parsing; it hands core a fully-formed
//! [`Command`] (multi-word values already joined with single spaces) plus
//! [`ExecutionFlags`].

/// What operation to perform (one per invocation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every entry in store order (the default command).
    List,
    /// Exact-then-fuzzy lookup, print the matching entry.
    Get { query: String },
    /// Create the key, or overwrite its value in place after confirmation.
    Set { key: String, value: String },
    /// Overwrite the value of an existing key; fails if the key is absent.
    Update { key: String, value: String },
    /// Remove an existing key after confirmation.
    Delete { key: String },
}

/// Per-invocation command modifiers.
#[derive(Debug, Clone, Default)]
pub struct ExecutionFlags {
    /// Skip confirmation prompts entirely (`-y`).
    pub assume_yes: bool,
}
