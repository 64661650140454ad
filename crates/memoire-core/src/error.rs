//! Error types for store operations.
//!
//! All variants are fatal to the current command. A missing store file on
//! load and unparseable lines are explicitly *not* errors: the former loads
//! an empty store, the latter are skipped and reported via
//! [`StoreEvent::LineSkipped`](crate::StoreEvent::LineSkipped). A declined
//! confirmation is a normal abort path
//! ([`CommandOutcome::Aborted`](crate::CommandOutcome::Aborted)), not an
//! error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a store command. Display text is the user-facing message.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file exists but could not be opened or read.
    #[error("Error opening '{path}': {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No entry matched the requested key.
    #[error("Key '{key}' not found")]
    NotFound { key: String },

    /// `update` requires the key to pre-exist.
    #[error("Key '{key}' not found. Use 'set' to create new entries.")]
    UpdateTargetMissing { key: String },

    /// Temp file creation, write, or rename failed. The original file on
    /// disk is untouched.
    #[error("Failed to save '{path}': {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_key() {
        let err = StoreError::NotFound {
            key: "mail".to_string(),
        };
        assert_eq!(err.to_string(), "Key 'mail' not found");
    }

    #[test]
    fn update_target_missing_suggests_set() {
        let err = StoreError::UpdateTargetMissing {
            key: "mail".to_string(),
        };
        assert!(err.to_string().contains("Use 'set'"));
    }

    #[test]
    fn access_error_carries_path_and_cause() {
        let err = StoreError::Access {
            path: PathBuf::from("/nope/data.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("/nope/data.txt"));
        assert!(text.contains("denied"));
    }
}
