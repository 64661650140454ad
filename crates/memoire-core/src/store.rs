//! The on-disk record store: one `key:value` record per line.
//!
//! [`Store::load`] reads the whole file into an ordered collection of
//! [`Entry`] values, skipping lines that cannot be parsed (no separator, or
//! an empty key after trimming). Skips are recorded, not fatal. A missing
//! file loads as an empty store. [`Store::save`] rewrites the file atomically
//! via [`safe_io`](crate::safe_io).

use crate::error::StoreError;
use crate::safe_io::{SyncStatus, TempFile};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One key-value pair. Keys are non-empty after trimming; values may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Why a line was dropped during load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The line contains no `:` separator.
    NoSeparator,
    /// The key is empty after trimming.
    EmptyKey,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::NoSeparator => "No Separator ':'",
            SkipReason::EmptyKey => "Empty key",
        }
    }
}

/// A line dropped during the most recent [`Store::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line_number: usize,
    /// The raw line content, line terminator stripped.
    pub content: String,
    pub reason: SkipReason,
}

/// The full ordered collection of entries for one file.
///
/// Insertion order is preserved across load/save cycles. Duplicate keys in a
/// hand-edited file load as-is; lookups and in-place mutations see the first
/// occurrence in file order.
#[derive(Debug, Default)]
pub struct Store {
    entries: Vec<Entry>,
    skipped: Vec<SkippedLine>,
}

/// Trim leading and trailing ASCII whitespace.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Parse one physical line (terminator already stripped) into an entry.
///
/// The first `:` splits key from value, so the value may itself contain
/// colons. Both halves are trimmed of surrounding ASCII whitespace.
fn parse_line(line: &str) -> Result<Entry, SkipReason> {
    let (raw_key, raw_value) = line.split_once(':').ok_or(SkipReason::NoSeparator)?;
    let key = trim(raw_key);
    if key.is_empty() {
        return Err(SkipReason::EmptyKey);
    }
    Ok(Entry::new(key, trim(raw_value)))
}

impl Store {
    /// Load a store from `path`.
    ///
    /// A missing file is not an error: it loads as an empty store. Any other
    /// open or read failure is [`StoreError::Access`]. Unparseable lines are
    /// skipped and recorded in [`Store::skipped`].
    pub fn load(path: &Path) -> Result<Store, StoreError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Store::default()),
            Err(e) => {
                return Err(StoreError::Access {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let reader = BufReader::new(file);
        let mut store = Store::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| StoreError::Access {
                path: path.to_path_buf(),
                source: e,
            })?;
            // Tolerate both Unix and Windows line endings, in any combination
            let line = line.trim_end_matches(['\n', '\r']);
            match parse_line(line) {
                Ok(entry) => store.entries.push(entry),
                Err(reason) => store.skipped.push(SkippedLine {
                    line_number: line_num + 1,
                    content: line.to_string(),
                    reason,
                }),
            }
        }

        Ok(store)
    }

    /// Serialize every entry as `key:value\n` in store order.
    ///
    /// An empty value renders as `key:`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.key);
            out.push(':');
            out.push_str(&entry.value);
            out.push('\n');
        }
        out
    }

    /// Atomically rewrite `path` with the current entries.
    ///
    /// Either the file is fully replaced or it is left exactly as it was;
    /// see [`TempFile`] for the temp-then-rename protocol. An fsync failure
    /// is reported via [`SyncStatus::SyncFailed`] rather than failing the
    /// save.
    pub fn save(&self, path: &Path) -> Result<SyncStatus, StoreError> {
        let persistence = |source: io::Error| StoreError::Persistence {
            path: path.to_path_buf(),
            source,
        };
        let mut tmp = TempFile::create_in(path).map_err(persistence)?;
        tmp.write_all(self.render().as_bytes()).map_err(persistence)?;
        tmp.commit().map_err(persistence)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Lines dropped by the most recent load.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry at the end of the store.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Overwrite the value at `index` in place, keeping the entry's position.
    pub fn set_value(&mut self, index: usize, value: String) {
        self.entries[index].value = value;
    }

    /// Remove the entry at `index`, shifting subsequent entries left.
    pub fn remove(&mut self, index: usize) -> Entry {
        self.entries.remove(index)
    }
}

impl FromIterator<Entry> for Store {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Store {
            entries: iter.into_iter().collect(),
            skipped: Vec::new(),
        }
    }
}
