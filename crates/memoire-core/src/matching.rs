//! Exact and fuzzy key lookup.
//!
//! Exact matching is case-sensitive string equality. Fuzzy matching is
//! ASCII-case-insensitive ordered-subsequence containment: every pattern
//! character must appear in the key in the same relative order, not
//! necessarily contiguously. There is no scoring: the first qualifying
//! entry in store order wins.

use crate::store::Store;

/// True if `pattern` is an ordered subsequence of `key`, ignoring ASCII
/// case.
///
/// The key is scanned once left-to-right, consuming one pattern character at
/// a time: `"lph"` matches `"alpha"`, `"hpl"` does not. The empty pattern
/// matches every key.
pub fn subsequence_match(key: &str, pattern: &str) -> bool {
    let mut key_chars = key.chars();
    for pc in pattern.chars() {
        if !key_chars.any(|kc| kc.eq_ignore_ascii_case(&pc)) {
            return false;
        }
    }
    true
}

impl Store {
    /// Index of the first entry whose key equals `key` exactly
    /// (case-sensitive).
    pub fn find_exact(&self, key: &str) -> Option<usize> {
        self.entries().iter().position(|e| e.key == key)
    }

    /// Exact match first; otherwise the first entry whose key contains
    /// `pattern` as a case-insensitive ordered subsequence.
    pub fn find_fuzzy(&self, pattern: &str) -> Option<usize> {
        self.find_exact(pattern).or_else(|| {
            self.entries()
                .iter()
                .position(|e| subsequence_match(&e.key, pattern))
        })
    }
}
