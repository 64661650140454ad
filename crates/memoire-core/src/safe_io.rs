//! Atomic file replacement: temp file + rename, as a guarded resource.
//!
//! [`TempFile`] owns a uniquely-named temp file created next to its target
//! (same directory, so the final rename stays on one filesystem). Content is
//! written to the temp file and promoted onto the target only by an explicit
//! [`TempFile::commit`]; every other exit path (error, early return, panic)
//! removes the temp file on drop and leaves the target untouched. A reader of
//! the target therefore observes either the fully-old or fully-new content,
//! never a partial write.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Distinguishes sibling temp files of concurrent guards in one process.
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Whether the committed data was forced to stable storage.
///
/// An fsync failure weakens durability against power loss but not atomicity
/// (the rename still happens), so it is reported rather than treated as a
/// hard failure.
#[derive(Debug)]
pub enum SyncStatus {
    Synced,
    SyncFailed(io::Error),
}

impl SyncStatus {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncStatus::Synced)
    }
}

/// A pending atomic replacement of one target file.
///
/// Created by [`TempFile::create_in`], filled via [`TempFile::write_all`],
/// promoted by [`TempFile::commit`]. Dropping an uncommitted guard removes
/// the temp file.
pub struct TempFile {
    path: PathBuf,
    target: PathBuf,
    writer: Option<BufWriter<File>>,
    committed: bool,
}

impl TempFile {
    /// Create a uniquely-named temp file in the directory of `target`.
    ///
    /// The parent directory must already exist; this never creates
    /// directories.
    pub fn create_in(target: &Path) -> io::Result<TempFile> {
        let name = target.file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "target has no file name")
        })?;
        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let pid = std::process::id();
        loop {
            let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
            let path = dir.join(format!(".{}.{}.{}.tmp", name.to_string_lossy(), pid, seq));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    return Ok(TempFile {
                        path,
                        target: target.to_path_buf(),
                        writer: Some(BufWriter::new(file)),
                        committed: false,
                    });
                }
                // Stale leftover with the same name: bump the sequence
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Write a chunk to the temp file.
    pub fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.write_all(buf),
            None => Err(io::Error::other("temp file already committed")),
        }
    }

    /// Flush, force to stable storage, and atomically rename onto the
    /// target.
    ///
    /// On any error the guard is dropped uncommitted and the temp file is
    /// removed; the target keeps its prior content.
    pub fn commit(mut self) -> io::Result<SyncStatus> {
        let status = match self.writer.take() {
            Some(mut writer) => {
                writer.flush()?;
                match writer.get_ref().sync_data() {
                    Ok(()) => SyncStatus::Synced,
                    Err(e) => SyncStatus::SyncFailed(e),
                }
                // writer (and the open handle) drops here, before the rename
            }
            None => return Err(io::Error::other("temp file already committed")),
        };
        fs::rename(&self.path, &self.target)?;
        self.committed = true;
        Ok(status)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.committed {
            // Close the handle before unlinking
            self.writer.take();
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_residue(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "tmp"))
            .collect()
    }

    #[test]
    fn commit_replaces_target_content() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("data.txt");
        fs::write(&target, "old").unwrap();

        let mut tmp = TempFile::create_in(&target).unwrap();
        tmp.write_all(b"new").unwrap();
        tmp.commit().unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        assert!(temp_residue(dir.path()).is_empty());
    }

    #[test]
    fn commit_creates_target_when_absent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("data.txt");

        let mut tmp = TempFile::create_in(&target).unwrap();
        tmp.write_all(b"content").unwrap();
        tmp.commit().unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "content");
    }

    #[test]
    fn dropping_uncommitted_guard_leaves_target_byte_identical() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("data.txt");
        fs::write(&target, "original content").unwrap();

        {
            let mut tmp = TempFile::create_in(&target).unwrap();
            // Simulate an interrupted save: partial write, then the guard
            // goes out of scope without commit()
            tmp.write_all(b"part").unwrap();
        }

        assert_eq!(fs::read_to_string(&target).unwrap(), "original content");
        assert!(temp_residue(dir.path()).is_empty(), "temp file must be removed");
    }

    #[test]
    fn create_in_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("data.txt");
        assert!(TempFile::create_in(&target).is_err());
    }

    #[test]
    fn concurrent_guards_get_distinct_temp_names() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("data.txt");

        let mut a = TempFile::create_in(&target).unwrap();
        let mut b = TempFile::create_in(&target).unwrap();
        a.write_all(b"a").unwrap();
        b.write_all(b"b").unwrap();
        assert_eq!(temp_residue(dir.path()).len(), 2);

        a.commit().unwrap();
        b.commit().unwrap();
        // Last rename wins
        assert_eq!(fs::read_to_string(&target).unwrap(), "b");
        assert!(temp_residue(dir.path()).is_empty());
    }

    #[test]
    fn relative_target_without_parent_uses_current_dir() {
        // create_in must not panic on a bare file name; exercise the
        // parent-fallback path with a name unlikely to collide.
        let name = format!("memoire-safe-io-test-{}.txt", std::process::id());
        let target = PathBuf::from(&name);
        let mut tmp = TempFile::create_in(&target).unwrap();
        tmp.write_all(b"x").unwrap();
        tmp.commit().unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "x");
        fs::remove_file(&target).unwrap();
    }
}
