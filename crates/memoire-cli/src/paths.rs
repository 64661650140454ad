//! Default storage-path resolution.
//!
//! Core takes the data-file path as an explicit parameter; resolving a
//! default from the environment lives here, in the binary.

use std::path::PathBuf;

/// The memoire config directory.
///
/// `MEMOIRE_CONFIG_DIR` overrides everything (useful for tests and
/// sandboxes); otherwise `$XDG_CONFIG_HOME/memoire` or `~/.config/memoire`.
/// `None` when no home directory resolves.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("MEMOIRE_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs_next::config_dir().map(|dir| dir.join("memoire"))
}

/// Default data file: `<config_dir>/data.txt`, created-directory permitting,
/// else `./data.txt`.
///
/// The directory is created on demand; failure to create it is a warning,
/// not an error, and the path is still returned (the save will report the
/// real failure if it comes to that).
pub fn default_data_path() -> PathBuf {
    match config_dir() {
        Some(dir) => {
            if !dir.exists() {
                if let Err(e) = std::fs::create_dir_all(&dir) {
                    eprintln!(
                        "[WARN] Could not create config directory '{}': {}",
                        dir.display(),
                        e
                    );
                }
            }
            dir.join("data.txt")
        }
        None => PathBuf::from("./data.txt"),
    }
}
