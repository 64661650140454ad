//! Optional CLI configuration file.
//!
//! `config.toml` in the memoire config directory can set defaults that the
//! command-line flags override:
//!
//! ```toml
//! # ~/.config/memoire/config.toml
//! data_file = "/home/me/notes/data.txt"
//! assume_yes = false
//! verbose = true
//! ```
//!
//! A missing file yields the defaults; a malformed file is a hard error so
//! typos don't silently change confirmation behavior.

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Default data file, overridden by `-f`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Skip confirmation prompts by default, as if `-y` were passed.
    #[serde(default)]
    pub assume_yes: bool,

    /// Report skipped lines by default, as if `-v` were passed.
    #[serde(default)]
    pub verbose: bool,
}

/// Load `config.toml` from `config_dir`, or defaults if it doesn't exist.
pub fn load_cli_config(config_dir: &Path) -> io::Result<CliConfig> {
    let path = config_dir.join("config.toml");
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CliConfig::default()),
        Err(e) => return Err(e),
    };
    toml::from_str(&content).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid config '{}': {}", path.display(), e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_cli_config(dir.path()).unwrap();
        assert!(config.data_file.is_none());
        assert!(!config.assume_yes);
        assert!(!config.verbose);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "assume_yes = true\n").unwrap();
        let config = load_cli_config(dir.path()).unwrap();
        assert!(config.assume_yes);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn data_file_is_read_as_path() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "data_file = \"/tmp/notes.txt\"\n",
        )
        .unwrap();
        let config = load_cli_config(dir.path()).unwrap();
        assert_eq!(
            config.data_file.as_deref(),
            Some(Path::new("/tmp/notes.txt"))
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "asume_yes = true\n").unwrap();
        assert!(load_cli_config(dir.path()).is_err());
    }
}
