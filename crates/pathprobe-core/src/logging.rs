//! Logging init: append to a file under the XDG state dir, or fall back to stderr.
//!
//! Stdout is the display region for `pathprobe watch`, so nothing here writes to it.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparseable.
const DEFAULT_FILTER: &str = "info,pathprobe=debug,pathprobe_core=debug";

/// `~/.local/state/pathprobe/pathprobe.log`
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pathprobe")?;
    Ok(xdg_dirs
        .get_state_home()
        .join("pathprobe")
        .join("pathprobe.log"))
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log dir: {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file: {}", path.display()))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to [`log_file_path`].
///
/// Returns Err if the file cannot be opened or a subscriber is already set;
/// the caller should then use [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!("pathprobe logging initialized at {}", path.display());
    Ok(())
}

/// Installs a stderr-only subscriber. Never fails; a second install is reported and ignored.
pub fn init_logging_stderr() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
    if let Err(e) = installed {
        eprintln!("pathprobe: logging unavailable: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn open_log_file_creates_dirs_and_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("state").join("pathprobe.log");

        let mut first = open_log_file(&path).unwrap();
        first.write_all(b"one\n").unwrap();
        drop(first);
        let mut second = open_log_file(&path).unwrap();
        second.write_all(b"two\n").unwrap();
        drop(second);

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
