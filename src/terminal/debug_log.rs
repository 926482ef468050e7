//! Log output setup.
//!
//! By default only warnings reach stderr (overridable with `RUST_LOG`).
//! With `--debug` everything at debug level is written to
//! `~/.pickmenu/debug.log` instead, so the menu drawing stays clean.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Get the debug log file path.
pub fn log_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pickmenu")
        .join("debug.log")
}

/// Install the global subscriber. Returns the log file path when debug
/// logging to a file was enabled.
pub fn init(debug: bool) -> io::Result<Option<PathBuf>> {
    if debug {
        let path = log_path();
        init_file(&path)?;
        Ok(Some(path))
    } else {
        init_stderr();
        Ok(None)
    }
}

fn init_stderr() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pickmenu=warn"));
    // A subscriber may already be installed (tests, embedding programs).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Log at debug level to `path`, truncating any previous log.
pub fn init_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("pickmenu=debug"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    tracing::info!(path = %path.display(), "debug log started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_under_dot_dir() {
        let path = log_path();
        assert!(path.ends_with(".pickmenu/debug.log"));
    }

    #[test]
    fn test_init_file_creates_parent_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("debug.log");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale contents").unwrap();

        init_file(&path).unwrap();

        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale contents"));
    }

    #[test]
    fn test_init_file_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("debug.log");
        init_file(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
    }
}
