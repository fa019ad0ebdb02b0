//! Structured logging setup.
//!
//! Logs never go to stdout: it belongs to the board and the prompts. Depending
//! on [`LoggerConfig`] the events are written to stderr, to a log file or to
//! both.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use anyhow::Context;
use tracing_subscriber::prelude::*;

use crate::config::LoggerConfig;

/// Name of the log file created inside [`LoggerConfig::file_location`].
pub const LOG_FILE_NAME: &str = "chess-console.log";

/// Log files written by this program, the current one and any rotated copies,
/// start with this prefix.
const LOG_FILE_STEM: &str = "chess-console";
const LOG_EXTENSION: &str = "log";

/// Installs the global subscriber.
///
/// # Errors
///
/// The log directory can not be created or opened, or a global subscriber is
/// already installed.
pub fn init(config: &LoggerConfig) -> anyhow::Result<()> {
    let stderr = config
        .stdout
        .then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    let mut pruned = 0;
    let file = match &config.file_location {
        Some(directory) => {
            fs::create_dir_all(directory)
                .with_context(|| format!("failed to create log directory {directory:?}"))?;
            pruned = prune_stale_logs(directory, config.file_max_age)
                .with_context(|| format!("failed to prune log directory {directory:?}"))?;
            let path = directory.join(LOG_FILE_NAME);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {path:?}"))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        },
        None => None,
    };

    tracing_subscriber::registry()
        .with(config.level)
        .with(stderr)
        .with(file)
        .try_init()
        .context("failed to install the logger")?;

    if pruned > 0 {
        tracing::debug!(pruned, "removed stale log files");
    }
    Ok(())
}

/// Removes `chess-console*.log` files in `directory` that were last modified
/// more than `max_age` ago and returns how many were removed. Files with
/// modification time in the future are kept, and so are files of other
/// programs sharing the directory.
///
/// # Errors
///
/// Propagates I/O errors from listing or removing files.
pub fn prune_stale_logs(directory: &Path, max_age: Duration) -> io::Result<usize> {
    let now = SystemTime::now();
    let mut pruned = 0;
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        if !is_own_log(&path) {
            continue;
        }
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let stale = now
            .duration_since(metadata.modified()?)
            .is_ok_and(|age| age > max_age);
        if stale {
            fs::remove_file(&path)?;
            pruned += 1;
        }
    }
    Ok(pruned)
}

fn is_own_log(path: &Path) -> bool {
    let has_stem = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(LOG_FILE_STEM));
    has_stem && path.extension().is_some_and(|extension| extension == LOG_EXTENSION)
}

#[cfg(test)]
mod test {
    use std::fs::File;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    fn scratch_directory(name: &str) -> PathBuf {
        let directory =
            std::env::temp_dir().join(format!("chess-console-{name}-{}", std::process::id()));
        if directory.exists() {
            fs::remove_dir_all(&directory).unwrap();
        }
        fs::create_dir_all(&directory).unwrap();
        directory
    }

    fn touch(path: &Path, age: Duration) {
        let file = File::create(path).unwrap();
        file.set_modified(SystemTime::now() - age).unwrap();
    }

    #[test]
    fn prune_old_logs() {
        let directory = scratch_directory("prune");
        touch(&directory.join(LOG_FILE_NAME), DAY * 30);
        touch(&directory.join("chess-console.2024-06-01.log"), DAY * 10);
        touch(&directory.join("chess-console-fresh.log"), DAY);
        touch(&directory.join("chess-console.txt"), DAY * 30);

        assert_eq!(prune_stale_logs(&directory, DAY * 7).unwrap(), 2);
        assert!(!directory.join(LOG_FILE_NAME).exists());
        assert!(!directory.join("chess-console.2024-06-01.log").exists());
        assert!(directory.join("chess-console-fresh.log").exists());
        assert!(directory.join("chess-console.txt").exists());

        fs::remove_dir_all(&directory).unwrap();
    }

    #[test]
    fn prune_keeps_logs_of_other_programs() {
        let directory = scratch_directory("prune-shared");
        touch(&directory.join("other.log"), DAY * 30);
        touch(&directory.join("nginx-access.log"), DAY * 30);
        touch(&directory.join(LOG_FILE_NAME), DAY * 30);

        assert_eq!(prune_stale_logs(&directory, DAY * 7).unwrap(), 1);
        assert!(directory.join("other.log").exists());
        assert!(directory.join("nginx-access.log").exists());
        assert!(!directory.join(LOG_FILE_NAME).exists());

        fs::remove_dir_all(&directory).unwrap();
    }

    #[test]
    fn prune_ignores_directories() {
        let directory = scratch_directory("prune-dirs");
        fs::create_dir(directory.join("chess-console-archive.log")).unwrap();

        assert_eq!(prune_stale_logs(&directory, Duration::ZERO).unwrap(), 0);
        assert!(directory.join("chess-console-archive.log").is_dir());

        fs::remove_dir_all(&directory).unwrap();
    }

    #[test]
    fn prune_missing_directory() {
        assert!(prune_stale_logs(Path::new("/nonexistent/chess-console"), DAY).is_err());
    }
}
