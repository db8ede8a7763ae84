//! hydrobot-server/src/logging.rs
//!
//! Tracing setup: stderr plus a size-rotated plain-text log file.

use std::path::Path;

use anyhow::Context;
use file_rotate::compression::Compression;
use file_rotate::suffix::AppendCount;
use file_rotate::{ContentLimit, FileRotate};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Rotate once the active file reaches this size.
pub const LOG_MAX_BYTES: usize = 10 * 1024 * 1024;
/// Rotated files kept as `<file>.1` .. `<file>.5`; older ones are deleted.
pub const LOG_BACKUPS: usize = 5;

pub fn rotating_writer(path: &Path, max_bytes: usize, backups: usize) -> FileRotate<AppendCount> {
    FileRotate::new(
        path,
        AppendCount::new(backups),
        ContentLimit::Bytes(max_bytes),
        Compression::None,
        #[cfg(unix)]
        None,
    )
}

/// Installs the global subscriber. The returned guard flushes the file
/// writer on drop and must be held for the life of the program.
pub fn init_tracing(log_level: &str, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .with_context(|| format!("invalid log level '{log_level}'"))?;

    let (file_layer, guard) = match log_file {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("cannot create log directory {}", dir.display()))?;
            }
            let (writer, guard) =
                tracing_appender::non_blocking(rotating_writer(path, LOG_MAX_BYTES, LOG_BACKUPS));
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("failed to set global subscriber")?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_rotates_by_size_and_caps_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");

        let mut writer = rotating_writer(&path, 64, 2);
        for i in 0..10 {
            writeln!(writer, "line {i:02} {}", "x".repeat(40)).unwrap();
        }
        writer.flush().unwrap();

        assert!(path.exists());
        assert!(dir.path().join("bot.log.1").exists());
        assert!(dir.path().join("bot.log.2").exists());
        assert!(!dir.path().join("bot.log.3").exists());

        let active = std::fs::metadata(&path).unwrap().len();
        assert!(active <= 64, "active file is {active} bytes");
    }
}
