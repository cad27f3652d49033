//! Logging init: `navi.log` beside the store in the XDG state dir, or stderr.
//!
//! The filter comes from `NAVI_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
//! Extension code and stored page content are never logged; only names,
//! domains and command labels are.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Environment variable read before `RUST_LOG`.
pub const LOG_ENV: &str = "NAVI_LOG";

/// Debug output for both navi crates, info for everything else.
pub const DEFAULT_FILTER: &str = "info,navi_core=debug,navi_cli=debug";

/// Pick filter directives: `NAVI_LOG` wins over `RUST_LOG`; blank values are skipped.
pub fn filter_directives(navi_log: Option<&str>, rust_log: Option<&str>) -> String {
    [navi_log, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|d| !d.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

fn env_filter() -> EnvFilter {
    let navi_log = std::env::var(LOG_ENV).ok();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(navi_log.as_deref(), rust_log.as_deref());
    EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("navi: ignoring log filter `{directives}`: {e}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// `~/.local/state/navi/navi.log`.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("navi")?;
    Ok(xdg_dirs.get_state_home().join("navi.log"))
}

/// Each event clones the file handle; a failed clone writes that event to stderr.
struct SharedLogFile(fs::File);

enum LogWriter {
    File(fs::File),
    Stderr,
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::File(f) => f.write(buf),
            LogWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::File(f) => f.flush(),
            LogWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogWriter::File)
            .unwrap_or(LogWriter::Stderr)
    }
}

/// Initialize logging to [`log_path`]. Returns Err when the state dir or the
/// file cannot be opened, so the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create dir: {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(SharedLogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "navi logging to {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only. Safe to call when a subscriber is already set.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navi_log_wins_over_rust_log() {
        assert_eq!(filter_directives(Some("warn"), Some("trace")), "warn");
        assert_eq!(filter_directives(None, Some("trace")), "trace");
    }

    #[test]
    fn blank_values_fall_through_to_default() {
        assert_eq!(filter_directives(Some("  "), None), DEFAULT_FILTER);
        assert_eq!(filter_directives(None, None), DEFAULT_FILTER);
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
