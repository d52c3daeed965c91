//! File logging for the terminal game.
//!
//! The game owns the terminal, so logs go to a file only. `RUST_LOG`
//! controls the filter (default `info`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE: &str = "tui-2048.log";

/// Install the global subscriber writing to `log_dir/tui-2048.log`.
///
/// Keep the returned guard alive for the whole run; dropping it flushes
/// and stops the writer thread.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(log_file = %log_dir.join(LOG_FILE).display(), "logging initialized");
    Ok(guard)
}

/// Platform-specific log directory.
pub fn default_log_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = PathBuf::from(home);
            path.push("Library");
            path.push("Caches");
            path.push("tui-2048");
            path.push("logs");
            return path;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            let mut path = PathBuf::from(xdg_cache);
            path.push("tui-2048");
            path.push("logs");
            return path;
        } else if let Some(home) = std::env::var_os("HOME") {
            let mut path = PathBuf::from(home);
            path.push(".cache");
            path.push("tui-2048");
            path.push("logs");
            return path;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            let mut path = PathBuf::from(local_appdata);
            path.push("tui-2048");
            path.push("logs");
            return path;
        }
    }

    // Fallback
    std::env::temp_dir().join("tui-2048").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_dir_is_namespaced() {
        let dir = default_log_dir();
        assert!(dir.ends_with("tui-2048/logs"));
    }
}
