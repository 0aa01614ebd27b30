use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Application directory name under the platform data directory
const APP_DIR: &str = "xiv-translation-cleaner";

/// Log file prefix; the appender adds a date suffix
const LOG_FILE: &str = "xtc.log";

/// Where tracing output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain stderr, for headless commands
    Stderr,
    /// Daily rolling file, for the full-screen UI
    File,
}

/// Get the data directory (e.g. ~/.local/share/xiv-translation-cleaner)
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(APP_DIR)
}

/// Get the logs directory
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("xiv_translation_cleaner=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Install the global tracing subscriber.
///
/// The returned guard must be held until exit so buffered file output is
/// flushed.
pub fn init_logging(verbose: bool, target: LogTarget) -> Result<Option<WorkerGuard>> {
    match target {
        LogTarget::Stderr => {
            // A subscriber may already be installed (tests); that is fine.
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_writer(std::io::stderr)
                .try_init();
            Ok(None)
        }
        LogTarget::File => {
            let dir = logs_dir();
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_writer(writer)
                .with_ansi(false)
                .try_init();
            Ok(Some(guard))
        }
    }
}
