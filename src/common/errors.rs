use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while obtaining the settings document.
/// Callers never abort on these: they fall back to `Settings::default()`
/// and show the message in the log.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings resource could not be read
    #[error("Error reading the settings file => {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is malformed or a field has the wrong shape
    #[error("Error parsing settings from {origin} => {message}")]
    Parse { origin: String, message: String },
}

/// Errors raised while deleting entries under `<target>/exd/`.
#[derive(Debug, Error)]
pub enum CleanError {
    /// The target folder does not exist, so the run was aborted
    #[error("Target folder does not exist: {}", path.display())]
    TargetMissing { path: PathBuf },

    /// The entry could not be inspected (not found or inaccessible)
    #[error("{}: {source}", path.display())]
    ItemStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delete call itself failed (permissions, file in use, ...)
    #[error("Failed to remove {}: {source}", path.display())]
    ItemDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entry would resolve outside the `exd` directory
    #[error("Refusing to delete '{entry}': {reason}")]
    ItemRejected { entry: String, reason: String },
}

impl CleanError {
    /// True when the underlying I/O error says the path is absent
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CleanError::ItemStat { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
