use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::SettingsError;

/// Settings document shipped inside the binary
pub const BUNDLED_SETTINGS: &[u8] = include_bytes!("../../assets/settings.json");

/// Name shown in log lines for the bundled document
pub const BUNDLED_NAME: &str = "settings.json";

/// Which entries to delete and where the game is suggested to live
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Suggested installation folder; the user may edit it before a run
    #[serde(default)]
    pub target_folder: String,

    /// Entries relative to `<target_folder>/exd/`, in deletion order
    #[serde(default)]
    pub files_to_delete: Vec<String>,
}

/// Document syntax of a settings payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Toml,
}

impl SettingsFormat {
    /// `.toml` files are TOML, everything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SettingsFormat::Toml,
            _ => SettingsFormat::Json,
        }
    }
}

/// Where the settings come from
#[derive(Debug, Clone)]
pub enum SettingsSource {
    Bundled,
    File(PathBuf),
}

impl SettingsSource {
    pub fn from_override(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => SettingsSource::File(p),
            None => SettingsSource::Bundled,
        }
    }

    /// Short name for log lines
    pub fn display_name(&self) -> String {
        match self {
            SettingsSource::Bundled => BUNDLED_NAME.to_string(),
            SettingsSource::File(p) => p
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| p.display().to_string()),
        }
    }
}

/// Parse a JSON settings payload
pub fn load(bytes: &[u8]) -> Result<Settings, SettingsError> {
    load_as(bytes, SettingsFormat::Json, BUNDLED_NAME)
}

/// Parse a settings payload in the given format
pub fn load_as(
    bytes: &[u8],
    format: SettingsFormat,
    origin: &str,
) -> Result<Settings, SettingsError> {
    let parse_err = |message: String| SettingsError::Parse {
        origin: origin.to_string(),
        message,
    };

    match format {
        SettingsFormat::Json => serde_json::from_slice(bytes).map_err(|e| parse_err(e.to_string())),
        SettingsFormat::Toml => {
            let text = std::str::from_utf8(bytes).map_err(|e| parse_err(e.to_string()))?;
            toml::from_str(text).map_err(|e| parse_err(e.to_string()))
        }
    }
}

/// Read the raw payload for a source
pub fn read_source(source: &SettingsSource) -> Result<Vec<u8>, SettingsError> {
    match source {
        SettingsSource::Bundled => Ok(BUNDLED_SETTINGS.to_vec()),
        SettingsSource::File(path) => std::fs::read(path).map_err(|e| SettingsError::Read {
            path: path.clone(),
            source: e,
        }),
    }
}

/// Result of loading settings at startup: the value to use plus the
/// log lines describing how it went
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub log: Vec<String>,
    pub ok: bool,
}

/// Load settings, degrading to `Settings::default()` on any failure
pub fn load_or_default(source: &SettingsSource) -> LoadedSettings {
    let name = source.display_name();
    let mut log = Vec::new();

    let bytes = match read_source(source) {
        Ok(bytes) => {
            log.push(format!("✅ Reading {} successful", name));
            bytes
        }
        Err(e) => {
            tracing::warn!(error = %e, "settings unavailable, using empty settings");
            log.push(format!("❌ {}", e));
            return LoadedSettings {
                settings: Settings::default(),
                log,
                ok: false,
            };
        }
    };

    let format = match source {
        SettingsSource::File(path) => SettingsFormat::from_path(path),
        SettingsSource::Bundled => SettingsFormat::Json,
    };

    match load_as(&bytes, format, &name) {
        Ok(settings) => {
            tracing::debug!(
                target_folder = %settings.target_folder,
                entries = settings.files_to_delete.len(),
                "settings parsed"
            );
            log.push("🔄 The settings have been parsed successfully".to_string());
            LoadedSettings {
                settings,
                log,
                ok: true,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "settings malformed, using empty settings");
            log.push(format!("❌ {}", e));
            LoadedSettings {
                settings: Settings::default(),
                log,
                ok: false,
            }
        }
    }
}
