pub mod config;
pub mod errors;
pub mod format;
pub mod safety;
pub mod settings;

pub use errors::{CleanError, SettingsError};
pub use settings::{LoadedSettings, Settings, SettingsSource};
