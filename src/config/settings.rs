//! User settings for the dashboard
//!
//! Settings only tune the shell: event tick rate, log filter and sidebar
//! width. The selected view is deliberately absent; every launch starts on
//! the Executive Summary.

use serde::{Deserialize, Serialize};

use super::paths::DashboardPaths;
use crate::error::DashboardError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Milliseconds between TUI tick events
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Width of the TUI sidebar in columns
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_sidebar_width() -> u16 {
    32
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
            sidebar_width: default_sidebar_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &DashboardPaths) -> Result<Self, DashboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DashboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DashboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), DashboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            DashboardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject values the TUI cannot work with
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.tick_rate_ms == 0 {
            return Err(DashboardError::Config(
                "tick_rate_ms must be greater than zero".into(),
            ));
        }
        if self.sidebar_width < 20 {
            return Err(DashboardError::Config(
                "sidebar_width must be at least 20 columns".into(),
            ));
        }
        Ok(())
    }
}
