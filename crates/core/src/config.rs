/// Display policy store for the screensaver.
///
/// This module provides functionality for managing the persisted
/// multi-monitor policy, including:
/// - The `MultiMonitorMode` choice made in the configuration window
/// - Persisting configuration to disk as JSON
/// - Determining the appropriate data and cache directories
///
/// The configuration is saved to and loaded from a `config.json` file
/// located in the platform-specific application data directory
/// (%APPDATA%/Aerial/ on Windows).
///
/// # Example
///
/// ```no_run
/// use aerial_core::config::{load_config, save_config, MultiMonitorMode};
///
/// // Load existing config or get defaults
/// let mut config = load_config();
///
/// // Modify config
/// config.multi_monitor_mode = MultiMonitorMode::SpanAll;
///
/// // Save changes
/// save_config(&config).expect("Failed to save config");
/// ```
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

/// How the screensaver uses multiple monitors
///
/// Persisted as an integer code. Unknown codes fall back to
/// `SpecificScreenOnly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum MultiMonitorMode {
    /// Same video on every monitor
    #[default]
    SameOnEach,
    /// Independent video on every monitor
    DifferentVideos,
    /// One video stretched across all monitors
    SpanAll,
    /// Only one monitor shows the screensaver
    SpecificScreenOnly,
}

impl MultiMonitorMode {
    pub const ALL: [MultiMonitorMode; 4] = [
        MultiMonitorMode::SameOnEach,
        MultiMonitorMode::DifferentVideos,
        MultiMonitorMode::SpanAll,
        MultiMonitorMode::SpecificScreenOnly,
    ];

    /// Integer code used in the config file
    pub fn code(self) -> u32 {
        match self {
            MultiMonitorMode::SameOnEach => 0,
            MultiMonitorMode::DifferentVideos => 1,
            MultiMonitorMode::SpanAll => 2,
            MultiMonitorMode::SpecificScreenOnly => 3,
        }
    }

    pub fn from_code(code: u32) -> Self {
        match code {
            0 => MultiMonitorMode::SameOnEach,
            1 => MultiMonitorMode::DifferentVideos,
            2 => MultiMonitorMode::SpanAll,
            // 3 and anything unrecognized
            _ => MultiMonitorMode::SpecificScreenOnly,
        }
    }
}

impl From<u32> for MultiMonitorMode {
    fn from(code: u32) -> Self {
        MultiMonitorMode::from_code(code)
    }
}

impl From<MultiMonitorMode> for u32 {
    fn from(mode: MultiMonitorMode) -> Self {
        mode.code()
    }
}

impl std::fmt::Display for MultiMonitorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultiMonitorMode::SameOnEach => write!(f, "Same video on each monitor"),
            MultiMonitorMode::DifferentVideos => write!(f, "Different videos on each monitor"),
            MultiMonitorMode::SpanAll => write!(f, "Span video across all monitors"),
            MultiMonitorMode::SpecificScreenOnly => write!(f, "First monitor only"),
        }
    }
}

/// Persisted screensaver configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SaverConfig {
    /// Multi-monitor policy chosen by the user
    #[serde(default)]
    pub multi_monitor_mode: MultiMonitorMode,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "Aerial").ok_or_else(|| anyhow!("Failed to determine user data directory"))
}

/// Get the application's data directory
/// Returns %APPDATA%/Aerial/ on Windows
/// Creates directory if it doesn't exist
pub fn get_data_directory() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    fs::create_dir_all(data_dir)
        .map_err(|e| anyhow!("Failed to create data directory: {}", e))?;

    Ok(data_dir.to_path_buf())
}

/// Get the directory used by the content cache (not created here)
pub fn get_cache_directory() -> Result<PathBuf> {
    Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Load configuration from config.json in the data directory
/// Returns default config if file doesn't exist or on error
pub fn load_config() -> SaverConfig {
    let Ok(data_dir) = get_data_directory() else {
        return SaverConfig::default();
    };

    load_config_from(&data_dir.join(CONFIG_FILE))
}

/// Load configuration from an explicit file
pub fn load_config_from(path: &Path) -> SaverConfig {
    if !path.exists() {
        return SaverConfig::default();
    }

    let Ok(contents) = fs::read_to_string(path) else {
        tracing::warn!("Could not read {}, using defaults", path.display());
        return SaverConfig::default();
    };

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        tracing::warn!("Invalid config {}: {}, using defaults", path.display(), e);
        SaverConfig::default()
    })
}

/// Save configuration to config.json in the data directory
pub fn save_config(config: &SaverConfig) -> Result<()> {
    let data_dir = get_data_directory()?;
    save_config_to(config, &data_dir.join(CONFIG_FILE))
}

/// Save configuration to an explicit file
pub fn save_config_to(config: &SaverConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Saved config: {:?}", config);
    Ok(())
}
