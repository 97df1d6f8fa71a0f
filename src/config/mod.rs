//! Configuration module for the CO2 dashboard
//!
//! This module handles persistent application state: the recently opened
//! dataset files, the last session's dataset, and UI preferences.
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.co2vis.co2vis-rs/`
//! - **macOS**: `~/Library/Application Support/dev.co2vis.co2vis-rs/`
//! - **Windows**: `%APPDATA%\dev.co2vis.co2vis-rs\`
//!
//! # Files
//!
//! - `app_state.json` - Recent datasets list and UI preferences

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Application identifier for data directories
pub const APP_ID: &str = "dev.co2vis.co2vis-rs";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Maximum number of recent datasets to remember
pub const MAX_RECENT_DATASETS: usize = 10;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        DashboardError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            DashboardError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

// ==================== Recent Dataset Entry ====================

/// Information about a recently opened dataset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentDataset {
    /// Path to the CSV file
    pub path: PathBuf,

    /// Display name (file stem)
    pub name: String,

    /// Last opened timestamp (Unix seconds)
    pub last_opened: u64,
}

impl RecentDataset {
    /// Create a new recent dataset entry
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            path: path.into(),
            name: name.into(),
            last_opened: now,
        }
    }

    /// Update the last opened timestamp
    pub fn touch(&mut self) {
        self.last_opened = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
    }

    /// Check if the dataset file still exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

// ==================== UI Preferences ====================

/// UI preferences that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Whether to use the dark theme
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Whether plots show their legends
    #[serde(default = "default_true")]
    pub show_legend: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            show_legend: true,
        }
    }
}

// ==================== App State ====================

/// Persistent application state
///
/// This stores user preferences and history that persist across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// Recently opened datasets
    #[serde(default)]
    pub recent_datasets: Vec<RecentDataset>,

    /// Path to the last opened dataset (for session restore)
    #[serde(default)]
    pub last_dataset_path: Option<PathBuf>,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            recent_datasets: Vec::new(),
            last_dataset_path: None,
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            DashboardError::Config("Could not determine app state path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| DashboardError::Config(format!("Failed to read app state: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse app state: {}", e)))
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        let path = dir.join(APP_STATE_FILE);

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::Config(format!("Failed to serialize app state: {}", e)))?;

        std::fs::write(&path, content)
            .map_err(|e| DashboardError::Config(format!("Failed to write app state: {}", e)))
    }

    /// Add or update a recent dataset
    pub fn add_recent_dataset(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        // Remove existing entry for this path
        self.recent_datasets.retain(|d| d.path != path);

        // Create new entry at the front
        self.recent_datasets
            .insert(0, RecentDataset::new(path.clone(), name));

        // Trim to max size
        self.recent_datasets.truncate(MAX_RECENT_DATASETS);

        // Update last dataset
        self.last_dataset_path = Some(path);
    }

    /// Remove a dataset from recents (e.g., if the file was deleted)
    pub fn remove_recent_dataset(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.recent_datasets.retain(|d| d.path != path);
        if self.last_dataset_path.as_deref() == Some(path) {
            self.last_dataset_path = None;
        }
    }

    /// Drop recent entries whose files no longer exist
    pub fn cleanup_missing_datasets(&mut self) {
        let before = self.recent_datasets.len();
        self.recent_datasets.retain(|d| d.exists());
        let removed = before - self.recent_datasets.len();
        if removed > 0 {
            tracing::debug!("Removed {} missing recent datasets", removed);
        }

        if let Some(last) = &self.last_dataset_path {
            if !last.exists() {
                self.last_dataset_path = None;
            }
        }
    }

    /// Path of the dataset to restore, if any
    pub fn get_last_dataset(&self) -> Option<&Path> {
        self.last_dataset_path.as_deref()
    }
}
