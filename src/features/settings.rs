//! Application settings persistence
//!
//! Handles saving and loading the demo screen's preferences: initial values,
//! buffer simulation and the progress bar's look.

use std::path::{Path, PathBuf};

use iced::{Color, Size};
use serde::{Deserialize, Serialize};

use super::progress::ProgressStyle;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Progress shown before the first interaction (0 to 100)
    pub initial_progress: f32,
    /// Buffer shown before the first tick (0 to 100)
    pub initial_buffer: f32,
    /// Buffer percentage gained per simulation tick, 0 disables the simulation
    pub buffer_step: f32,
    pub dark_mode: bool,
    /// Image sliced into preview frames; procedural frames when unset
    pub preview_image: Option<PathBuf>,
    /// Number of preview frames across the whole track
    pub preview_frames: usize,
    /// Progress bar appearance
    pub style: StyleSettings,
}

/// Serializable form of [`ProgressStyle`]
///
/// Colours are `#rrggbb` or `#rrggbbaa` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub track_color: String,
    pub buffer_color: String,
    pub handle_color: String,
    pub background_color: String,
    pub handle_width: f32,
    pub preview_width: f32,
    pub preview_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_progress: 30.0,
            initial_buffer: 0.0,
            buffer_step: 0.5,
            dark_mode: true,
            preview_image: None,
            preview_frames: 50,
            style: StyleSettings::default(),
        }
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            track_color: "#0000ff".to_string(),
            buffer_color: "#ffffff99".to_string(),
            handle_color: "#ff0000".to_string(),
            background_color: "#aaaaaa".to_string(),
            handle_width: 10.0,
            preview_width: 80.0,
            preview_height: 60.0,
        }
    }
}

impl StyleSettings {
    /// Build the runtime style. Unparseable colours keep their default.
    pub fn to_style(&self) -> ProgressStyle {
        let defaults = ProgressStyle::default();

        ProgressStyle {
            background_color: parse_color(&self.background_color, defaults.background_color),
            ..defaults
        }
        .with_track_color(parse_color(&self.track_color, defaults.track_color))
        .with_buffer_color(parse_color(&self.buffer_color, defaults.buffer_color))
        .with_handle_color(parse_color(&self.handle_color, defaults.handle_color))
        .with_handle_width(self.handle_width)
        .with_preview_size(Size::new(self.preview_width, self.preview_height))
    }
}

fn parse_color(value: &str, fallback: Color) -> Color {
    value.parse::<Color>().ok().unwrap_or_else(|| {
        tracing::warn!("Invalid colour {:?} in settings, using default", value);
        fallback
    })
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "progressview", "ProgressView")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found.
    ///
    /// A missing file is created with the defaults so there is something to edit.
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) => {
                tracing::debug!("No settings at {}: {}", path.display(), e);
                let settings = Self::default();
                if let Err(e) = settings.save_to_file(&path) {
                    tracing::warn!("Failed to write default settings: {}", e);
                }
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
