//! Settings persistence
//!
//! Loads the indicator style and the demo screen content from a JSON file in
//! the user's config directory. Missing fields fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::theme;
use crate::ui::widgets::seek_indicator::Style;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Style attributes of the seek indicator
    pub indicator: IndicatorSettings,
    /// Demo screen content
    pub demo: DemoSettings,
}

/// Seek indicator style attributes, colors as hex strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    /// Bar background color
    pub bar_color: String,
    pub bar_height: f32,
    pub marker_width: f32,
    pub marker_text_size: f32,
    pub marker_color: String,
    /// Defaults to three times `marker_width` when absent
    pub focus_marker_width: Option<f32>,
    pub focus_marker_text_size: f32,
    pub focus_marker_color: String,
    pub current: i32,
    pub min: i32,
    pub max: i32,
    /// Draw the focus line and value label above the bar
    pub show_focus_line: bool,
    pub focus_unit: String,
}

/// Demo screen settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub dark_mode: bool,
    /// Gradient applied to the bar after construction
    pub palette: Vec<String>,
    /// Marker labels shown under the bar
    pub labels: Vec<String>,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        let style = Style::default();
        Self {
            bar_color: theme::to_hex(theme::GRAY),
            bar_height: style.bar_height,
            marker_width: style.marker_width,
            marker_text_size: style.marker_text_size,
            marker_color: theme::to_hex(style.marker_color),
            focus_marker_width: None,
            focus_marker_text_size: style.focus_marker_text_size,
            focus_marker_color: theme::to_hex(style.focus_marker_color),
            current: style.initial_value,
            min: style.min_value,
            max: style.max_value,
            show_focus_line: style.show_focus_line,
            focus_unit: style.focus_unit,
        }
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            palette: theme::DEMO_GRADIENT.iter().copied().map(theme::to_hex).collect(),
            labels: ["0", "45", "90", "135", "180"]
                .iter()
                .map(|label| label.to_string())
                .collect(),
        }
    }
}

impl IndicatorSettings {
    /// Builds the indicator style, failing on the first malformed color
    pub fn to_style(&self) -> Result<Style, SettingsError> {
        Ok(Style {
            bar_colors: vec![parse(&self.bar_color)?],
            bar_height: self.bar_height,
            marker_width: self.marker_width,
            marker_text_size: self.marker_text_size,
            marker_color: parse(&self.marker_color)?,
            focus_marker_width: self
                .focus_marker_width
                .unwrap_or(self.marker_width * 3.0),
            focus_marker_text_size: self.focus_marker_text_size,
            focus_marker_color: parse(&self.focus_marker_color)?,
            show_focus_line: self.show_focus_line,
            focus_unit: self.focus_unit.clone(),
            initial_value: self.current,
            min_value: self.min,
            max_value: self.max,
            ..Style::default()
        })
    }
}

impl DemoSettings {
    /// Parsed palette; malformed entries are skipped
    pub fn palette(&self) -> Vec<iced::Color> {
        self.palette
            .iter()
            .filter_map(|hex| {
                let color = theme::parse_color(hex);
                if color.is_none() {
                    tracing::warn!("Skipping invalid palette color {:?}", hex);
                }
                color
            })
            .collect()
    }
}

fn parse(value: &str) -> Result<iced::Color, SettingsError> {
    theme::parse_color(value).ok_or_else(|| SettingsError::Color(value.to_string()))
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "fancy-seekbar", "FancySeekBar")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file. On first run the defaults are written out so
    /// they can be edited.
    pub fn load() -> Self {
        match Self::file_path() {
            Some(path) => Self::load_or_create(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`, creating it with the defaults if missing
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            match settings.save_to_file(path) {
                Ok(()) => tracing::info!("Wrote default settings to {}", path.display()),
                Err(e) => tracing::warn!("Failed to write default settings: {}", e),
            }
            return settings;
        }

        Self::load_from_file(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
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
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
    /// A color string that is not `#rrggbb` / `#rrggbbaa`
    Color(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
            SettingsError::Color(value) => write!(f, "Invalid color: {:?}", value),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_default_style() {
        let style = IndicatorSettings::default().to_style().unwrap();
        assert_eq!(style, Style::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "indicator": { "max": 99, "marker_width": 2.0 } }"#)
                .unwrap();

        assert_eq!(settings.indicator.max, 99);
        assert_eq!(settings.indicator.min, 0);
        assert_eq!(settings.demo, DemoSettings::default());

        let style = settings.indicator.to_style().unwrap();
        assert_eq!(style.focus_marker_width, 6.0);
        assert_eq!(style.max_value, 99);
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let settings = IndicatorSettings {
            marker_color: "grey-ish".to_string(),
            ..IndicatorSettings::default()
        };
        assert_eq!(
            settings.to_style(),
            Err(SettingsError::Color("grey-ish".to_string()))
        );
    }

    #[test]
    fn test_demo_palette_skips_invalid_entries() {
        let demo = DemoSettings {
            palette: vec!["#ff0000".to_string(), "nope".to_string(), "#888888".to_string()],
            ..DemoSettings::default()
        };
        assert_eq!(demo.palette(), vec![theme::RED, theme::GRAY]);
        assert_eq!(DemoSettings::default().palette().len(), 10);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("fancy-seekbar-test-{}", std::process::id()));
        let path = dir.join("settings.json");

        let mut settings = Settings::default();
        settings.indicator.show_focus_line = true;
        settings.demo.labels = vec!["low".to_string(), "high".to_string()];

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = std::env::temp_dir().join(format!("fancy-seekbar-init-{}", std::process::id()));
        let path = dir.join("nested").join("settings.json");
        let _ = std::fs::remove_dir_all(&dir);

        let first = Settings::load_or_create(&path);
        assert_eq!(first, Settings::default());
        assert!(path.exists());

        // Later loads read the edited file instead of overwriting it
        std::fs::write(&path, r#"{ "indicator": { "max": 42 } }"#).unwrap();
        assert_eq!(Settings::load_or_create(&path).indicator.max, 42);

        // A broken file falls back to defaults and is left alone
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_or_create(&path), Settings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = Settings::load_from_file(Path::new("/nonexistent/fancy-seekbar.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
