// config.rs - Display settings for the LED matrix window

//! Only presentation is configurable. The panel dimensions are compile-time
//! constants in [`crate::grid`] so the word count can never drift from them.

use anyhow::Context;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "led_matrix.json";

pub const CELL_SIZE_RANGE: (f32, f32) = (4.0, 200.0);
pub const SPACING_RANGE: (f32, f32) = (0.0, 20.0);

/// An sRGBA color as stored in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fill for lit LEDs.
    pub lit_color: Rgba,
    /// Fill for dark LEDs.
    pub dark_color: Rgba,
    /// Cell edge length in points.
    pub cell_size: f32,
    /// Gap between cells in points.
    pub spacing: f32,
    /// Initial window size `[width, height]`.
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lit_color: Rgba(0, 122, 255, 255),  // blue
            dark_color: Rgba(128, 128, 128, 77), // gray at 30% opacity
            cell_size: 40.0,
            spacing: 2.0,
            window_size: [640.0, 760.0],
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse LED matrix config")?;
        Ok(config.clamped())
    }

    /// Pulls cell geometry back into drawable ranges.
    pub fn clamped(mut self) -> Self {
        let defaults = Self::default();
        self.cell_size =
            clamp_setting("cell_size", self.cell_size, CELL_SIZE_RANGE, defaults.cell_size);
        self.spacing = clamp_setting("spacing", self.spacing, SPACING_RANGE, defaults.spacing);
        self
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Loads `path` if it exists; any failure falls back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }
}

fn clamp_setting(name: &str, value: f32, (min, max): (f32, f32), default: f32) -> f32 {
    if !value.is_finite() {
        warn!("Config {} = {} is not a number, using {}", name, value, default);
        return default;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("Config {} = {} out of range {}..={}, using {}", name, value, min, max, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn missing_fields_take_defaults() {
        let config = AppConfig::from_json(r#"{ "cell_size": 24.0 }"#).unwrap();
        assert_eq!(config.cell_size, 24.0);
        assert_eq!(config.lit_color, AppConfig::default().lit_color);
        assert_eq!(config.window_size, AppConfig::default().window_size);
    }

    #[test]
    fn json_round_trip() {
        let config = AppConfig {
            lit_color: Rgba(255, 0, 0, 255),
            spacing: 0.5,
            ..AppConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{ cell_size: }").is_err());
        assert!(AppConfig::from_json(r#"{ "lit_color": "blue" }"#).is_err());
    }

    #[test]
    fn absent_file_falls_back_to_defaults() {
        let path = Path::new("definitely/not/here/led_matrix.json");
        assert_eq!(AppConfig::load_or_default(path), AppConfig::default());
        assert!(AppConfig::load(path).is_err());
    }

    #[test]
    fn out_of_range_geometry_is_clamped() {
        let config = AppConfig::from_json(r#"{ "cell_size": 1000.0, "spacing": -5.0 }"#).unwrap();
        assert_eq!(config.cell_size, CELL_SIZE_RANGE.1);
        assert_eq!(config.spacing, 0.0);

        let config = AppConfig::from_json(r#"{ "cell_size": 0.0, "spacing": 50.0 }"#).unwrap();
        assert_eq!(config.cell_size, CELL_SIZE_RANGE.0);
        assert_eq!(config.spacing, SPACING_RANGE.1);
    }

    #[test]
    fn non_finite_geometry_falls_back_to_defaults() {
        let config = AppConfig {
            cell_size: f32::NAN,
            spacing: f32::INFINITY,
            ..AppConfig::default()
        }
        .clamped();
        assert_eq!(config.cell_size, AppConfig::default().cell_size);
        assert_eq!(config.spacing, AppConfig::default().spacing);
    }
}
