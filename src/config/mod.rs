//! Configuration file support for vidmark.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/vidmark/config.toml`. Settings cover the tool and style an
//! overlay starts with and the font used for text labels.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{DrawingConfig, TextConfig};

use crate::draw::{FontDescriptor, MAX_THICKNESS, MIN_THICKNESS, Style};
use crate::overlay::OverlayOptions;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_thickness = 3
/// default_tool = "arrow"
///
/// [text]
/// font_family = "DejaVu Sans"
/// font_weight = "bold"
/// font_style = "normal"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting tool and style
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Text label font
    #[serde(default)]
    pub text: TextConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by a
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1 - 50
    /// - `font_weight`: named weight or 100 - 900
    /// - `font_style`: normal, italic, oblique
    fn validate_and_clamp(&mut self) {
        if !(MIN_THICKNESS..=MAX_THICKNESS).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {}, clamping to {MIN_THICKNESS}-{MAX_THICKNESS} range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self
                .drawing
                .default_thickness
                .clamp(MIN_THICKNESS, MAX_THICKNESS);
        }

        let valid_weight = matches!(
            self.text.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .text
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.text.font_weight
            );
            self.text.font_weight = "normal".to_string();
        }

        if !matches!(
            self.text.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/vidmark/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("vidmark");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates the configuration at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Style new overlays start with.
    pub fn default_style(&self) -> Style {
        let color = self.drawing.default_color.to_color_text();
        let thickness = self
            .drawing
            .default_thickness
            .clamp(MIN_THICKNESS, MAX_THICKNESS);
        Style::new(color, thickness).unwrap_or_default()
    }

    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.text.font_family.clone(),
            self.text.font_weight.clone(),
            self.text.font_style.clone(),
        )
    }

    /// Overlay construction options derived from this configuration.
    pub fn overlay_options(&self) -> OverlayOptions {
        OverlayOptions {
            tool: self.drawing.default_tool,
            style: self.default_style(),
            font: self.font(),
        }
    }
}
