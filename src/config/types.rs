//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool and style an overlay starts with. Hosts can change both at
/// runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default annotation color - colour text ("red", "#00ff00") or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke thickness in pixels (valid range: 1 - 50)
    #[serde(default = "default_thickness")]
    pub default_thickness: u32,

    /// Tool selected when the overlay attaches (none, circle, line, arrow, rect, text)
    #[serde(default)]
    pub default_tool: Tool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            default_tool: Tool::None,
        }
    }
}

/// Text label settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Font family name for text labels (e.g., "Sans", "Arial", "DejaVu Sans")
    /// Falls back to the system default if the family is not installed
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Text(crate::draw::color::DEFAULT_ANNOTATION_COLOR.to_string())
}

fn default_thickness() -> u32 {
    3
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}
