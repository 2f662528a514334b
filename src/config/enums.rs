//! Configuration enum types.

use crate::draw::{Color, color::DEFAULT_ANNOTATION_COLOR};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - colour text or RGB values.
///
/// # Examples
/// ```toml
/// # Named color or hex text
/// default_color = "red"
/// default_color = "#00ff00"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, ...) or hex text (`#rgb`, `#rrggbb`, `#rrggbbaa`)
    Text(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to the colour text stored on shapes.
    ///
    /// Unrecognised text falls back to the default annotation green with a warning.
    pub fn to_color_text(&self) -> String {
        match self {
            ColorSpec::Text(text) => {
                if Color::parse(text).is_some() {
                    text.trim().to_string()
                } else {
                    warn!("Unknown color '{text}', using {DEFAULT_ANNOTATION_COLOR}");
                    DEFAULT_ANNOTATION_COLOR.to_string()
                }
            }
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b).to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_spec_becomes_hex_text() {
        assert_eq!(ColorSpec::Rgb([255, 128, 0]).to_color_text(), "#ff8000");
    }

    #[test]
    fn text_spec_is_kept_when_valid() {
        assert_eq!(ColorSpec::Text("red".into()).to_color_text(), "red");
        assert_eq!(ColorSpec::Text(" #ABC ".into()).to_color_text(), "#ABC");
    }

    #[test]
    fn unknown_text_falls_back_to_default() {
        assert_eq!(
            ColorSpec::Text("mauve-ish".into()).to_color_text(),
            DEFAULT_ANNOTATION_COLOR
        );
    }
}
