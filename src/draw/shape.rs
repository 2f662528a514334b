//! Shape definitions for video annotations.

use super::color::{Color, DEFAULT_ANNOTATION_COLOR};
use thiserror::Error;

/// A position in canvas pixel coordinates.
///
/// Coordinates are absolute pixels on the overlay surface; they are not
/// normalised against the underlying video resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Thinnest stroke a shape can carry, in pixels.
pub const MIN_THICKNESS: u32 = 1;
/// Thickest stroke a shape can carry, in pixels.
pub const MAX_THICKNESS: u32 = 50;

/// Whether `thickness` lies in `MIN_THICKNESS..=MAX_THICKNESS`.
pub fn thickness_in_range(thickness: u32) -> bool {
    (MIN_THICKNESS..=MAX_THICKNESS).contains(&thickness)
}

/// Errors raised when building a [`Style`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("stroke thickness {0} outside {MIN_THICKNESS}-{MAX_THICKNESS} pixels")]
    ThicknessOutOfRange(u32),

    #[error("unrecognised color '{0}'")]
    InvalidColor(String),
}

/// Stroke color and thickness applied to newly created shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    color: String,
    thickness: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: DEFAULT_ANNOTATION_COLOR.to_string(),
            thickness: 3,
        }
    }
}

impl Style {
    /// Builds a style, validating both the color text and the thickness.
    ///
    /// The color text is stored exactly as given so exports reproduce it.
    pub fn new(color: impl Into<String>, thickness: u32) -> Result<Self, StyleError> {
        let color = color.into();
        if !thickness_in_range(thickness) {
            return Err(StyleError::ThicknessOutOfRange(thickness));
        }
        if Color::parse(&color).is_none() {
            return Err(StyleError::InvalidColor(color));
        }
        Ok(Self { color, thickness })
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }
}

/// A committed annotation.
///
/// Each variant stores its own color and thickness so it renders the same way
/// regardless of the style that is active later. Shapes are never edited after
/// they are committed.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Circle centred on `start`, passing through `end`
    Circle {
        start: Point,
        end: Point,
        color: String,
        thickness: u32,
    },
    /// Straight segment from `start` to `end`
    Line {
        start: Point,
        end: Point,
        color: String,
        thickness: u32,
    },
    /// Line with a two-stroke arrowhead at `end`
    Arrow {
        start: Point,
        end: Point,
        color: String,
        thickness: u32,
    },
    /// Axis-aligned rectangle with opposite corners at `start` and `end`
    ///
    /// `end` may lie above or left of `start`.
    Rect {
        start: Point,
        end: Point,
        color: String,
        thickness: u32,
    },
    /// Text label with its baseline starting at `position`
    Text {
        position: Point,
        text: String,
        color: String,
        thickness: u32,
    },
    /// Pencil stroke through every recorded pointer position
    Freehand {
        points: Vec<Point>,
        color: String,
        thickness: u32,
    },
    /// Line with arrowheads at both `start` and `end`
    DoubleArrow {
        start: Point,
        end: Point,
        color: String,
        thickness: u32,
    },
    /// Arrow whose shaft is dashed
    DashedArrow {
        start: Point,
        end: Point,
        color: String,
        thickness: u32,
    },
    /// Dashed straight segment
    DashedLine {
        start: Point,
        end: Point,
        color: String,
        thickness: u32,
    },
}

impl Shape {
    /// Exchange-format name of this shape's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Line { .. } => "line",
            Shape::Arrow { .. } => "arrow",
            Shape::Rect { .. } => "rect",
            Shape::Text { .. } => "text",
            Shape::Freehand { .. } => "pencil",
            Shape::DoubleArrow { .. } => "double_arrow",
            Shape::DashedArrow { .. } => "dashed_arrow",
            Shape::DashedLine { .. } => "dashed_line",
        }
    }

    /// Colour text this shape was committed with.
    pub fn color(&self) -> &str {
        match self {
            Shape::Circle { color, .. }
            | Shape::Line { color, .. }
            | Shape::Arrow { color, .. }
            | Shape::Rect { color, .. }
            | Shape::Text { color, .. }
            | Shape::Freehand { color, .. }
            | Shape::DoubleArrow { color, .. }
            | Shape::DashedArrow { color, .. }
            | Shape::DashedLine { color, .. } => color,
        }
    }

    /// Stroke thickness this shape was committed with.
    pub fn thickness(&self) -> u32 {
        match self {
            Shape::Circle { thickness, .. }
            | Shape::Line { thickness, .. }
            | Shape::Arrow { thickness, .. }
            | Shape::Rect { thickness, .. }
            | Shape::Text { thickness, .. }
            | Shape::Freehand { thickness, .. }
            | Shape::DoubleArrow { thickness, .. }
            | Shape::DashedArrow { thickness, .. }
            | Shape::DashedLine { thickness, .. } => *thickness,
        }
    }
}
