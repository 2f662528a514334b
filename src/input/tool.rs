//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Drawing tool selection.
///
/// The active tool determines what shape is created when the user drags across
/// the overlay. `None` leaves the overlay passive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// No tool selected - pointer events are ignored
    #[default]
    None,
    /// Circle centred on the press point (drag sets the radius)
    Circle,
    /// Straight line between press and release points
    Line,
    /// Line with an arrowhead at the release point
    Arrow,
    /// Rectangle outline from corner to corner
    Rect,
    /// Text label placed at the press point (no drag)
    Text,
    /// Freehand stroke following the pointer
    Pencil,
    /// Line with arrowheads at both ends
    DoubleArrow,
    /// Arrow with a dashed shaft
    DashedArrow,
    /// Dashed straight line
    DashedLine,
}

impl Tool {
    /// Name used by hosts and the exchange format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::None => "none",
            Tool::Circle => "circle",
            Tool::Line => "line",
            Tool::Arrow => "arrow",
            Tool::Rect => "rect",
            Tool::Text => "text",
            Tool::Pencil => "pencil",
            Tool::DoubleArrow => "double_arrow",
            Tool::DashedArrow => "dashed_arrow",
            Tool::DashedLine => "dashed_line",
        }
    }

    /// Whether this tool creates shapes by dragging.
    pub fn is_drag_tool(&self) -> bool {
        !matches!(self, Tool::None | Tool::Text)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a host passes an unknown tool name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "unknown drawing tool '{0}' (expected none, circle, line, arrow, rect, text, pencil, double_arrow, dashed_arrow or dashed_line)"
)]
pub struct ToolParseError(pub String);

impl FromStr for Tool {
    type Err = ToolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(Tool::None),
            "circle" => Ok(Tool::Circle),
            "line" => Ok(Tool::Line),
            "arrow" => Ok(Tool::Arrow),
            "rect" | "rectangle" => Ok(Tool::Rect),
            "text" => Ok(Tool::Text),
            "pencil" | "freehand" => Ok(Tool::Pencil),
            "double_arrow" => Ok(Tool::DoubleArrow),
            "dashed_arrow" => Ok(Tool::DashedArrow),
            "dashed_line" => Ok(Tool::DashedLine),
            _ => Err(ToolParseError(s.to_string())),
        }
    }
}
