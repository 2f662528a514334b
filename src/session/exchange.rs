//! JSON exchange format for committed shapes.
//!
//! The format is an array of records. Each record names its kind in a `tool`
//! field; drag-based kinds carry `startX/startY/endX/endY`, text carries `x/y`,
//! pencil strokes carry `points: [{x, y}, ...]`. All carry `color` and
//! `thickness`. Unknown fields are ignored on restore.

use crate::draw::{MAX_THICKNESS, MIN_THICKNESS, Point, Shape, thickness_in_range};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while restoring an exchange string.
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("malformed shape data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(
        "shape #{index} ({kind}) has thickness {thickness}, expected {MIN_THICKNESS}-{MAX_THICKNESS}"
    )]
    ThicknessOutOfRange {
        index: usize,
        kind: &'static str,
        thickness: u32,
    },

    #[error("shape #{index} (pencil) has no points")]
    EmptyStroke { index: usize },
}

/// Coordinates and style for drag-based records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DragRecord {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    color: String,
    thickness: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TextRecord {
    x: f64,
    y: f64,
    text: String,
    color: String,
    thickness: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PointRecord {
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StrokeRecord {
    points: Vec<PointRecord>,
    color: String,
    thickness: u32,
}

/// One shape on the wire, discriminated by its `tool` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
enum ShapeRecord {
    Circle(DragRecord),
    Line(DragRecord),
    Arrow(DragRecord),
    Rect(DragRecord),
    Text(TextRecord),
    Pencil(StrokeRecord),
    DoubleArrow(DragRecord),
    DashedArrow(DragRecord),
    DashedLine(DragRecord),
}

impl DragRecord {
    fn new(start: Point, end: Point, color: &str, thickness: u32) -> Self {
        Self {
            start_x: start.x,
            start_y: start.y,
            end_x: end.x,
            end_y: end.y,
            color: color.to_string(),
            thickness,
        }
    }

    fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    fn end(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        match shape {
            Shape::Circle {
                start,
                end,
                color,
                thickness,
            } => ShapeRecord::Circle(DragRecord::new(*start, *end, color, *thickness)),
            Shape::Line {
                start,
                end,
                color,
                thickness,
            } => ShapeRecord::Line(DragRecord::new(*start, *end, color, *thickness)),
            Shape::Arrow {
                start,
                end,
                color,
                thickness,
            } => ShapeRecord::Arrow(DragRecord::new(*start, *end, color, *thickness)),
            Shape::Rect {
                start,
                end,
                color,
                thickness,
            } => ShapeRecord::Rect(DragRecord::new(*start, *end, color, *thickness)),
            Shape::Text {
                position,
                text,
                color,
                thickness,
            } => ShapeRecord::Text(TextRecord {
                x: position.x,
                y: position.y,
                text: text.clone(),
                color: color.clone(),
                thickness: *thickness,
            }),
            Shape::Freehand {
                points,
                color,
                thickness,
            } => ShapeRecord::Pencil(StrokeRecord {
                points: points.iter().map(|p| PointRecord { x: p.x, y: p.y }).collect(),
                color: color.clone(),
                thickness: *thickness,
            }),
            Shape::DoubleArrow {
                start,
                end,
                color,
                thickness,
            } => ShapeRecord::DoubleArrow(DragRecord::new(*start, *end, color, *thickness)),
            Shape::DashedArrow {
                start,
                end,
                color,
                thickness,
            } => ShapeRecord::DashedArrow(DragRecord::new(*start, *end, color, *thickness)),
            Shape::DashedLine {
                start,
                end,
                color,
                thickness,
            } => ShapeRecord::DashedLine(DragRecord::new(*start, *end, color, *thickness)),
        }
    }
}

impl From<ShapeRecord> for Shape {
    fn from(record: ShapeRecord) -> Self {
        match record {
            ShapeRecord::Circle(r) => Shape::Circle {
                start: r.start(),
                end: r.end(),
                color: r.color,
                thickness: r.thickness,
            },
            ShapeRecord::Line(r) => Shape::Line {
                start: r.start(),
                end: r.end(),
                color: r.color,
                thickness: r.thickness,
            },
            ShapeRecord::Arrow(r) => Shape::Arrow {
                start: r.start(),
                end: r.end(),
                color: r.color,
                thickness: r.thickness,
            },
            ShapeRecord::Rect(r) => Shape::Rect {
                start: r.start(),
                end: r.end(),
                color: r.color,
                thickness: r.thickness,
            },
            ShapeRecord::Text(r) => Shape::Text {
                position: Point::new(r.x, r.y),
                text: r.text,
                color: r.color,
                thickness: r.thickness,
            },
            ShapeRecord::Pencil(r) => Shape::Freehand {
                points: r.points.iter().map(|p| Point::new(p.x, p.y)).collect(),
                color: r.color,
                thickness: r.thickness,
            },
            ShapeRecord::DoubleArrow(r) => Shape::DoubleArrow {
                start: r.start(),
                end: r.end(),
                color: r.color,
                thickness: r.thickness,
            },
            ShapeRecord::DashedArrow(r) => Shape::DashedArrow {
                start: r.start(),
                end: r.end(),
                color: r.color,
                thickness: r.thickness,
            },
            ShapeRecord::DashedLine(r) => Shape::DashedLine {
                start: r.start(),
                end: r.end(),
                color: r.color,
                thickness: r.thickness,
            },
        }
    }
}

/// Serialises shapes to the exchange format, preserving order.
pub fn export_shapes(shapes: &[Shape]) -> Result<String, serde_json::Error> {
    let records: Vec<ShapeRecord> = shapes.iter().map(ShapeRecord::from).collect();
    serde_json::to_string(&records)
}

/// Parses and validates an exchange string.
///
/// Either every record is accepted or an error is returned; callers can swap
/// the result in wholesale.
pub fn parse_shapes(data: &str) -> Result<Vec<Shape>, RestoreError> {
    let records: Vec<ShapeRecord> = serde_json::from_str(data).map_err(|err| {
        warn!("Failed to load shapes: {err}");
        RestoreError::from(err)
    })?;

    let shapes: Vec<Shape> = records.into_iter().map(Shape::from).collect();
    for (index, shape) in shapes.iter().enumerate() {
        validate(index, shape).inspect_err(|err| warn!("Rejected shape data: {err}"))?;
    }

    debug!("Parsed {} shapes from exchange data", shapes.len());
    Ok(shapes)
}

/// Checks what the JSON schema cannot express. serde_json already refuses
/// non-finite numbers, so coordinates need no check here.
fn validate(index: usize, shape: &Shape) -> Result<(), RestoreError> {
    let thickness = shape.thickness();
    if !thickness_in_range(thickness) {
        return Err(RestoreError::ThicknessOutOfRange {
            index,
            kind: shape.kind_name(),
            thickness,
        });
    }

    if matches!(shape, Shape::Freehand { points, .. } if points.is_empty()) {
        return Err(RestoreError::EmptyStroke { index });
    }

    Ok(())
}
