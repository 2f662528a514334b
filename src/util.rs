//! Utility functions for colors and annotation geometry.
//!
//! This module provides:
//! - Color name lookup for configuration and CSS-style colour text
//! - Drag threshold checks
//! - Circle, rectangle and arrowhead geometry shared by rendering and tests

use crate::draw::{Color, Point, color::*};
use std::f64::consts::PI;

// ============================================================================
// Drag Geometry
// ============================================================================

/// Minimum extent (in pixels, exclusive) a drag must cover on either axis to commit.
pub const DRAG_COMMIT_THRESHOLD: f64 = 5.0;

/// Returns whether a drag from `start` to `end` is large enough to become a shape.
///
/// A drag commits when `|dx| > 5` or `|dy| > 5`. Anything smaller is treated as
/// an accidental click.
pub fn exceeds_drag_threshold(start: Point, end: Point) -> bool {
    (end.x - start.x).abs() > DRAG_COMMIT_THRESHOLD
        || (end.y - start.y).abs() > DRAG_COMMIT_THRESHOLD
}

/// Minimum path length (in pixels, exclusive) a pencil stroke needs to commit.
pub const FREEHAND_MIN_LENGTH: f64 = 2.0;

/// Total length of the polyline through `points`.
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(pair[1]))
        .sum()
}

/// Radius of a circle centred on `start` passing through `end`.
pub fn circle_radius(start: Point, end: Point) -> f64 {
    start.distance_to(end)
}

/// Normalises two opposite corners into `(x, y, width, height)` with non-negative size.
pub fn normalized_rect(start: Point, end: Point) -> (f64, f64, f64, f64) {
    let x = start.x.min(end.x);
    let y = start.y.min(end.y);
    let width = (end.x - start.x).abs();
    let height = (end.y - start.y).abs();
    (x, y, width, height)
}

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Angle between each arrowhead wing and the reversed shaft (30 degrees).
pub const ARROWHEAD_ANGLE: f64 = PI / 6.0;

/// Base arrowhead wing length; the stroke thickness is added on top.
pub const ARROWHEAD_BASE_LENGTH: f64 = 15.0;

/// A straight stroked segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }
}

/// Wing length for an arrow drawn with the given stroke thickness.
pub fn arrowhead_length(thickness: u32) -> f64 {
    ARROWHEAD_BASE_LENGTH + f64::from(thickness)
}

/// Calculates the two arrowhead wing endpoints for an arrow pointing at `end`.
///
/// The wings leave `end` heading back toward the shaft, rotated by
/// ±[`ARROWHEAD_ANGLE`] from the reversed shaft direction. Their length is
/// `15 + thickness` regardless of how long the shaft is.
///
/// Returns `[left, right]` wing tips. A zero-length shaft uses an angle of 0,
/// so the wings still point left of `end`.
pub fn arrowhead_wings(start: Point, end: Point, thickness: u32) -> [Point; 2] {
    let angle = (end.y - start.y).atan2(end.x - start.x);
    let length = arrowhead_length(thickness);

    let left = Point::new(
        end.x - length * (angle - ARROWHEAD_ANGLE).cos(),
        end.y - length * (angle - ARROWHEAD_ANGLE).sin(),
    );
    let right = Point::new(
        end.x - length * (angle + ARROWHEAD_ANGLE).cos(),
        end.y - length * (angle + ARROWHEAD_ANGLE).sin(),
    );

    [left, right]
}

/// All stroked segments of an arrow: the shaft followed by the two wings.
pub fn arrow_segments(start: Point, end: Point, thickness: u32) -> [Segment; 3] {
    let [left, right] = arrowhead_wings(start, end, thickness);
    [
        Segment { from: start, to: end },
        Segment { from: end, to: left },
        Segment { from: end, to: right },
    ]
}

/// Segments of an arrow with heads at both ends: the shaft, the wings at
/// `end`, then the wings at `start`.
pub fn double_arrow_segments(start: Point, end: Point, thickness: u32) -> [Segment; 5] {
    let [shaft, end_left, end_right] = arrow_segments(start, end, thickness);
    let [start_left, start_right] = arrowhead_wings(end, start, thickness);
    [
        shaft,
        end_left,
        end_right,
        Segment { from: start, to: start_left },
        Segment { from: start, to: start_right },
    ]
}

/// Dash pattern (on, off) for dashed strokes: `4 × thickness` then `2 × thickness`.
pub fn dash_pattern(thickness: u32) -> [f64; 2] {
    let width = f64::from(thickness);
    [4.0 * width, 2.0 * width]
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by configuration and by colour text parsing.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}
