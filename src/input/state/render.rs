use crate::draw::{FontDescriptor, Point, Shape, Style, render_shape};
use crate::input::tool::Tool;

use super::{DrawingState, InputState};

/// Builds the shape a straight drag with `tool` from `start` to `end` produces.
///
/// Returns `None` for pencil strokes (built from their recorded points) and for
/// tools that do not create shapes by dragging.
pub fn shape_for_drag(tool: Tool, start: Point, end: Point, style: &Style) -> Option<Shape> {
    let color = style.color().to_string();
    let thickness = style.thickness();

    match tool {
        Tool::Circle => Some(Shape::Circle {
            start,
            end,
            color,
            thickness,
        }),
        Tool::Line => Some(Shape::Line {
            start,
            end,
            color,
            thickness,
        }),
        Tool::Arrow => Some(Shape::Arrow {
            start,
            end,
            color,
            thickness,
        }),
        Tool::Rect => Some(Shape::Rect {
            start,
            end,
            color,
            thickness,
        }),
        Tool::DoubleArrow => Some(Shape::DoubleArrow {
            start,
            end,
            color,
            thickness,
        }),
        Tool::DashedArrow => Some(Shape::DashedArrow {
            start,
            end,
            color,
            thickness,
        }),
        Tool::DashedLine => Some(Shape::DashedLine {
            start,
            end,
            color,
            thickness,
        }),
        Tool::Pencil | Tool::Text | Tool::None => None,
    }
}

impl InputState {
    /// Returns the shape currently being dragged out, for live preview.
    ///
    /// Uses the active style, so a style change mid-drag shows immediately.
    /// The preview is never added to the committed shapes.
    pub fn provisional_shape(&self) -> Option<Shape> {
        let DrawingState::Drawing {
            tool,
            start,
            current,
            points,
        } = &self.state
        else {
            return None;
        };

        if *tool == Tool::Pencil {
            let style = self.active_style();
            return Some(Shape::Freehand {
                points: points.clone(),
                color: style.color().to_string(),
                thickness: style.thickness(),
            });
        }
        shape_for_drag(*tool, *start, *current, self.active_style())
    }

    /// Renders the provisional shape on top of whatever is already painted.
    ///
    /// # Returns
    /// `true` if a provisional shape was rendered, `false` otherwise
    pub fn render_provisional_shape(&self, ctx: &cairo::Context, font: &FontDescriptor) -> bool {
        match self.provisional_shape() {
            Some(shape) => {
                render_shape(ctx, &shape, font);
                true
            }
            None => false,
        }
    }
}
