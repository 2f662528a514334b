//! Cairo-based rendering functions for shapes.

use super::color::{Color, DEFAULT_ANNOTATION_COLOR, GREEN};
use super::font::FontDescriptor;
use super::shape::{Point, Shape};
use crate::util;

/// Font size in pixels for a text annotation of the given thickness.
pub fn text_font_size(thickness: u32) -> f64 {
    16.0 + 2.0 * f64::from(thickness)
}

/// Clears the entire surface to full transparency.
pub fn clear_surface(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer), each
/// with its own stored color and thickness.
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape], font: &FontDescriptor) {
    for shape in shapes {
        render_shape(ctx, shape, font);
    }
}

/// Renders a single shape to a Cairo context.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, font: &FontDescriptor) {
    match shape {
        Shape::Circle {
            start,
            end,
            color,
            thickness,
        } => render_circle(ctx, *start, *end, color, *thickness),
        Shape::Line {
            start,
            end,
            color,
            thickness,
        } => render_line(ctx, *start, *end, color, *thickness),
        Shape::Arrow {
            start,
            end,
            color,
            thickness,
        } => render_arrow(ctx, *start, *end, color, *thickness),
        Shape::Rect {
            start,
            end,
            color,
            thickness,
        } => render_rect(ctx, *start, *end, color, *thickness),
        Shape::Text {
            position,
            text,
            color,
            thickness,
        } => render_text(ctx, *position, text, color, *thickness, font),
        Shape::Freehand {
            points,
            color,
            thickness,
        } => render_freehand(ctx, points, color, *thickness),
        Shape::DoubleArrow {
            start,
            end,
            color,
            thickness,
        } => render_double_arrow(ctx, *start, *end, color, *thickness),
        Shape::DashedArrow {
            start,
            end,
            color,
            thickness,
        } => render_dashed_arrow(ctx, *start, *end, color, *thickness),
        Shape::DashedLine {
            start,
            end,
            color,
            thickness,
        } => render_dashed_line(ctx, *start, *end, color, *thickness),
    }
}

/// Resolves stored colour text, falling back to the default annotation green.
fn resolve_color(text: &str) -> Color {
    Color::parse(text).unwrap_or_else(|| {
        log::warn!("Unrecognised color '{text}', painting with {DEFAULT_ANNOTATION_COLOR}");
        GREEN
    })
}

/// Applies source color, stroke width and round caps/joins.
fn apply_stroke(ctx: &cairo::Context, color: &str, thickness: u32) {
    let color = resolve_color(color);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(f64::from(thickness));
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
}

/// Render a circle centred on `start` through `end`
fn render_circle(ctx: &cairo::Context, start: Point, end: Point, color: &str, thickness: u32) {
    let radius = util::circle_radius(start, end);
    if radius <= 0.0 {
        return;
    }

    apply_stroke(ctx, color, thickness);
    ctx.new_sub_path();
    ctx.arc(start.x, start.y, radius, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.stroke();
}

/// Render a straight line
fn render_line(ctx: &cairo::Context, start: Point, end: Point, color: &str, thickness: u32) {
    apply_stroke(ctx, color, thickness);
    ctx.move_to(start.x, start.y);
    ctx.line_to(end.x, end.y);
    let _ = ctx.stroke();
}

/// Render an arrow: the shaft plus two independent wing strokes at `end`
fn render_arrow(ctx: &cairo::Context, start: Point, end: Point, color: &str, thickness: u32) {
    apply_stroke(ctx, color, thickness);
    for segment in util::arrow_segments(start, end, thickness) {
        stroke_segment(ctx, segment);
    }
}

/// Render a double-headed arrow
fn render_double_arrow(
    ctx: &cairo::Context,
    start: Point,
    end: Point,
    color: &str,
    thickness: u32,
) {
    apply_stroke(ctx, color, thickness);
    for segment in util::double_arrow_segments(start, end, thickness) {
        stroke_segment(ctx, segment);
    }
}

/// Render an arrow with a dashed shaft and solid wings
fn render_dashed_arrow(
    ctx: &cairo::Context,
    start: Point,
    end: Point,
    color: &str,
    thickness: u32,
) {
    apply_stroke(ctx, color, thickness);
    let [shaft, left, right] = util::arrow_segments(start, end, thickness);

    ctx.set_dash(&util::dash_pattern(thickness), 0.0);
    stroke_segment(ctx, shaft);
    ctx.set_dash(&[], 0.0);

    stroke_segment(ctx, left);
    stroke_segment(ctx, right);
}

/// Render a dashed straight line
fn render_dashed_line(
    ctx: &cairo::Context,
    start: Point,
    end: Point,
    color: &str,
    thickness: u32,
) {
    apply_stroke(ctx, color, thickness);
    ctx.set_dash(&util::dash_pattern(thickness), 0.0);
    ctx.move_to(start.x, start.y);
    ctx.line_to(end.x, end.y);
    let _ = ctx.stroke();
    ctx.set_dash(&[], 0.0);
}

/// Render a pencil stroke as a polyline through its points
fn render_freehand(ctx: &cairo::Context, points: &[Point], color: &str, thickness: u32) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    apply_stroke(ctx, color, thickness);
    ctx.move_to(first.x, first.y);
    if rest.is_empty() {
        // Single point: a zero-length segment gives a round dot.
        ctx.line_to(first.x, first.y);
    }
    for point in rest {
        ctx.line_to(point.x, point.y);
    }
    let _ = ctx.stroke();
}

fn stroke_segment(ctx: &cairo::Context, segment: util::Segment) {
    ctx.move_to(segment.from.x, segment.from.y);
    ctx.line_to(segment.to.x, segment.to.y);
    let _ = ctx.stroke();
}

/// Render a rectangle outline from two opposite corners
fn render_rect(ctx: &cairo::Context, start: Point, end: Point, color: &str, thickness: u32) {
    apply_stroke(ctx, color, thickness);

    // Corners may come in any order; normalise before building the path.
    let (x, y, width, height) = util::normalized_rect(start, end);
    ctx.rectangle(x, y, width, height);
    let _ = ctx.stroke();
}

/// Renders a text label with its baseline starting at `position`.
///
/// The font size is `16 + 2 × thickness` pixels. Newlines are laid out by Pango.
pub fn render_text(
    ctx: &cairo::Context,
    position: Point,
    text: &str,
    color: &str,
    thickness: u32,
    font: &FontDescriptor,
) {
    if text.is_empty() {
        return;
    }

    // Save context state to prevent settings from leaking to other drawing operations
    let _ = ctx.save();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = font.to_pango_description(text_font_size(thickness));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    // Pango positions layouts by their top-left corner; shift up to the baseline.
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

    let color = resolve_color(color);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.move_to(position.x, position.y - baseline);
    pangocairo::functions::show_layout(ctx, &layout);

    let _ = ctx.restore();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_size_scales_with_thickness() {
        assert_eq!(text_font_size(1), 18.0);
        assert_eq!(text_font_size(3), 22.0);
        assert_eq!(text_font_size(10), 36.0);
    }

    #[test]
    fn unknown_color_falls_back_to_green() {
        assert_eq!(resolve_color("definitely not a color"), GREEN);
        assert_eq!(resolve_color("#0000ff").b, 1.0);
    }
}
