use std::cell::Cell;
use std::rc::Rc;
use vidmark::draw::{Bounds, Point, Shape};
use vidmark::input::{MouseButton, PointerOutcome, Tool};
use vidmark::session::RestoreError;
use vidmark::{Overlay, OverlayError, OverlayOptions};

fn overlay_with_size(width: f64, height: f64) -> Overlay {
    Overlay::attach(move || Bounds::new(width, height), OverlayOptions::default())
        .expect("overlay attaches")
}

/// Copy of the surface pixels. ARGB32 is stored as native-endian u32.
struct Pixels {
    data: Vec<u8>,
    stride: usize,
    width: i32,
    height: i32,
}

impl Pixels {
    fn of(overlay: &Overlay) -> Self {
        let image = overlay.surface().image();
        let mut data = Vec::new();
        image
            .with_data(|bytes| data.extend_from_slice(bytes))
            .expect("surface data readable");
        Self {
            data,
            stride: image.stride() as usize,
            width: image.width(),
            height: image.height(),
        }
    }

    /// Returns (r, g, b, a) of a pixel.
    fn at(&self, x: i32, y: i32) -> (u8, u8, u8, u8) {
        let offset = y as usize * self.stride + x as usize * 4;
        let value = u32::from_ne_bytes([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]);
        (
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
            (value >> 24) as u8,
        )
    }

    fn any_in(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
        (y0..y1).any(|y| (x0..x1).any(|x| self.at(x, y).3 > 0))
    }

    fn is_blank(&self) -> bool {
        !self.any_in(0, 0, self.width, self.height)
    }
}

fn pixel(overlay: &Overlay, x: i32, y: i32) -> (u8, u8, u8, u8) {
    Pixels::of(overlay).at(x, y)
}

fn alpha(overlay: &Overlay, x: i32, y: i32) -> u8 {
    pixel(overlay, x, y).3
}

fn region_has_pixels(overlay: &Overlay, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
    Pixels::of(overlay).any_in(x0, y0, x1, y1)
}

fn surface_is_blank(overlay: &Overlay) -> bool {
    Pixels::of(overlay).is_blank()
}

fn drag(overlay: &mut Overlay, from: (f64, f64), to: (f64, f64)) -> PointerOutcome {
    overlay.on_pointer_press(MouseButton::Left, Point::new(from.0, from.1));
    overlay.on_pointer_move(Point::new(to.0, to.1));
    overlay.on_pointer_release(MouseButton::Left, Point::new(to.0, to.1))
}

#[test]
fn fresh_overlay_is_transparent_and_sized_to_container() {
    let overlay = overlay_with_size(320.5, 180.0);
    assert_eq!(overlay.surface().width(), 321);
    assert_eq!(overlay.surface().height(), 180);
    assert_eq!(overlay.redraw_count(), 1);
    assert!(surface_is_blank(&overlay));
}

#[test]
fn committed_rect_paints_outline_only() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::Rect);
    overlay.set_color("#ff0000").unwrap();
    overlay.set_thickness(4).unwrap();

    assert_eq!(
        drag(&mut overlay, (20.0, 20.0), (120.0, 80.0)),
        PointerOutcome::Committed
    );

    let (r, g, b, a) = pixel(&overlay, 20, 50);
    assert_eq!(a, 255);
    assert_eq!((r, g, b), (255, 0, 0));
    assert_eq!(alpha(&overlay, 70, 50), 0, "rect interior stays transparent");
}

#[test]
fn rect_drawn_right_to_left_covers_same_area() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::Rect);
    drag(&mut overlay, (120.0, 80.0), (20.0, 20.0));

    assert!(alpha(&overlay, 20, 50) > 0);
    assert!(alpha(&overlay, 120, 50) > 0);
    assert_eq!(alpha(&overlay, 70, 50), 0);
}

#[test]
fn circle_is_centred_on_press_point() {
    let mut overlay = overlay_with_size(320.0, 240.0);
    overlay.set_tool(Tool::Circle);
    drag(&mut overlay, (100.0, 100.0), (130.0, 140.0));

    // radius 50 around (100, 100)
    assert!(alpha(&overlay, 150, 100) > 0);
    assert!(alpha(&overlay, 100, 50) > 0);
    assert_eq!(alpha(&overlay, 100, 100), 0);
    assert_eq!(alpha(&overlay, 125, 100), 0);
}

#[test]
fn arrow_paints_shaft_and_head() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::Arrow);
    drag(&mut overlay, (20.0, 90.0), (220.0, 90.0));

    assert!(alpha(&overlay, 120, 90) > 0, "shaft");
    // Wings reach back 18px at 30 degrees: around (204.4, 81) and (204.4, 99).
    assert!(region_has_pixels(&overlay, 202, 78, 208, 84));
    assert!(region_has_pixels(&overlay, 202, 96, 208, 102));
}

#[test]
fn drag_preview_is_painted_but_not_committed() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::Line);
    overlay.on_pointer_press(MouseButton::Left, Point::new(10.0, 50.0));
    overlay.on_pointer_move(Point::new(200.0, 50.0));

    assert!(overlay.is_dragging());
    assert!(overlay.shapes().is_empty());
    assert!(alpha(&overlay, 100, 50) > 0);

    overlay.on_pointer_leave();
    assert!(!overlay.is_dragging());
    assert!(surface_is_blank(&overlay));
}

#[test]
fn small_drag_leaves_surface_blank() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::Line);

    assert_eq!(
        drag(&mut overlay, (50.0, 50.0), (53.0, 54.0)),
        PointerOutcome::Discarded
    );
    assert!(overlay.shapes().is_empty());
    assert!(surface_is_blank(&overlay));
}

#[test]
fn text_label_is_painted_at_baseline() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::Text);

    let outcome = overlay.on_pointer_press(MouseButton::Left, Point::new(50.0, 100.0));
    assert!(matches!(outcome, PointerOutcome::TextRequested(_)));
    assert!(overlay.submit_text("Offside"));

    assert_eq!(overlay.shapes().len(), 1);
    assert!(region_has_pixels(&overlay, 50, 75, 200, 101));
    assert!(!region_has_pixels(&overlay, 0, 110, 320, 180));
}

#[test]
fn resize_repaints_committed_shapes_at_original_coordinates() {
    let bounds = Rc::new(Cell::new(Bounds::new(320.0, 180.0)));
    let shared = Rc::clone(&bounds);
    let mut overlay =
        Overlay::attach(move || shared.get(), OverlayOptions::default()).expect("overlay");

    let data = r##"[
        {"tool": "line", "startX": 10, "startY": 50, "endX": 200, "endY": 50, "color": "#00ff00", "thickness": 3},
        {"tool": "rect", "startX": 20, "startY": 20, "endX": 120, "endY": 80, "color": "#ff0000", "thickness": 4},
        {"tool": "line", "startX": 10, "startY": 300, "endX": 600, "endY": 300, "color": "#0000ff", "thickness": 3}
    ]"##;
    assert_eq!(overlay.restore(data).unwrap(), 3);

    bounds.set(Bounds::new(640.0, 360.0));
    let before = overlay.redraw_count();
    overlay.on_container_resized().unwrap();

    assert_eq!(overlay.surface().width(), 640);
    assert_eq!(overlay.surface().height(), 360);
    assert_eq!(overlay.redraw_count(), before + 1);
    assert_eq!(overlay.shapes().len(), 3);

    assert!(alpha(&overlay, 100, 50) > 0);
    assert!(alpha(&overlay, 20, 60) > 0);
    let (_, _, b, a) = pixel(&overlay, 500, 300);
    assert_eq!((b, a), (255, 255), "shape outside the old bounds is now visible");
}

#[test]
fn resize_to_same_size_does_not_repaint() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    let before = overlay.redraw_count();
    overlay.on_container_resized().unwrap();
    assert_eq!(overlay.redraw_count(), before);
}

#[test]
fn failed_restore_keeps_shapes_and_pixels() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::Line);
    drag(&mut overlay, (10.0, 50.0), (200.0, 50.0));
    let before = overlay.redraw_count();

    let err = overlay.restore("{not json").unwrap_err();
    assert!(matches!(err, OverlayError::Restore(_)));

    assert_eq!(overlay.shapes().len(), 1);
    assert_eq!(overlay.redraw_count(), before);
    assert!(alpha(&overlay, 100, 50) > 0);
}

#[test]
fn clear_all_blanks_surface_and_exports_empty_list() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::Circle);
    drag(&mut overlay, (100.0, 90.0), (130.0, 90.0));
    assert!(!surface_is_blank(&overlay));

    overlay.clear_all();
    assert!(overlay.shapes().is_empty());
    assert!(surface_is_blank(&overlay));
    assert_eq!(overlay.export().unwrap(), "[]");
}

#[test]
fn export_restores_into_another_overlay() {
    let mut source = overlay_with_size(320.0, 180.0);
    source.set_tool(Tool::Arrow);
    source.set_color("yellow").unwrap();
    drag(&mut source, (10.0, 10.0), (100.0, 120.0));
    source.set_tool(Tool::Text);
    source.on_pointer_press(MouseButton::Left, Point::new(40.0, 150.0));
    source.submit_text("Press here");

    let json = source.export().unwrap();

    let mut target = overlay_with_size(320.0, 180.0);
    assert_eq!(target.restore(&json).unwrap(), 2);
    assert_eq!(target.shapes(), source.shapes());
    assert!(matches!(target.shapes()[0], Shape::Arrow { .. }));
    assert_eq!(target.shapes()[0].color(), "yellow");
}

#[test]
fn unparseable_colour_in_restored_data_paints_green() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    let data = r#"[{"tool": "line", "startX": 10, "startY": 50, "endX": 200, "endY": 50,
                    "color": "not-a-colour", "thickness": 3}]"#;
    overlay.restore(data).unwrap();

    assert_eq!(overlay.shapes()[0].color(), "not-a-colour");
    assert_eq!(pixel(&overlay, 100, 50), (0, 255, 0, 255));
}

#[test]
fn invalid_bounds_fail_to_attach() {
    let result = Overlay::attach(|| Bounds::new(f64::NAN, 10.0), OverlayOptions::default());
    assert!(matches!(result, Err(OverlayError::Surface(_))));
}

#[test]
fn pencil_stroke_follows_the_pointer_path() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::Pencil);

    overlay.on_pointer_press(MouseButton::Left, Point::new(20.0, 20.0));
    overlay.on_pointer_move(Point::new(60.0, 20.0));
    overlay.on_pointer_move(Point::new(60.0, 60.0));
    assert_eq!(
        overlay.on_pointer_release(MouseButton::Left, Point::new(60.0, 60.0)),
        PointerOutcome::Committed
    );

    assert!(matches!(overlay.shapes()[0], Shape::Freehand { .. }));
    assert!(alpha(&overlay, 40, 20) > 0);
    assert!(alpha(&overlay, 60, 40) > 0);
    assert_eq!(alpha(&overlay, 40, 40), 0, "no chord between the ends");
}

#[test]
fn double_arrow_has_heads_at_both_ends() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::DoubleArrow);
    drag(&mut overlay, (20.0, 90.0), (220.0, 90.0));

    let pixels = Pixels::of(&overlay);
    assert!(pixels.at(120, 90).3 > 0, "shaft");
    assert!(pixels.any_in(202, 78, 208, 84));
    assert!(pixels.any_in(202, 96, 208, 102));
    // Start wings mirror the end ones around (35.6, 81) and (35.6, 99).
    assert!(pixels.any_in(32, 78, 38, 84));
    assert!(pixels.any_in(32, 96, 38, 102));
}

#[test]
fn dashed_line_leaves_gaps() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::DashedLine);
    overlay.set_thickness(4).unwrap();
    drag(&mut overlay, (20.0, 90.0), (220.0, 90.0));

    // 16px on, 8px off; round caps shrink the first gap to x = 38..42.
    let pixels = Pixels::of(&overlay);
    assert!(pixels.at(28, 90).3 > 0);
    assert_eq!(pixels.at(40, 90).3, 0);
    assert!(pixels.at(52, 90).3 > 0);
}

#[test]
fn dashed_arrow_has_dashed_shaft_and_solid_head() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::DashedArrow);
    overlay.set_thickness(4).unwrap();
    drag(&mut overlay, (20.0, 90.0), (220.0, 90.0));

    let pixels = Pixels::of(&overlay);
    assert!(pixels.at(28, 90).3 > 0);
    assert_eq!(pixels.at(40, 90).3, 0, "gap in the shaft");
    // Wings are 19px long; both reach their tips around (203.5, 80.5) and (203.5, 99.5).
    assert!(pixels.any_in(202, 78, 207, 84));
    assert!(pixels.any_in(202, 97, 207, 103));
    assert!(pixels.at(212, 86).3 > 0);
    assert!(pixels.at(212, 94).3 > 0);
}

#[test]
fn hidden_overlay_paints_nothing_but_keeps_shapes() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::Line);
    drag(&mut overlay, (10.0, 50.0), (200.0, 50.0));

    overlay.set_visible(false);
    assert!(!overlay.is_visible());
    assert!(!overlay.captures_pointer());
    assert!(surface_is_blank(&overlay));
    assert_eq!(overlay.shapes().len(), 1);

    assert_eq!(
        drag(&mut overlay, (10.0, 120.0), (200.0, 120.0)),
        PointerOutcome::Ignored
    );
    assert_eq!(overlay.shapes().len(), 1);

    overlay.set_visible(true);
    assert!(overlay.captures_pointer());
    assert!(alpha(&overlay, 100, 50) > 0);
    assert_eq!(alpha(&overlay, 100, 120), 0);
}

#[test]
fn shapes_restored_while_hidden_show_up_when_visible() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_visible(false);

    let data = r##"[{"tool": "line", "startX": 10, "startY": 50, "endX": 200, "endY": 50,
                    "color": "#ffffff", "thickness": 3}]"##;
    assert_eq!(overlay.restore(data).unwrap(), 1);
    assert!(surface_is_blank(&overlay));

    overlay.set_visible(true);
    assert_eq!(pixel(&overlay, 100, 50), (255, 255, 255, 255));
}

#[test]
fn restore_rejects_oversized_thickness_and_keeps_state() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    overlay.set_tool(Tool::Line);
    drag(&mut overlay, (10.0, 50.0), (200.0, 50.0));
    let before = overlay.redraw_count();

    let data = r#"[{"tool": "line", "startX": 0, "startY": 0, "endX": 300, "endY": 170,
                    "color": "red", "thickness": 4294967295}]"#;
    let err = overlay.restore(data).unwrap_err();
    assert!(matches!(
        err,
        OverlayError::Restore(RestoreError::ThicknessOutOfRange { .. })
    ));

    assert_eq!(overlay.shapes().len(), 1);
    assert_eq!(overlay.redraw_count(), before);
    assert!(alpha(&overlay, 100, 50) > 0);
}

#[test]
fn successful_operations_leave_no_repaint_pending() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    assert!(!overlay.repaint_pending());

    overlay.set_tool(Tool::Rect);
    drag(&mut overlay, (20.0, 20.0), (120.0, 80.0));
    assert!(!overlay.repaint_pending());

    let data = overlay.export().unwrap();
    overlay.restore(&data).unwrap();
    overlay.set_visible(false);
    assert!(!overlay.repaint_pending());
}

#[test]
fn oversized_thickness_is_rejected_interactively() {
    let mut overlay = overlay_with_size(320.0, 180.0);
    let err = overlay.set_thickness(51).unwrap_err();
    assert!(matches!(err, OverlayError::Style(_)));
    assert_eq!(overlay.style().thickness(), 3);
}
