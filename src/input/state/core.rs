//! Drawing state machine and input state management.

use crate::draw::{Frame, Point, Shape, Style, StyleError};
use crate::input::tool::Tool;
use log::{debug, info};

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle, dragging out a shape, or waiting for the
/// host to supply text for a label. State transitions occur on pointer events
/// and on host answers to text requests.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not dragging - waiting for a press (armed when a tool is selected)
    Idle,
    /// Pointer held down with a shape tool
    Drawing {
        /// Tool captured at press time; later tool switches do not affect this drag
        tool: Tool,
        /// Where the pointer was pressed
        start: Point,
        /// Latest pointer position
        current: Point,
        /// Every pointer position so far (pencil strokes only)
        points: Vec<Point>,
    },
    /// Text tool pressed; the host has been asked for label content
    AwaitingText {
        /// Where the label will be placed
        position: Point,
    },
}

/// Overlay state: committed shapes, tool/style selection, and the drag lifecycle.
///
/// One instance exists per overlay. It is mutated synchronously from the host's
/// UI thread and never shared.
#[derive(Debug)]
pub struct InputState {
    /// Committed shapes in paint order
    frame: Frame,
    /// Tool used for the next press
    active_tool: Tool,
    /// Style applied to newly committed shapes
    active_style: Style,
    /// Current drawing mode state machine
    pub(super) state: DrawingState,
    /// Whether drawings are shown (hidden while the video plays)
    visible: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(Tool::None, Style::default())
    }
}

impl InputState {
    /// Creates an idle state with no shapes.
    pub fn new(tool: Tool, style: Style) -> Self {
        Self {
            frame: Frame::new(),
            active_tool: tool,
            active_style: style,
            state: DrawingState::Idle,
            visible: true,
            needs_redraw: true,
        }
    }

    /// Current drawing mode.
    pub fn drawing_state(&self) -> &DrawingState {
        &self.state
    }

    /// Whether a drag is in flight.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Tool used for the next press.
    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    /// Selects the tool for subsequent presses.
    ///
    /// A drag already in flight finishes with the tool it started with.
    /// Deselecting every tool while a text request is pending cancels the request.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.active_tool != tool {
            info!("Tool set: {tool}");
        }
        self.active_tool = tool;

        if tool == Tool::None && matches!(self.state, DrawingState::AwaitingText { .. }) {
            debug!("Tool cleared while awaiting text; dropping request");
            self.state = DrawingState::Idle;
        }
    }

    /// Whether the host should route pointer events to the overlay.
    pub fn captures_pointer(&self) -> bool {
        self.visible && self.active_tool != Tool::None
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides every drawing.
    ///
    /// Hiding cancels an in-flight drag or pending text request. Shapes are kept.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        info!("Drawings {}", if visible { "shown" } else { "hidden" });
        self.visible = visible;
        if !visible {
            self.state = DrawingState::Idle;
        }
        self.needs_redraw = true;
    }

    /// Style applied to newly committed shapes.
    pub fn active_style(&self) -> &Style {
        &self.active_style
    }

    /// Replaces the style for future shapes. Committed shapes keep their own style.
    pub fn set_style(&mut self, style: Style) {
        debug!(
            "Style set: color={} thickness={}",
            style.color(),
            style.thickness()
        );
        self.active_style = style;
        if self.is_dragging() {
            self.needs_redraw = true;
        }
    }

    /// Changes only the color of the active style.
    pub fn set_color(&mut self, color: &str) -> Result<(), StyleError> {
        let style = Style::new(color, self.active_style.thickness())?;
        self.set_style(style);
        Ok(())
    }

    /// Changes only the thickness of the active style.
    pub fn set_thickness(&mut self, thickness: u32) -> Result<(), StyleError> {
        let style = Style::new(self.active_style.color(), thickness)?;
        self.set_style(style);
        Ok(())
    }

    /// Committed shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        self.frame.shapes()
    }

    /// Appends a committed shape and requests a redraw.
    pub(super) fn commit(&mut self, shape: Shape) {
        info!(
            "Shape saved: {} ({} total)",
            shape.kind_name(),
            self.frame.len() + 1
        );
        self.frame.add_shape(shape);
        self.needs_redraw = true;
    }

    /// Removes every committed shape.
    pub fn clear_all(&mut self) {
        let removed = self.frame.len();
        self.frame.clear();
        self.needs_redraw = true;
        info!("All drawings cleared ({removed} removed)");
    }

    /// Atomically replaces the committed shape list.
    pub fn replace_shapes(&mut self, shapes: Vec<Shape>) {
        self.frame.replace(shapes);
        self.needs_redraw = true;
    }
}
