//! Owned overlay handle wiring input, rendering, surface and persistence together.
//!
//! Each [`Overlay`] owns one drawing surface and one shape list. Hosts create as
//! many as they need (one per video view) and drive them from their UI thread.
//!
//! Repaints never fail an operation. If Cairo cannot hand out a context the
//! error is logged and the repaint stays pending until the next flush.

use crate::draw::{
    CanvasSurface, FontDescriptor, Point, ReferenceContainer, Shape, Style, StyleError,
    SurfaceError, clear_surface, render_shapes,
};
use crate::input::{InputState, MouseButton, PointerOutcome, TextRequest, Tool, ToolParseError};
use crate::session::{self, RestoreError};
use log::{info, warn};
use thiserror::Error;

/// Errors surfaced by overlay operations.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("drawing surface unavailable: {0}")]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Restore(#[from] RestoreError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Tool(#[from] ToolParseError),

    #[error("failed to serialise shapes: {0}")]
    Export(#[from] serde_json::Error),
}

/// Construction-time settings for an overlay.
#[derive(Debug, Clone, Default)]
pub struct OverlayOptions {
    /// Tool selected when the overlay attaches
    pub tool: Tool,
    /// Style applied to the first shapes drawn
    pub style: Style,
    /// Font used for text labels
    pub font: FontDescriptor,
}

/// A video annotation overlay bound to one reference container.
#[derive(Debug)]
pub struct Overlay {
    input: InputState,
    surface: CanvasSurface,
    font: FontDescriptor,
    redraw_count: u64,
}

impl Overlay {
    /// Attaches an overlay to `container`, sizing the surface to it and painting once.
    ///
    /// # Errors
    /// Fails if the container reports unusable bounds or Cairo cannot allocate
    /// the surface.
    pub fn attach(
        container: impl ReferenceContainer + 'static,
        options: OverlayOptions,
    ) -> Result<Self, OverlayError> {
        let surface = CanvasSurface::attach(Box::new(container))?;
        let mut overlay = Self {
            input: InputState::new(options.tool, options.style),
            surface,
            font: options.font,
            redraw_count: 0,
        };
        overlay.repaint();
        Ok(overlay)
    }

    // ------------------------------------------------------------------
    // Tool and style selection
    // ------------------------------------------------------------------

    pub fn tool(&self) -> Tool {
        self.input.active_tool()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.input.set_tool(tool);
    }

    /// Selects a tool by its host-facing name (`none`, `circle`, `line`, ...).
    pub fn set_tool_by_name(&mut self, name: &str) -> Result<(), OverlayError> {
        let tool = name.parse()?;
        self.set_tool(tool);
        Ok(())
    }

    pub fn style(&self) -> &Style {
        self.input.active_style()
    }

    pub fn set_style(&mut self, style: Style) {
        self.input.set_style(style);
        self.flush();
    }

    pub fn set_color(&mut self, color: &str) -> Result<(), OverlayError> {
        self.input.set_color(color)?;
        self.flush();
        Ok(())
    }

    pub fn set_thickness(&mut self, thickness: u32) -> Result<(), OverlayError> {
        self.input.set_thickness(thickness)?;
        self.flush();
        Ok(())
    }

    /// Whether pointer events should be routed to the overlay rather than the video.
    pub fn captures_pointer(&self) -> bool {
        self.input.captures_pointer()
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    /// Shows or hides every drawing. Hidden overlays keep their shapes, paint
    /// nothing and let pointer input through to the video.
    pub fn set_visible(&mut self, visible: bool) {
        self.input.set_visible(visible);
        self.flush();
    }

    pub fn is_visible(&self) -> bool {
        self.input.is_visible()
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    pub fn on_pointer_press(&mut self, button: MouseButton, point: Point) -> PointerOutcome {
        let outcome = self.input.on_mouse_press(button, point);
        self.flush();
        outcome
    }

    pub fn on_pointer_move(&mut self, point: Point) -> PointerOutcome {
        let outcome = self.input.on_mouse_motion(point);
        self.flush();
        outcome
    }

    pub fn on_pointer_release(&mut self, button: MouseButton, point: Point) -> PointerOutcome {
        let outcome = self.input.on_mouse_release(button, point);
        self.flush();
        outcome
    }

    pub fn on_pointer_leave(&mut self) -> PointerOutcome {
        let outcome = self.input.on_pointer_leave();
        self.flush();
        outcome
    }

    // ------------------------------------------------------------------
    // Text requests
    // ------------------------------------------------------------------

    pub fn pending_text_request(&self) -> Option<TextRequest> {
        self.input.pending_text_request()
    }

    /// Answers the pending text request. Returns `true` if a label was created.
    pub fn submit_text(&mut self, text: &str) -> bool {
        let created = self.input.submit_text(text);
        self.flush();
        created
    }

    pub fn cancel_text(&mut self) {
        self.input.cancel_text();
    }

    // ------------------------------------------------------------------
    // Surface management
    // ------------------------------------------------------------------

    /// Re-syncs the surface with the container after the host observed a resize.
    ///
    /// A changed size recreates the pixel buffer and repaints every committed
    /// shape at its original pixel coordinates.
    pub fn on_container_resized(&mut self) -> Result<(), OverlayError> {
        if self.surface.sync_to_container()? {
            self.input.needs_redraw = true;
        }
        self.flush();
        Ok(())
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    /// Number of repaints performed so far.
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    /// Whether a repaint failed and is waiting for the next flush.
    pub fn repaint_pending(&self) -> bool {
        self.input.needs_redraw
    }

    // ------------------------------------------------------------------
    // Shapes and persistence
    // ------------------------------------------------------------------

    pub fn shapes(&self) -> &[Shape] {
        self.input.shapes()
    }

    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    /// Removes every shape and repaints.
    pub fn clear_all(&mut self) {
        self.input.clear_all();
        self.flush();
    }

    /// Serialises the committed shapes to the exchange format.
    pub fn export(&self) -> Result<String, OverlayError> {
        Ok(session::export_shapes(self.input.shapes())?)
    }

    /// Replaces all shapes with the parsed contents of `data` and repaints.
    ///
    /// On failure the current shapes stay untouched and nothing is repainted.
    /// Once the data is accepted the call succeeds; a repaint that cannot run
    /// stays pending (see [`Overlay::repaint_pending`]).
    /// Returns the number of shapes loaded.
    pub fn restore(&mut self, data: &str) -> Result<usize, OverlayError> {
        let shapes = session::parse_shapes(data)?;
        let count = shapes.len();
        self.input.replace_shapes(shapes);
        info!("Loaded {count} shapes");
        self.flush();
        Ok(count)
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Repaints if the state machine asked for it, or if an earlier repaint failed.
    fn flush(&mut self) {
        if self.input.needs_redraw {
            self.repaint();
        }
    }

    /// Full redraw of committed shapes, plus the drag preview when one is active.
    /// A hidden overlay is cleared and left blank.
    fn repaint(&mut self) {
        let ctx = match self.surface.context() {
            Ok(ctx) => ctx,
            Err(err) => {
                warn!("Repaint failed, will retry on next update: {err}");
                return;
            }
        };
        clear_surface(&ctx);
        if self.input.is_visible() {
            render_shapes(&ctx, self.input.shapes(), &self.font);
            self.input.render_provisional_shape(&ctx, &self.font);
        }
        if let Err(err) = ctx.status() {
            warn!("Cairo reported an error while repainting: {err}");
        }
        drop(ctx);
        self.surface.image().flush();

        self.input.needs_redraw = false;
        self.redraw_count += 1;
    }
}
