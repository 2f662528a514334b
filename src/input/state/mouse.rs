use crate::draw::{Point, Shape};
use crate::input::events::{MouseButton, PointerOutcome, TextRequest};
use crate::input::tool::Tool;
use crate::util;
use log::debug;
use std::mem;

use super::{DrawingState, InputState, shape_for_drag};

impl InputState {
    /// Processes a pointer button press.
    ///
    /// # Behavior
    /// - No tool selected, or drawings hidden: ignored
    /// - Text tool: asks the host for label content (see [`InputState::submit_text`])
    /// - Drag tools: starts a drag at `point`
    /// - Right button: cancels an in-flight drag
    pub fn on_mouse_press(&mut self, button: MouseButton, point: Point) -> PointerOutcome {
        match button {
            MouseButton::Left => {}
            MouseButton::Right => return self.cancel_drag(),
            MouseButton::Middle => return PointerOutcome::Ignored,
        }

        if !self.is_visible() || !matches!(self.state, DrawingState::Idle) {
            return PointerOutcome::Ignored;
        }

        match self.active_tool() {
            Tool::Text => {
                self.state = DrawingState::AwaitingText { position: point };
                debug!("Requesting text at ({:.1}, {:.1})", point.x, point.y);
                PointerOutcome::TextRequested(TextRequest { position: point })
            }
            tool if tool.is_drag_tool() => {
                self.state = DrawingState::Drawing {
                    tool,
                    start: point,
                    current: point,
                    points: vec![point],
                };
                PointerOutcome::DragStarted
            }
            _ => PointerOutcome::Ignored,
        }
    }

    /// Processes pointer motion.
    ///
    /// While dragging, updates the current point (and extends a pencil stroke)
    /// and requests a preview repaint.
    pub fn on_mouse_motion(&mut self, point: Point) -> PointerOutcome {
        if let DrawingState::Drawing {
            tool,
            current,
            points,
            ..
        } = &mut self.state
        {
            *current = point;
            if *tool == Tool::Pencil {
                points.push(point);
            }
            self.needs_redraw = true;
            PointerOutcome::Preview
        } else {
            PointerOutcome::Ignored
        }
    }

    /// Processes a pointer button release.
    ///
    /// Finishes the drag at `point`. Straight shapes commit only when the drag
    /// covers more than 5 pixels on either axis; pencil strokes commit when
    /// their path is longer than 2 pixels. The style active now is used.
    pub fn on_mouse_release(&mut self, button: MouseButton, point: Point) -> PointerOutcome {
        if button != MouseButton::Left || !self.is_dragging() {
            return PointerOutcome::Ignored;
        }

        let DrawingState::Drawing {
            tool,
            start,
            mut points,
            ..
        } = mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return PointerOutcome::Ignored;
        };
        self.needs_redraw = true;

        let shape = if tool == Tool::Pencil {
            if points.last() != Some(&point) {
                points.push(point);
            }
            if util::path_length(&points) <= util::FREEHAND_MIN_LENGTH {
                debug!("Discarding pencil stroke below minimum length");
                return PointerOutcome::Discarded;
            }
            let style = self.active_style();
            Some(Shape::Freehand {
                points,
                color: style.color().to_string(),
                thickness: style.thickness(),
            })
        } else {
            if !util::exceeds_drag_threshold(start, point) {
                debug!("Discarding {tool} drag below threshold");
                return PointerOutcome::Discarded;
            }
            shape_for_drag(tool, start, point, self.active_style())
        };

        match shape {
            Some(shape) => {
                self.commit(shape);
                PointerOutcome::Committed
            }
            None => PointerOutcome::Discarded,
        }
    }

    /// Processes the pointer leaving the overlay; an in-flight drag is cancelled.
    pub fn on_pointer_leave(&mut self) -> PointerOutcome {
        self.cancel_drag()
    }

    fn cancel_drag(&mut self) -> PointerOutcome {
        if let DrawingState::Drawing { tool, .. } = self.state {
            debug!("Cancelled {tool} drag");
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
            PointerOutcome::Discarded
        } else {
            PointerOutcome::Ignored
        }
    }
}
