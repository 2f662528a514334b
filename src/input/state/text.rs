use crate::draw::Shape;
use crate::input::events::TextRequest;
use log::debug;

use super::{DrawingState, InputState};

impl InputState {
    /// The text request waiting for a host answer, if any.
    pub fn pending_text_request(&self) -> Option<TextRequest> {
        match self.state {
            DrawingState::AwaitingText { position } => Some(TextRequest { position }),
            _ => None,
        }
    }

    /// Answers a pending text request.
    ///
    /// Text that is empty after trimming creates nothing. Returns `true` if a
    /// text shape was committed. Without a pending request this does nothing.
    pub fn submit_text(&mut self, text: &str) -> bool {
        let DrawingState::AwaitingText { position } = self.state else {
            return false;
        };
        self.state = DrawingState::Idle;

        let text = text.trim();
        if text.is_empty() {
            debug!("Empty text submitted; no label created");
            return false;
        }

        let style = self.active_style();
        let shape = Shape::Text {
            position,
            text: text.to_string(),
            color: style.color().to_string(),
            thickness: style.thickness(),
        };
        self.commit(shape);
        true
    }

    /// Declines a pending text request without creating a shape.
    pub fn cancel_text(&mut self) {
        if matches!(self.state, DrawingState::AwaitingText { .. }) {
            debug!("Text request cancelled");
            self.state = DrawingState::Idle;
        }
    }
}
