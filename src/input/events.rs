//! Generic pointer event types and state machine outcomes.

use crate::draw::Point;

/// Pointer button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button (draws)
    Left,
    /// Secondary button (cancels an in-flight drag)
    Right,
    /// Middle button (ignored)
    Middle,
}

/// Result of feeding a pointer event to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerOutcome {
    /// Nothing changed
    Ignored,
    /// A drag started at the press point
    DragStarted,
    /// The in-progress drag moved; a preview repaint is due
    Preview,
    /// A shape was appended to the shape list
    Committed,
    /// The drag ended without producing a shape
    Discarded,
    /// The text tool needs a string from the host for this position
    TextRequested(TextRequest),
}

/// Pending request for text label content.
///
/// Answer it with [`crate::input::InputState::submit_text`] or
/// [`crate::input::InputState::cancel_text`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRequest {
    /// Where the label will be placed
    pub position: Point,
}
