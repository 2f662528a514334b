//! Input handling and tool state machine.
//!
//! This module translates host pointer events into annotation shapes. It keeps
//! the selected tool and style, and runs the state machine for the drag
//! lifecycle (idle, dragging, awaiting text).

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{MouseButton, PointerOutcome, TextRequest};
pub use state::{DrawingState, InputState, shape_for_drag};
pub use tool::{Tool, ToolParseError};
