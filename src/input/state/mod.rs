mod core;
mod mouse;
mod render;
mod text;

pub use core::{DrawingState, InputState};
pub use render::shape_for_drag;
