//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types used for video annotation:
//! - [`Color`]: RGBA color representation parsed from stored colour text
//! - [`Shape`]: The committed annotation kinds (circle, line, arrow, rect, text)
//! - [`Frame`]: Ordered list of committed shapes
//! - [`CanvasSurface`]: Pixel buffer kept in sync with the reference container
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod font;
pub mod frame;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::FontDescriptor;
pub use frame::Frame;
pub use render::{clear_surface, render_shape, render_shapes, render_text, text_font_size};
pub use shape::{
    MAX_THICKNESS, MIN_THICKNESS, Point, Shape, Style, StyleError, thickness_in_range,
};
pub use surface::{Bounds, CanvasSurface, ReferenceContainer, SurfaceError};
