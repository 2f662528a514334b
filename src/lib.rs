//! Video annotation overlay engine.
//!
//! Hosts attach an [`Overlay`] to the element that displays a video, forward
//! pointer events to it, and composite its Cairo surface over the frame. Shapes
//! can be exported to and restored from a JSON exchange format.

pub mod config;
pub mod draw;
pub mod input;
pub mod overlay;
pub mod session;
pub mod util;

pub use config::Config;
pub use overlay::{Overlay, OverlayError, OverlayOptions};
