//! Keeps the overlay's pixel buffer sized to its reference container.

use log::{debug, info};
use std::io::Write;
use thiserror::Error;

/// Bounding box of the reference container in CSS-style pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Element the drawing surface is sized against (typically the video container).
///
/// Implemented for any `Fn() -> Bounds`, so hosts can pass a closure that reads
/// the container's current bounding box.
pub trait ReferenceContainer {
    /// Current bounding box of the container.
    fn bounds(&self) -> Bounds;
}

impl<F> ReferenceContainer for F
where
    F: Fn() -> Bounds,
{
    fn bounds(&self) -> Bounds {
        self()
    }
}

/// Errors from creating or resizing the drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("container bounds {width}x{height} cannot back a drawing surface")]
    InvalidBounds { width: f64, height: f64 },

    #[error("Cairo surface error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode surface as PNG: {0}")]
    Png(#[from] cairo::IoError),
}

/// Tracks the reference container and the image surface matched to it.
///
/// Recreating the image surface discards every painted pixel, so callers must
/// repaint all committed shapes whenever [`CanvasSurface::sync_to_container`]
/// reports a change.
pub struct CanvasSurface {
    container: Box<dyn ReferenceContainer>,
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl std::fmt::Debug for CanvasSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl CanvasSurface {
    /// Creates a surface matching the container's current bounding box.
    pub fn attach(container: Box<dyn ReferenceContainer>) -> Result<Self, SurfaceError> {
        let (width, height) = pixel_size(container.bounds())?;
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        info!("Attached drawing surface ({width}x{height})");

        Ok(Self {
            container,
            surface,
            width,
            height,
        })
    }

    /// Re-reads the container bounds and recreates the pixel buffer if the size changed.
    ///
    /// Returns `true` if the buffer was recreated (and is therefore blank).
    pub fn sync_to_container(&mut self) -> Result<bool, SurfaceError> {
        let (width, height) = pixel_size(self.container.bounds())?;
        if width == self.width && height == self.height {
            debug!("Container resize kept surface at {width}x{height}");
            return Ok(false);
        }

        self.surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        info!(
            "Resized drawing surface {}x{} -> {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        Ok(true)
    }

    /// Surface width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The backing image surface, for compositing over the video frame.
    pub fn image(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Creates a drawing context targeting the current buffer.
    pub fn context(&self) -> Result<cairo::Context, SurfaceError> {
        Ok(cairo::Context::new(&self.surface)?)
    }

    /// Encodes the current buffer as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), SurfaceError> {
        self.surface.write_to_png(writer)?;
        Ok(())
    }
}

/// Converts container bounds to whole pixels, rounding fractional sizes up.
fn pixel_size(bounds: Bounds) -> Result<(i32, i32), SurfaceError> {
    let valid = |v: f64| v.is_finite() && v >= 0.0 && v.ceil() <= f64::from(i32::MAX);
    if !valid(bounds.width) || !valid(bounds.height) {
        return Err(SurfaceError::InvalidBounds {
            width: bounds.width,
            height: bounds.height,
        });
    }
    Ok((bounds.width.ceil() as i32, bounds.height.ceil() as i32))
}
