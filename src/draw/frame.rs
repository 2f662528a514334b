//! Frame container for the committed shape list.

use super::shape::Shape;

/// Ordered collection of committed annotations.
///
/// Shapes are stored in paint order (first = bottom layer, last = top layer).
/// The list only changes by appending a committed shape or by replacing the
/// whole list; individual shapes are never edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Appends a committed shape on top of existing shapes.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes all shapes from the frame.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Replaces the whole shape list, returning the previous one.
    pub fn replace(&mut self, shapes: Vec<Shape>) -> Vec<Shape> {
        std::mem::replace(&mut self.shapes, shapes)
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
