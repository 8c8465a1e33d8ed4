//! The drawing surface contract.
//!
//! The renderer needs an immediate-mode 2D context and nothing more: set the
//! transform, clear, build and stroke a path, fill a circle, draw text.
//! Anything that can do those things can show a rosette.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Transform};

/// Font used for overlay text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Size in pixels.
    pub size: f64,
    /// CSS font-family list, e.g. `Inter, sans-serif`.
    pub family: String,
}

impl Font {
    pub fn new(size: f64, family: impl Into<String>) -> Self {
        Self {
            size,
            family: family.into(),
        }
    }
}

/// An immediate-mode 2D drawing context.
///
/// Colours are CSS colour strings. Coordinates passed to path, circle and
/// text calls are in user space and go through the current transform.
///
/// Implementations must not panic on non-finite input; ignoring the call is
/// the expected behaviour.
pub trait DrawingContext {
    /// Replace the current transform (not compose with it).
    fn set_transform(&mut self, transform: Transform);

    /// Clear a rectangle to the background.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Drop the current path and start a new one.
    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Stroke the current path once with a single colour and width.
    fn stroke(&mut self, color: &str, width: f64);

    /// Fill a full circle. Does not touch the current path.
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: &str);

    /// Reset the transform to identity.
    fn reset_transform(&mut self) {
        self.set_transform(Transform::IDENTITY);
    }
}
