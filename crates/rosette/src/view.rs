//! View state: zoom, stroke thickness and the grid toggle.
//!
//! Lives as long as the view does and is only changed by explicit user
//! commands. It never triggers a redraw itself.

use serde::Serialize;

use crate::geometry::{Surface, Transform};

/// Multiplier applied per zoom step.
pub const ZOOM_FACTOR: f64 = 1.2;

/// Stroke thickness the view starts with.
pub const DEFAULT_THICKNESS: f64 = 3.0;

/// Thinnest allowed stroke.
pub const MIN_THICKNESS: f64 = 1.0;

/// On-screen radius of the start/end markers, before dividing by scale.
pub const MARKER_RADIUS: f64 = 5.0;

/// Zoom level, stroke thickness and grid visibility.
///
/// Scale is deliberately unbounded: zooming out far enough drives it toward
/// zero, and the reciprocal stroke width and marker radius toward infinity.
/// Backends are expected to skip strokes they can't paint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    scale: f64,
    line_thickness: f64,
    grid_visible: bool,
}

impl ViewState {
    /// Build a view from stored values.
    ///
    /// A scale that isn't finite and positive falls back to 1.0 and a
    /// thickness below the floor is raised to it.
    pub fn new(scale: f64, line_thickness: f64, grid_visible: bool) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            log::warn!("ignoring invalid scale {scale}, using 1.0");
            1.0
        };
        let line_thickness = if line_thickness.is_nan() {
            DEFAULT_THICKNESS
        } else {
            line_thickness.max(MIN_THICKNESS)
        };
        Self {
            scale,
            line_thickness,
            grid_visible,
        }
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn line_thickness(&self) -> f64 {
        self.line_thickness
    }

    #[inline]
    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn zoom_in(&mut self) {
        self.scale *= ZOOM_FACTOR;
    }

    pub fn zoom_out(&mut self) {
        self.scale /= ZOOM_FACTOR;
    }

    pub fn increase_thickness(&mut self) {
        self.line_thickness += 1.0;
    }

    /// Thin the stroke by one unit. Returns false (and changes nothing) if
    /// that would go below [`MIN_THICKNESS`].
    pub fn decrease_thickness(&mut self) -> bool {
        if self.line_thickness - 1.0 >= MIN_THICKNESS {
            self.line_thickness -= 1.0;
            true
        } else {
            false
        }
    }

    /// Flip grid visibility and return the new value.
    pub fn toggle_grid(&mut self) -> bool {
        self.grid_visible = !self.grid_visible;
        self.grid_visible
    }

    /// Caption for the grid button, reflecting the current state.
    pub fn grid_button_label(&self) -> &'static str {
        if self.grid_visible {
            "Grid Not Needed"
        } else {
            "Grid Needed"
        }
    }

    /// Zoom transform for `surface`: scale about the surface centre.
    pub fn transform_for(&self, surface: Surface) -> Transform {
        Transform::scale_about(self.scale, surface.center())
    }

    /// Spiral stroke width in scaled space, so the on-screen width stays put.
    #[inline]
    pub fn stroke_width(&self) -> f64 {
        self.line_thickness / self.scale
    }

    /// Marker radius in scaled space.
    #[inline]
    pub fn marker_radius(&self) -> f64 {
        MARKER_RADIUS / self.scale
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            line_thickness: DEFAULT_THICKNESS,
            grid_visible: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn defaults() {
        let view = ViewState::default();
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.line_thickness(), 3.0);
        assert!(!view.grid_visible());
    }

    #[test]
    fn zoom_in_once_is_factor() {
        let mut view = ViewState::default();
        view.zoom_in();
        assert!((view.scale() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn zoom_in_then_out_round_trips() {
        let mut view = ViewState::default();
        view.zoom_in();
        view.zoom_out();
        assert!((view.scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_is_unbounded() {
        let mut view = ViewState::default();
        for _ in 0..200 {
            view.zoom_out();
        }
        assert!(view.scale() > 0.0);
        assert!(view.scale() < 1e-15);
        assert!(view.marker_radius() > 1e15);
    }

    #[test]
    fn thickness_floor() {
        let mut view = ViewState::default();
        assert!(view.decrease_thickness());
        assert!(view.decrease_thickness());
        assert_eq!(view.line_thickness(), 1.0);
        assert!(!view.decrease_thickness());
        assert_eq!(view.line_thickness(), 1.0);

        view.increase_thickness();
        assert_eq!(view.line_thickness(), 2.0);
    }

    #[test]
    fn toggle_grid_flips_and_relabels() {
        let mut view = ViewState::default();
        assert_eq!(view.grid_button_label(), "Grid Needed");
        assert!(view.toggle_grid());
        assert_eq!(view.grid_button_label(), "Grid Not Needed");
        assert!(!view.toggle_grid());
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn widths_are_zoom_invariant_on_screen() {
        let mut view = ViewState::default();
        view.zoom_in();
        view.zoom_in();
        assert!((view.stroke_width() * view.scale() - view.line_thickness()).abs() < 1e-12);
        assert!((view.marker_radius() * view.scale() - MARKER_RADIUS).abs() < 1e-12);
    }

    #[test]
    fn transform_anchors_surface_center() {
        let surface = Surface::new(2400.0, 2000.0);
        let mut view = ViewState::default();
        for _ in 0..5 {
            view.zoom_in();
        }
        let center = surface.center();
        let mapped = view.transform_for(surface).apply(center);
        assert!(mapped.distance(center) < 1e-9);
        assert_eq!(center, Point::new(1200.0, 1000.0));
    }

    #[test]
    fn new_sanitizes_stored_values() {
        let view = ViewState::new(-2.0, 0.0, true);
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.line_thickness(), 1.0);
        assert!(view.grid_visible());

        let view = ViewState::new(2.0, f64::NAN, false);
        assert_eq!(view.scale(), 2.0);
        assert_eq!(view.line_thickness(), DEFAULT_THICKNESS);
    }
}
