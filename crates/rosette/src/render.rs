//! The renderer: parameters + view state + surface in, drawing calls out.
//!
//! A render pass is a pure function of its inputs. Call it twice with the
//! same arguments and the context receives the same calls in the same order.

use serde::Serialize;

use crate::context::DrawingContext;
use crate::geometry::{Point, Surface, Transform};
use crate::params::SpiralParams;
use crate::spiral::generate_spiral;
use crate::theme::Theme;
use crate::view::ViewState;

/// Grid lines are always one pixel wide, whatever the zoom.
pub const GRID_LINE_WIDTH: f64 = 1.0;

/// Upper bound on grid lines per axis. A spacing small enough to hit this
/// would paint the surface solid anyway.
pub const MAX_GRID_LINES: usize = 10_000;

/// Left edge of the overlay text, in screen pixels.
pub const OVERLAY_X: f64 = 20.0;

/// Baselines of the three overlay lines, in screen pixels.
pub const OVERLAY_BASELINES: [f64; 3] = [30.0, 55.0, 80.0];

/// What a render pass drew, for status displays and logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Path vertices including the start point.
    pub vertices: usize,
    pub grid_drawn: bool,
    /// Grid lines across both axes.
    pub grid_lines: usize,
}

/// Draws a spiral, its markers, the optional grid and the info overlay.
#[derive(Debug, Clone, Default)]
pub struct SpiralRenderer {
    theme: Theme,
}

impl SpiralRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render one full frame onto `ctx`.
    ///
    /// Order matters and is fixed: reset + clear, grid (screen space), zoom
    /// transform, spiral stroke, start marker, end marker, overlay text
    /// (screen space again).
    pub fn render<C: DrawingContext + ?Sized>(
        &self,
        ctx: &mut C,
        surface: Surface,
        params: &SpiralParams,
        view: &ViewState,
    ) -> RenderStats {
        let mut stats = RenderStats::default();

        // 1. Reset before clearing, or a stale zoom would clear the wrong area.
        ctx.set_transform(Transform::IDENTITY);
        ctx.clear_rect(0.0, 0.0, surface.width, surface.height);

        // 2. Grid, before the zoom so its density doesn't follow the scale.
        if view.grid_visible() {
            stats.grid_lines = self.draw_grid(ctx, surface, params.initial_step);
            stats.grid_drawn = stats.grid_lines > 0;
        }

        // 3. Zoom about the surface centre.
        ctx.set_transform(view.transform_for(surface));

        // 4. The spiral, stroked once as a single polyline.
        let points = generate_spiral(params, surface.center());
        stats.vertices = points.len();

        ctx.begin_path();
        let (first, rest) = match points.split_first() {
            Some(split) => split,
            None => return stats,
        };
        ctx.move_to(*first);
        for p in rest {
            ctx.line_to(*p);
        }
        ctx.stroke(&self.theme.spiral, view.stroke_width());

        // 5. Start and end markers, still in scaled space.
        let last = points.last().copied().unwrap_or(*first);
        ctx.fill_circle(*first, view.marker_radius(), &self.theme.start_marker);
        ctx.fill_circle(last, view.marker_radius(), &self.theme.end_marker);

        // 6. Overlay text in screen space.
        ctx.set_transform(Transform::IDENTITY);
        self.draw_overlay(ctx, params);

        log::debug!(
            "rendered {} vertices at scale {:.3} on {}x{} (grid lines: {})",
            stats.vertices,
            view.scale(),
            surface.width,
            surface.height,
            stats.grid_lines
        );

        stats
    }

    /// One path holding every grid line, stroked once. Returns the line count.
    fn draw_grid<C: DrawingContext + ?Sized>(&self, ctx: &mut C, surface: Surface, spacing: f64) -> usize {
        let xs = grid_positions(surface.width, spacing);
        let ys = grid_positions(surface.height, spacing);

        if xs.is_empty() && ys.is_empty() {
            log::warn!("grid spacing {spacing} is not drawable, skipping grid");
            return 0;
        }

        ctx.begin_path();
        for &x in &xs {
            ctx.move_to(Point::new(x, 0.0));
            ctx.line_to(Point::new(x, surface.height));
        }
        for &y in &ys {
            ctx.move_to(Point::new(0.0, y));
            ctx.line_to(Point::new(surface.width, y));
        }
        ctx.stroke(&self.theme.grid, GRID_LINE_WIDTH);

        xs.len() + ys.len()
    }

    fn draw_overlay<C: DrawingContext + ?Sized>(&self, ctx: &mut C, params: &SpiralParams) {
        let font = self.theme.font();
        let lines = overlay_lines(params);
        for (text, baseline) in lines.iter().zip(OVERLAY_BASELINES) {
            ctx.fill_text(text, Point::new(OVERLAY_X, baseline), &font, &self.theme.text);
        }
    }
}

/// The three overlay lines reporting the raw inputs.
pub fn overlay_lines(params: &SpiralParams) -> [String; 3] {
    [
        format!("Angle: {}°", format_number(params.turn_angle_degrees)),
        format!("Step: {}", format_number(params.initial_step)),
        format!("Increment: {}", format_number(params.step_increment)),
    ]
}

/// Grid line offsets `0, s, 2s, ...` while `<= extent`.
///
/// Offsets accumulate by repeated addition, matching how an interactive
/// loop would step. Non-finite or non-positive spacing yields nothing.
pub fn grid_positions(extent: f64, spacing: f64) -> Vec<f64> {
    if !(spacing.is_finite() && spacing > 0.0) || !extent.is_finite() {
        return Vec::new();
    }

    let mut positions = Vec::new();
    let mut v = 0.0;
    while v <= extent && positions.len() < MAX_GRID_LINES {
        positions.push(v);
        v += spacing;
    }
    positions
}

/// Format a number the way a browser prints it: `5` not `5.0`, `NaN`,
/// `Infinity`, and no negative zero.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DrawCommand, Recorder};

    fn render(params: &SpiralParams, view: &ViewState) -> (Recorder, RenderStats) {
        let mut rec = Recorder::new();
        let stats = SpiralRenderer::default().render(&mut rec, Surface::new(800.0, 600.0), params, view);
        (rec, stats)
    }

    #[test]
    fn starts_with_reset_then_clear() {
        let (rec, _) = render(&SpiralParams::default(), &ViewState::default());
        assert_eq!(
            rec.commands()[0],
            DrawCommand::SetTransform {
                transform: Transform::IDENTITY
            }
        );
        assert_eq!(
            rec.commands()[1],
            DrawCommand::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0
            }
        );
    }

    #[test]
    fn degenerate_spiral_has_markers_on_center() {
        let params = SpiralParams::new(144.0, 5.0, 0.0, 0, 3);
        let (rec, stats) = render(&params, &ViewState::default());

        assert_eq!(stats.vertices, 1);
        assert!(rec.line_to_points().is_empty());

        let circles = rec.circles();
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].0, Point::new(400.0, 300.0));
        assert_eq!(circles[1].0, Point::new(400.0, 300.0));
        assert_eq!(circles[0].2, "green");
        assert_eq!(circles[1].2, "red");
    }

    #[test]
    fn markers_and_stroke_scale_inversely() {
        let mut view = ViewState::default();
        view.zoom_in();
        let (rec, _) = render(&SpiralParams::default(), &view);

        let stroke_width = rec
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Stroke { width, .. } => Some(*width),
                _ => None,
            })
            .unwrap();
        assert!((stroke_width - 3.0 / 1.2).abs() < 1e-12);

        for (_, radius, _) in rec.circles() {
            assert!((radius - 5.0 / 1.2).abs() < 1e-12);
        }
    }

    #[test]
    fn spiral_is_drawn_under_zoom_and_text_in_screen_space() {
        let mut view = ViewState::default();
        view.zoom_in();
        let (rec, _) = render(&SpiralParams::default(), &view);
        let zoom = view.transform_for(Surface::new(800.0, 600.0));

        let mut current = Transform::IDENTITY;
        for cmd in rec.commands() {
            match cmd {
                DrawCommand::SetTransform { transform } => current = *transform,
                DrawCommand::LineTo { .. } | DrawCommand::FillCircle { .. } => {
                    assert_eq!(current, zoom)
                }
                DrawCommand::FillText { .. } => assert_eq!(current, Transform::IDENTITY),
                _ => {}
            }
        }
    }

    #[test]
    fn overlay_reports_raw_inputs() {
        let params = SpiralParams::new(144.0, 5.0, 0.5, 5, 1);
        let (rec, _) = render(&params, &ViewState::default());
        let texts: Vec<(&str, f64, f64)> = rec
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, x, y, .. } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect();

        assert_eq!(
            texts,
            vec![
                ("Angle: 144°", 20.0, 30.0),
                ("Step: 5", 20.0, 55.0),
                ("Increment: 0.5", 20.0, 80.0),
            ]
        );
    }

    #[test]
    fn grid_is_drawn_before_zoom_with_step_spacing() {
        let mut view = ViewState::default();
        view.toggle_grid();
        view.zoom_in();
        let params = SpiralParams::new(90.0, 100.0, 0.0, 4, 1);
        let (rec, stats) = render(&params, &view);

        // 0..=800 step 100 -> 9 vertical, 0..=600 -> 7 horizontal
        assert!(stats.grid_drawn);
        assert_eq!(stats.grid_lines, 16);

        // The grid stroke comes before the zoom transform is applied.
        let grid_stroke = rec
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::Stroke { color, .. } if color == "#383838"))
            .unwrap();
        let zoom_at = rec
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::SetTransform { transform } if *transform != Transform::IDENTITY))
            .unwrap();
        assert!(grid_stroke < zoom_at);
        assert_eq!(
            rec.commands()[grid_stroke],
            DrawCommand::Stroke {
                color: "#383838".to_string(),
                width: GRID_LINE_WIDTH
            }
        );
    }

    #[test]
    fn nan_params_render_without_panic() {
        let params = SpiralParams::new(f64::NAN, f64::NAN, f64::NAN, 10, 2);
        let mut view = ViewState::default();
        view.toggle_grid();
        let (rec, stats) = render(&params, &view);

        assert_eq!(stats.vertices, 21);
        assert!(!stats.grid_drawn);
        let texts: Vec<_> = rec
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts[0], "Angle: NaN°");
    }

    #[test]
    fn grid_positions_bounds() {
        assert_eq!(grid_positions(10.0, 5.0), vec![0.0, 5.0, 10.0]);
        assert!(grid_positions(10.0, 0.0).is_empty());
        assert!(grid_positions(10.0, -1.0).is_empty());
        assert!(grid_positions(10.0, f64::NAN).is_empty());
        assert_eq!(grid_positions(1e9, 1e-3).len(), MAX_GRID_LINES);
    }

    #[test]
    fn format_number_like_a_browser() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-3.5), "-3.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
