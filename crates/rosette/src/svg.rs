//! SVG canvas - an immediate-mode drawing context that writes SVG.
//!
//! Canvas calls arrive one at a time with a "current transform", while SVG is
//! a retained tree. We bridge the two by stamping every element with the
//! transform that was current when it was drawn (`matrix(a b c d e f)`), so
//! the document paints exactly what the calls asked for, in order.
//!
//! ## Canvas tolerance
//!
//! An HTML canvas silently ignores `moveTo`/`lineTo`/`arc`/`setTransform`
//! calls with NaN or infinite arguments. We do the same, which is what makes
//! rendering garbage parameters safe: the SVG stays parseable no matter what
//! numbers come in.

use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::context::{DrawingContext, Font};
use crate::geometry::{Point, Surface, Transform};

/// Builds an SVG document from drawing calls.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    surface: Surface,
    background: String,
    transform: Transform,
    /// Path data for the current path (`M.. L..`).
    path: String,
    has_current_point: bool,
    has_segments: bool,
    elements: Vec<String>,
}

impl SvgCanvas {
    pub fn new(surface: Surface, background: impl Into<String>) -> Self {
        Self {
            surface,
            background: background.into(),
            transform: Transform::IDENTITY,
            path: String::new(),
            has_current_point: false,
            has_segments: false,
            elements: Vec::new(),
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Number of painted elements so far (background not included).
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Produce the finished document.
    pub fn to_svg_string(&self) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<rect width="100%" height="100%" fill="{bg}"/>
"#,
            w = self.surface.width,
            h = self.surface.height,
            bg = escape(self.background.as_str()),
        );

        for element in &self.elements {
            svg.push_str(element);
            svg.push('\n');
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn transform_attr(&self) -> String {
        let t = &self.transform;
        format!(
            r#" transform="matrix({} {} {} {} {} {})""#,
            t.a, t.b, t.c, t.d, t.e, t.f
        )
    }

    /// Whether the rect, once transformed, covers the whole surface.
    fn covers_surface(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        if !self.transform.is_axis_aligned() {
            return false;
        }
        let p1 = self.transform.apply(Point::new(x, y));
        let p2 = self.transform.apply(Point::new(x + width, y + height));
        p1.x.min(p2.x) <= 0.0
            && p1.y.min(p2.y) <= 0.0
            && p1.x.max(p2.x) >= self.surface.width
            && p1.y.max(p2.y) >= self.surface.height
    }
}

impl DrawingContext for SvgCanvas {
    fn set_transform(&mut self, transform: Transform) {
        if transform.is_finite() {
            self.transform = transform;
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return;
        }

        // Clearing everything makes earlier elements unreachable - drop them.
        if self.covers_surface(x, y, width, height) {
            self.elements.clear();
            return;
        }

        self.elements.push(format!(
            r#"<rect x="{x:.3}" y="{y:.3}" width="{width:.3}" height="{height:.3}" fill="{}"{}/>"#,
            escape(self.background.as_str()),
            self.transform_attr(),
        ));
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.has_current_point = false;
        self.has_segments = false;
    }

    fn move_to(&mut self, p: Point) {
        if !p.is_finite() {
            return;
        }
        let _ = write!(self.path, "M{:.3},{:.3} ", p.x, p.y);
        self.has_current_point = true;
    }

    fn line_to(&mut self, p: Point) {
        if !p.is_finite() {
            return;
        }
        // With no current point a canvas treats lineTo as moveTo.
        if !self.has_current_point {
            self.move_to(p);
            return;
        }
        let _ = write!(self.path, "L{:.3},{:.3} ", p.x, p.y);
        self.has_segments = true;
    }

    fn stroke(&mut self, color: &str, width: f64) {
        if !self.has_segments || !(width.is_finite() && width > 0.0) {
            return;
        }
        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-miterlimit="10"{}/>"#,
            self.path.trim_end(),
            escape(color),
            width,
            self.transform_attr(),
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        if !center.is_finite() || !radius.is_finite() || radius < 0.0 {
            return;
        }
        self.elements.push(format!(
            r#"<circle cx="{:.3}" cy="{:.3}" r="{}" fill="{}"{}/>"#,
            center.x,
            center.y,
            radius,
            escape(color),
            self.transform_attr(),
        ));
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: &str) {
        if !at.is_finite() {
            return;
        }
        self.elements.push(format!(
            r#"<text x="{:.3}" y="{:.3}" font-size="{}" font-family="{}" fill="{}"{}>{}</text>"#,
            at.x,
            at.y,
            font.size,
            escape(font.family.as_str()),
            escape(color),
            self.transform_attr(),
            escape(text),
        ));
    }
}
