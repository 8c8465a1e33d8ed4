//! Core geometry types for rosette.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(Debug, Clone, Copy, PartialEq)]` gives us printing, cheap
//! copies and `==` for free. Everything here is a handful of `f64`s, so
//! `Copy` is the right call: passing a `Point` by value costs nothing.

use serde::Serialize;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both coordinates are finite (no NaN, no infinity).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A 2D affine transform.
///
/// Components follow the canvas `setTransform(a, b, c, d, e, f)` order, which
/// is also the order of an SVG `matrix(a b c d e f)`:
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Uniform scale that leaves `anchor` where it is.
    ///
    /// The translation works out to `anchor * (1 - scale)`, which for the
    /// surface centre is the familiar `dimension * (1 - scale) / 2`.
    pub fn scale_about(scale: f64, anchor: Point) -> Self {
        Self::new(
            scale,
            0.0,
            0.0,
            scale,
            anchor.x * (1.0 - scale),
            anchor.y * (1.0 - scale),
        )
    }

    /// Map a point from user space into device space.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f]
            .iter()
            .all(|v| v.is_finite())
    }

    /// True for pure scale + translate (no rotation or skew).
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        self.b == 0.0 && self.c == 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pixel dimensions of the drawing surface. Owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    /// Smallest surface the host will ever hand out.
    pub const MIN_WIDTH: f64 = 2400.0;
    pub const MIN_HEIGHT: f64 = 2000.0;

    /// Container pixels are doubled so the drawing stays sharp once the
    /// image is scaled down to fit its panel.
    pub const CONTAINER_SCALE: f64 = 2.0;

    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size a surface for a container of the given pixel size.
    pub fn fit_container(container_width: f64, container_height: f64) -> Self {
        Self::new(
            (container_width * Self::CONTAINER_SCALE).max(Self::MIN_WIDTH),
            (container_height * Self::CONTAINER_SCALE).max(Self::MIN_HEIGHT),
        )
    }

    /// Midpoint of the surface. Every spiral starts here.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(Self::MIN_WIDTH, Self::MIN_HEIGHT)
    }
}
