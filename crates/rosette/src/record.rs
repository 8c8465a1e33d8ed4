//! A drawing context that records calls instead of painting.
//!
//! Useful for tests (two renders are identical iff their command lists are)
//! and for dumping a render as JSON.

use serde::Serialize;

use crate::context::{DrawingContext, Font};
use crate::geometry::{Point, Transform};

/// One recorded drawing call.
///
/// Serialized with an `op` tag, e.g. `{"op":"line_to","x":1.0,"y":2.0}`.
/// Non-finite numbers come out as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetTransform {
        transform: Transform,
    },
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Stroke {
        color: String,
        width: f64,
    },
    FillCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: String,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        font: Font,
        color: String,
    },
}

/// Records every call in order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every `line_to` point, in order.
    pub fn line_to_points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::LineTo { x, y } => Some(Point::new(*x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Every filled circle as (center, radius, colour).
    pub fn circles(&self) -> Vec<(Point, f64, &str)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { x, y, radius, color } => {
                    Some((Point::new(*x, *y), *radius, color.as_str()))
                }
                _ => None,
            })
            .collect()
    }
}

impl DrawingContext for Recorder {
    fn set_transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::SetTransform { transform });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::MoveTo { x: p.x, y: p.y });
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::LineTo { x: p.x, y: p.y });
    }

    fn stroke(&mut self, color: &str, width: f64) {
        self.commands.push(DrawCommand::Stroke {
            color: color.to_string(),
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            x: center.x,
            y: center.y,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: &str) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x: at.x,
            y: at.y,
            font: font.clone(),
            color: color.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut rec = Recorder::new();
        rec.reset_transform();
        rec.begin_path();
        rec.move_to(Point::new(1.0, 2.0));
        rec.line_to(Point::new(3.0, 4.0));
        rec.stroke("red", 2.0);

        assert_eq!(rec.len(), 5);
        assert_eq!(
            rec.commands()[0],
            DrawCommand::SetTransform {
                transform: Transform::IDENTITY
            }
        );
        assert_eq!(rec.line_to_points(), vec![Point::new(3.0, 4.0)]);
    }

    #[test]
    fn serializes_with_op_tag_and_null_for_nan() {
        let mut rec = Recorder::new();
        rec.line_to(Point::new(f64::NAN, 1.5));
        rec.fill_circle(Point::new(0.0, 0.0), 5.0, "green");

        let json = serde_json::to_string(rec.commands()).unwrap();
        assert!(json.contains(r#""op":"line_to""#));
        assert!(json.contains(r#""x":null"#));
        assert!(json.contains(r#""op":"fill_circle""#));
        assert!(json.contains(r#""color":"green""#));
    }
}
