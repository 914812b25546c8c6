//! Drawing surface abstraction
//!
//! The indicator paints through this trait so the same paint routine drives
//! an iced canvas frame at runtime and a [`DisplayList`] in tests.

use iced::{Color, Point, Rectangle};

/// Fill policy for the bar
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Transparent,
    Solid(Color),
    /// Linear gradient between two points; stops are `(offset, color)`
    /// and the ends clamp to the outermost stop colors
    Linear {
        start: Point,
        end: Point,
        stops: Vec<(f32, Color)>,
    },
}

/// Text drawn horizontally centered on `position.x`, with the bottom of its
/// line box at `position.y`
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub content: String,
    pub position: Point,
    pub size: f32,
    pub color: Color,
}

/// Something the indicator can paint on
pub trait Surface {
    fn fill_rounded_rect(&mut self, rect: Rectangle, radius: f32, fill: &Fill);

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color);

    fn fill_polygon(&mut self, points: &[Point], color: Color);

    fn fill_text(&mut self, label: Label);
}

/// A recorded drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    RoundedRect {
        rect: Rectangle,
        radius: f32,
        fill: Fill,
    },
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    },
    Polygon {
        points: Vec<Point>,
        color: Color,
    },
    Text(Label),
}

/// Surface that records every command in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(label) => Some(label),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn fill_rounded_rect(&mut self, rect: Rectangle, radius: f32, fill: &Fill) {
        self.ops.push(DrawOp::RoundedRect {
            rect,
            radius,
            fill: fill.clone(),
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_text(&mut self, label: Label) {
        self.ops.push(DrawOp::Text(label));
    }
}
