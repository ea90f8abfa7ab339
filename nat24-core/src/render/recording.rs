//! Canvas that records every call, for renderer tests

use core::convert::Infallible;

use crate::geometry::{Point, Rect};
use crate::traits::{Canvas, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Fill(Color),
    Stroke(Color),
    StrokeWidth(u8),
    Antialias(bool),
    Rect(Rect),
    Circle(Point, u16),
    Line(Point, Point),
}

pub struct RecordingCanvas {
    pub bounds: Rect,
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bounds: Rect::new(0, 0, width, height),
            ops: Vec::new(),
        }
    }

    pub fn take(&mut self) -> Vec<Op> {
        core::mem::take(&mut self.ops)
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, u16)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            Op::Circle(c, r) => Some((c, r)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            Op::Line(a, b) => Some((a, b)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    type Error = Infallible;

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::Fill(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(Op::Stroke(color));
    }

    fn set_stroke_width(&mut self, width: u8) {
        self.ops.push(Op::StrokeWidth(width));
    }

    fn set_antialiased(&mut self, enabled: bool) {
        self.ops.push(Op::Antialias(enabled));
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), Self::Error> {
        self.ops.push(Op::Rect(rect));
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: u16) -> Result<(), Self::Error> {
        self.ops.push(Op::Circle(center, radius));
        Ok(())
    }

    fn draw_line(&mut self, start: Point, end: Point) -> Result<(), Self::Error> {
        self.ops.push(Op::Line(start, end));
        Ok(())
    }
}
