//! Drawing surface trait

use crate::geometry::{Point, RadialLine, Rect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Colors used by the watch face
///
/// Hosts map these onto their native pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Black,
    White,
    LightGray,
}

/// Drawing surface
///
/// Mirrors a stateful graphics context: colors, stroke width and
/// antialiasing are set first and apply to subsequent primitives.
pub trait Canvas {
    /// Error raised by the underlying surface
    type Error;

    /// Drawable area of this canvas
    fn bounds(&self) -> Rect;

    /// Color used by `fill_rect` and `fill_circle`
    fn set_fill_color(&mut self, color: Color);

    /// Color used by `draw_line`
    fn set_stroke_color(&mut self, color: Color);

    /// Width used by `draw_line`
    fn set_stroke_width(&mut self, width: u8);

    /// Request antialiased edges (surfaces may ignore this)
    fn set_antialiased(&mut self, enabled: bool);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect) -> Result<(), Self::Error>;

    /// Fill a circle of `radius` around `center`
    fn fill_circle(&mut self, center: Point, radius: u16) -> Result<(), Self::Error>;

    /// Draw a line between two points
    fn draw_line(&mut self, start: Point, end: Point) -> Result<(), Self::Error>;
}

/// Helpers built on the primitive operations
pub trait CanvasExt: Canvas {
    /// Fill the whole canvas
    fn clear(&mut self, color: Color) -> Result<(), Self::Error> {
        self.set_fill_color(color);
        let bounds = self.bounds();
        self.fill_rect(bounds)
    }

    /// Stroke a radial line with its own width
    fn stroke_radial_line(&mut self, line: RadialLine) -> Result<(), Self::Error> {
        self.set_stroke_width(line.width);
        self.draw_line(line.start, line.end)
    }
}

// Blanket implementation for all Canvas types
impl<T: Canvas + ?Sized> CanvasExt for T {}
