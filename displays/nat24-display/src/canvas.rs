//! Canvas over an embedded-graphics draw target

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::prelude::{Dimensions, Point as EgPoint, Primitive, Size};
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::Drawable;
use nat24_core::geometry::{Point, Rect};
use nat24_core::traits::{Canvas, Color};

use crate::palette::Palette;

/// Stateful graphics context on top of a `DrawTarget`
///
/// Antialiasing requests are recorded but embedded-graphics primitives are
/// always drawn aliased.
pub struct GraphicsCanvas<'a, D, P> {
    target: &'a mut D,
    palette: P,
    bounds: Rect,
    fill: Color,
    stroke: Color,
    stroke_width: u8,
    antialiased: bool,
}

impl<'a, D, P> GraphicsCanvas<'a, D, P>
where
    D: DrawTarget,
    P: Palette<Color = D::Color>,
{
    /// Canvas covering the whole target
    pub fn new(target: &'a mut D, palette: P) -> Self {
        let bounds = from_rectangle(target.bounding_box());
        Self::with_bounds(target, palette, bounds)
    }

    /// Canvas restricted to `bounds` (used by clears)
    pub fn with_bounds(target: &'a mut D, palette: P, bounds: Rect) -> Self {
        Self {
            target,
            palette,
            bounds,
            fill: Color::Black,
            stroke: Color::White,
            stroke_width: 1,
            antialiased: false,
        }
    }

    /// Last antialiasing request
    pub fn antialiased(&self) -> bool {
        self.antialiased
    }
}

impl<D, P> Canvas for GraphicsCanvas<'_, D, P>
where
    D: DrawTarget,
    P: Palette<Color = D::Color>,
{
    type Error = D::Error;

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_stroke_width(&mut self, width: u8) {
        self.stroke_width = width;
    }

    fn set_antialiased(&mut self, enabled: bool) {
        self.antialiased = enabled;
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), Self::Error> {
        let style = PrimitiveStyle::with_fill(self.palette.color(self.fill));
        to_rectangle(rect).into_styled(style).draw(&mut *self.target)
    }

    fn fill_circle(&mut self, center: Point, radius: u16) -> Result<(), Self::Error> {
        let style = PrimitiveStyle::with_fill(self.palette.color(self.fill));
        let diameter = 2 * radius as u32 + 1;
        Circle::with_center(to_point(center), diameter)
            .into_styled(style)
            .draw(&mut *self.target)
    }

    fn draw_line(&mut self, start: Point, end: Point) -> Result<(), Self::Error> {
        let style =
            PrimitiveStyle::with_stroke(self.palette.color(self.stroke), self.stroke_width as u32);
        Line::new(to_point(start), to_point(end))
            .into_styled(style)
            .draw(&mut *self.target)
    }
}

fn to_point(point: Point) -> EgPoint {
    EgPoint::new(point.x, point.y)
}

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(to_point(rect.origin), Size::new(rect.width, rect.height))
}

fn from_rectangle(rect: Rectangle) -> Rect {
    Rect::new(
        rect.top_left.x,
        rect.top_left.y,
        rect.size.width,
        rect.size.height,
    )
}
