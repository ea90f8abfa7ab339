//! Time label below the face

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::prelude::{Point, Primitive, Size};
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_graphics::Drawable;
use nat24_core::geometry::Rect;
use nat24_core::traits::Color;

use crate::palette::Palette;

/// Largest built-in mono font; five glyphs fit a 144 px panel
pub const LABEL_FONT: &MonoFont<'static> = &FONT_10X20;

/// Clear `area` and draw `text` centered in it, light gray on black
///
/// An empty area draws nothing.
pub fn draw_label<D, P>(target: &mut D, palette: &P, area: Rect, text: &str) -> Result<(), D::Error>
where
    D: DrawTarget,
    P: Palette<Color = D::Color>,
{
    if area.width == 0 || area.height == 0 {
        return Ok(());
    }

    Rectangle::new(
        Point::new(area.origin.x, area.origin.y),
        Size::new(area.width, area.height),
    )
    .into_styled(PrimitiveStyle::with_fill(palette.color(Color::Black)))
    .draw(target)?;

    let center = area.center();
    let character_style = MonoTextStyle::new(LABEL_FONT, palette.color(Color::LightGray));
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    Text::with_text_style(
        text,
        Point::new(center.x, center.y),
        character_style,
        text_style,
    )
    .draw(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{MonoPalette, Rgb565Palette};
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::{BinaryColor, Rgb565, RgbColor};

    #[test]
    fn test_label_stays_in_area() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let area = Rect::new(0, 40, 64, 24);

        draw_label(&mut display, &MonoPalette, area, "12:34").unwrap();

        let mut lit = 0;
        for y in 0..64 {
            for x in 0..64 {
                let pixel = display.get_pixel(Point::new(x, y));
                if y < 40 {
                    assert_eq!(pixel, None);
                } else if pixel == Some(BinaryColor::On) {
                    lit += 1;
                }
            }
        }
        assert!(lit > 0);
    }

    #[test]
    fn test_label_text_is_light_gray() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let area = Rect::new(0, 40, 64, 24);

        draw_label(&mut display, &Rgb565Palette, area, "12:34").unwrap();

        let gray = Rgb565Palette.color(Color::LightGray);
        let mut text = 0;
        for y in 40..64 {
            for x in 0..64 {
                match display.get_pixel(Point::new(x, y)) {
                    Some(c) if c == gray => text += 1,
                    Some(c) => assert_eq!(c, Rgb565::BLACK),
                    None => panic!("unpainted label pixel at ({}, {})", x, y),
                }
            }
        }
        assert!(text > 0);
    }

    #[test]
    fn test_empty_area_draws_nothing() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        draw_label(&mut display, &MonoPalette, Rect::new(0, 64, 64, 0), "00:00").unwrap();
        assert_eq!(display, MockDisplay::new());
    }
}
