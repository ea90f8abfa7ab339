//! Face colors to pixel colors

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565, RgbColor};
use embedded_graphics::prelude::PixelColor;
use nat24_core::traits::Color;

/// Maps face colors onto a pixel color type
pub trait Palette {
    type Color: PixelColor;

    fn color(&self, color: Color) -> Self::Color;
}

/// 1 bpp panels: anything lighter than black is lit
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonoPalette;

impl Palette for MonoPalette {
    type Color = BinaryColor;

    fn color(&self, color: Color) -> BinaryColor {
        match color {
            Color::Black => BinaryColor::Off,
            Color::White | Color::LightGray => BinaryColor::On,
        }
    }
}

/// 16-bit color panels
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565Palette;

impl Palette for Rgb565Palette {
    type Color = Rgb565;

    fn color(&self, color: Color) -> Rgb565 {
        match color {
            Color::Black => Rgb565::BLACK,
            Color::White => Rgb565::WHITE,
            // 0xAAAAAA
            Color::LightGray => Rgb565::new(0x15, 0x2A, 0x15),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_palette() {
        assert_eq!(MonoPalette.color(Color::Black), BinaryColor::Off);
        assert_eq!(MonoPalette.color(Color::LightGray), BinaryColor::On);
    }

    #[test]
    fn test_rgb_gray_between_black_and_white() {
        let gray = Rgb565Palette.color(Color::LightGray);
        assert!(gray.g() > Rgb565::BLACK.g() && gray.g() < Rgb565::WHITE.g());
        assert_eq!(Rgb565Palette.color(Color::White), Rgb565::WHITE);
    }
}
