//! Sharp Memory LCD Driver
//!
//! Driver for the 144x168 LS013B7DH05 memory-in-pixel panel over SPI.
//! Keeps a 1 bpp frame buffer and rewrites only the lines that changed.
//!
//! The panel clocks bits LSB first while the RP2040 SPI block shifts MSB
//! first, so command bits and line addresses are laid out mirrored.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi::SpiBus;

/// Display dimensions
pub const WIDTH: usize = 144;
pub const HEIGHT: usize = 168;
pub const LINE_BYTES: usize = WIDTH / 8;

/// Address byte, pixel data, trailer
const LINE_PACKET: usize = LINE_BYTES + 2;

/// Mode bits, already mirrored for an MSB-first bus
mod cmd {
    pub const WRITE_LINE: u8 = 0x80;
    pub const VCOM: u8 = 0x40;
    pub const CLEAR_ALL: u8 = 0x20;
    pub const TRAILER: u8 = 0x00;
}

/// One bit per pixel, 1 = white
pub type Framebuffer = [[u8; LINE_BYTES]; HEIGHT];

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum SharpError<S> {
    /// SPI transfer failed
    Spi(S),
    /// Chip select could not be driven
    ChipSelect,
}

/// Sharp memory LCD driver
pub struct SharpMemoryDisplay<SPI, CS> {
    spi: SPI,
    /// Chip select, active high
    cs: CS,
    buffer: &'static mut Framebuffer,
    dirty: [bool; HEIGHT],
    vcom: bool,
}

impl<SPI, CS> SharpMemoryDisplay<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    /// Create a driver over a caller-provided frame buffer
    pub fn new(spi: SPI, cs: CS, buffer: &'static mut Framebuffer) -> Self {
        Self {
            spi,
            cs,
            buffer,
            dirty: [false; HEIGHT],
            vcom: false,
        }
    }

    /// Clear panel memory and the frame buffer to black
    pub async fn clear_all(&mut self) -> Result<(), SharpError<SPI::Error>> {
        for line in self.buffer.iter_mut() {
            line.fill(0);
        }
        self.dirty = [false; HEIGHT];

        let mode = cmd::CLEAR_ALL | self.vcom_bit();
        self.transaction(&[mode, cmd::TRAILER]).await
    }

    /// Send changed lines to the panel
    ///
    /// Returns the number of lines written.
    pub async fn flush(&mut self) -> Result<usize, SharpError<SPI::Error>> {
        let count = self.dirty.iter().filter(|d| **d).count();
        if count == 0 {
            return Ok(0);
        }

        self.select()?;
        let result = self.write_dirty_lines().await;
        self.deselect()?;
        result?;

        self.dirty = [false; HEIGHT];
        Ok(count)
    }

    /// Invert VCOM to keep DC bias off the liquid crystal
    ///
    /// Must be called at least once a second while the panel is powered.
    pub async fn toggle_vcom(&mut self) -> Result<(), SharpError<SPI::Error>> {
        self.vcom = !self.vcom;
        let mode = self.vcom_bit();
        self.transaction(&[mode, cmd::TRAILER]).await
    }

    fn vcom_bit(&self) -> u8 {
        if self.vcom {
            cmd::VCOM
        } else {
            0
        }
    }

    async fn write_dirty_lines(&mut self) -> Result<(), SharpError<SPI::Error>> {
        let mode = cmd::WRITE_LINE | self.vcom_bit();
        self.spi.write(&[mode]).await.map_err(SharpError::Spi)?;

        let mut packet = [0u8; LINE_PACKET];
        for (line, data) in self.buffer.iter().enumerate() {
            if !self.dirty[line] {
                continue;
            }
            packet[0] = line_address(line);
            packet[1..=LINE_BYTES].copy_from_slice(data);
            packet[LINE_PACKET - 1] = cmd::TRAILER;
            self.spi.write(&packet).await.map_err(SharpError::Spi)?;
        }

        // Final trailer closes the multi-line write
        self.spi
            .write(&[cmd::TRAILER])
            .await
            .map_err(SharpError::Spi)?;
        self.spi.flush().await.map_err(SharpError::Spi)
    }

    async fn transaction(&mut self, bytes: &[u8]) -> Result<(), SharpError<SPI::Error>> {
        self.select()?;
        let result = match self.spi.write(bytes).await {
            Ok(()) => self.spi.flush().await,
            Err(e) => Err(e),
        };
        self.deselect()?;
        result.map_err(SharpError::Spi)
    }

    fn select(&mut self) -> Result<(), SharpError<SPI::Error>> {
        self.cs.set_high().map_err(|_| SharpError::ChipSelect)
    }

    fn deselect(&mut self) -> Result<(), SharpError<SPI::Error>> {
        self.cs.set_low().map_err(|_| SharpError::ChipSelect)
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        let byte = &mut self.buffer[y][x / 8];
        let mask = 0x80 >> (x % 8);
        let old = *byte;
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        if *byte != old {
            self.dirty[y] = true;
        }
    }
}

/// Gate line address: 1-based, bit-reversed for an MSB-first bus
fn line_address(line: usize) -> u8 {
    ((line + 1) as u8).reverse_bits()
}

impl<SPI, CS> OriginDimensions for SharpMemoryDisplay<SPI, CS> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<SPI, CS> DrawTarget for SharpMemoryDisplay<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Clip to the panel
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as usize, point.y as usize);
            if x >= WIDTH || y >= HEIGHT {
                continue;
            }
            self.set_pixel(x, y, color.is_on());
        }
        Ok(())
    }
}
