//! Display hardware
//!
//! The Sharp memory LCD driver and the concrete bus types used by the
//! face task.

pub mod sharp;

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};

pub use sharp::{Framebuffer, SharpMemoryDisplay, HEIGHT, LINE_BYTES, WIDTH};

/// The panel as wired on the board
pub type Display = SharpMemoryDisplay<Spi<'static, SPI0, Async>, Output<'static>>;
