//! nat24 - 24-hour watch face firmware
//!
//! Runs the nat24 face on an RP2040 driving a 144x168 Sharp memory LCD.
//! The clock task polls the RTC; the face task owns the face state and the
//! panel and repaints on ticks and animation frames.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::rtc::Rtc;
use embassy_rp::spi::{self, Spi};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::display::{Framebuffer, SharpMemoryDisplay, HEIGHT, LINE_BYTES};

/// Face configuration (compiled into firmware)
/// Edit watch.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../watch.toml");

/// The panel accepts up to 2 MHz
const SPI_FREQUENCY_HZ: u32 = 2_000_000;

mod channels;
mod config;
mod display;
mod tasks;

// Frame buffer must live forever for the face task
static FRAMEBUFFER: StaticCell<Framebuffer> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("nat24 firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load(EMBEDDED_CONFIG);

    let rtc = Rtc::new(p.RTC);

    // Sharp LCD on SPI0: SCK=GPIO18, MOSI=GPIO19, CS=GPIO17 (active high),
    // DISP=GPIO20. EXTMODE is tied low, so VCOM is toggled in software.
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config);
    let cs = Output::new(p.PIN_17, Level::Low);
    let disp = Output::new(p.PIN_20, Level::High);
    // Dropping the pin would release it and blank the panel
    core::mem::forget(disp);

    let buffer = FRAMEBUFFER.init([[0; LINE_BYTES]; HEIGHT]);
    let display = SharpMemoryDisplay::new(spi, cs, buffer);
    info!("Display initialized");

    // Spawn tasks
    spawner
        .spawn(tasks::clock_task(rtc, config.clock, config.face.tick_unit))
        .unwrap();
    spawner.spawn(tasks::face_task(display, config)).unwrap();

    info!("All tasks spawned, firmware running");
}
