//! Clock task: RTC polling
//!
//! Polls the RP2040 RTC and publishes the wall time whenever the configured
//! tick unit rolls over.

use defmt::*;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use embassy_time::{Duration, Ticker, Timer};

use nat24_core::angle::WallTime;
use nat24_core::config::{ClockConfig, TickUnit};

use crate::channels::TIME_SIGNAL;

/// Poll interval per tick unit; well under the unit so ticks land on time
const fn poll_interval(unit: TickUnit) -> Duration {
    match unit {
        TickUnit::Minute => Duration::from_millis(1000),
        TickUnit::Second => Duration::from_millis(100),
    }
}

/// Clock task - publishes wall time on every tick
#[embassy_executor::task]
pub async fn clock_task(mut rtc: Rtc<'static, RTC>, clock: ClockConfig, unit: TickUnit) {
    info!("Clock task started ({:?} ticks)", unit);

    if !rtc.is_running() {
        let initial = clock.initial;
        let start = DateTime {
            year: 2000,
            month: 1,
            day: 1,
            day_of_week: DayOfWeek::Saturday,
            hour: initial.hour,
            minute: initial.minute,
            second: initial.second,
        };
        match rtc.set_datetime(start) {
            Ok(()) => info!(
                "RTC stopped, set to {:02}:{:02}:{:02}",
                initial.hour, initial.minute, initial.second
            ),
            Err(e) => error!("Failed to set RTC: {:?}", Debug2Format(&e)),
        }
        // New time reads back after a few RTC clock cycles
        Timer::after_millis(10).await;
    }

    let mut ticker = Ticker::every(poll_interval(unit));
    let mut last: Option<WallTime> = None;

    loop {
        match rtc.now() {
            Ok(now) => {
                let time = WallTime::new(now.hour, now.minute, now.second);
                if last.map_or(true, |prev| unit.ticked(prev, time)) {
                    trace!("Tick {:02}:{:02}:{:02}", time.hour, time.minute, time.second);
                    TIME_SIGNAL.signal(time);
                    last = Some(time);
                }
            }
            Err(e) => warn!("RTC read failed: {:?}", Debug2Format(&e)),
        }

        ticker.next().await;
    }
}
