//! Wall-clock time to indicator angles

use core::fmt::Write;

use heapless::String;

use super::trig::{normalize, HALF_TURN, TRIG_MAX_ANGLE};
use crate::config::{ClockStyle, TickUnit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity of the time label ("HH:MM" plus slack)
pub const LABEL_LEN: usize = 8;

/// Wall-clock time as delivered by the tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallTime {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

impl WallTime {
    /// Create a wall time from its parts
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

/// Minute indicator angle: `minute / 60` of a turn
pub const fn minute_angle(minute: u8) -> i32 {
    minute as i32 * TRIG_MAX_ANGLE / 60
}

/// Hour indicator angle on the 24-hour dial
///
/// Includes the minute fraction so the hand moves continuously, and a
/// half-turn offset so noon points up and midnight points down.
pub const fn hour_angle(hour: u8, minute: u8) -> i32 {
    let angle = hour as i32 * TRIG_MAX_ANGLE / 24
        + minute as i32 * TRIG_MAX_ANGLE / (60 * 24)
        + HALF_TURN;
    normalize(angle)
}

/// Hour indicator angle in seconds mode: one revolution per minute
pub const fn second_angle(second: u8) -> i32 {
    normalize(second as i32 * TRIG_MAX_ANGLE / 60 + HALF_TURN)
}

/// Time snapshot taken on each tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    /// Hour indicator angle (fixed-point, already phase shifted)
    pub hour_angle: i32,
    /// Minute indicator angle (fixed-point)
    pub minute_angle: i32,
    /// Short time-of-day text
    pub label: String<LABEL_LEN>,
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::on_tick(0, 0)
    }
}

impl ClockTime {
    /// Compute angles and label for a 24-hour clock ticking every minute
    pub fn on_tick(hour: u8, minute: u8) -> Self {
        Self::at(
            WallTime::new(hour, minute, 0),
            TickUnit::Minute,
            ClockStyle::TwentyFourHour,
        )
    }

    /// Compute angles and label for the given tick granularity and style
    pub fn at(time: WallTime, unit: TickUnit, style: ClockStyle) -> Self {
        let hour_angle = match unit {
            TickUnit::Minute => hour_angle(time.hour, time.minute),
            TickUnit::Second => second_angle(time.second),
        };

        Self {
            hours: time.hour,
            minutes: time.minute,
            seconds: time.second,
            hour_angle,
            minute_angle: minute_angle(time.minute),
            label: format_label(time.hour, time.minute, style),
        }
    }

    /// The time label as a string slice
    pub fn label(&self) -> &str {
        self.label.as_str()
    }
}

/// Format "HH:MM" (24-hour) or "H:MM" (12-hour)
fn format_label(hour: u8, minute: u8, style: ClockStyle) -> String<LABEL_LEN> {
    let mut label = String::new();
    // Values are bounded to two digits each, so the write cannot overflow
    let _ = match style {
        ClockStyle::TwentyFourHour => write!(label, "{:02}:{:02}", hour, minute),
        ClockStyle::TwelveHour => {
            let hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            write!(label, "{}:{:02}", hour, minute)
        }
    };
    label
}
