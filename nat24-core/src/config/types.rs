//! Configuration type definitions
//!
//! Defaults reproduce the stock watch face: 24-hour label, minute ticks,
//! dot notches and the 600/600/900 ms ease-out entrance.

use crate::anim::{ActivityMode, AnimationSpec, Curve};
use crate::angle::WallTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tick granularity of the time source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TickUnit {
    /// Production: one tick per minute
    #[default]
    Minute,
    /// Debug: one tick per second, hour indicator follows the seconds
    Second,
}

impl TickUnit {
    /// Check if moving from `prev` to `next` is a tick of this unit
    pub fn ticked(self, prev: WallTime, next: WallTime) -> bool {
        match self {
            TickUnit::Minute => prev.hour != next.hour || prev.minute != next.minute,
            TickUnit::Second => prev != next,
        }
    }
}

/// Time label format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockStyle {
    /// "HH:MM"
    #[default]
    TwentyFourHour,
    /// "H:MM"
    TwelveHour,
}

/// Shape of the hour notches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NotchStyle {
    /// Filled dots
    #[default]
    Dot,
    /// Short radial strokes
    Tick,
}

/// Entrance animation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntranceConfig {
    /// Run the entrance at all (false: start settled)
    pub enabled: bool,
    /// Face radius growth
    pub radius: AnimationSpec,
    /// Notch spacing convergence
    pub notch_spacing: AnimationSpec,
    /// Hour indicator sweep
    pub hour_sweep: AnimationSpec,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: AnimationSpec::new(600, Curve::EaseOut),
            notch_spacing: AnimationSpec::new(600, Curve::EaseOut).with_delay(100),
            hour_sweep: AnimationSpec::new(900, Curve::EaseOut).with_lifecycle(),
        }
    }
}

/// Watch face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceConfig {
    pub tick_unit: TickUnit,
    pub clock_style: ClockStyle,
    pub notch_style: NotchStyle,
    /// How lifecycle notifications combine into the activity flag
    pub activity: ActivityMode,
    pub entrance: EntranceConfig,
}

/// Display refresh configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Frame period while animations run (ms)
    pub frame_interval_ms: u16,
    /// Panel polarity refresh period (ms)
    pub vcom_interval_ms: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 33,
            vcom_interval_ms: 1000,
        }
    }
}

/// Clock source configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Time loaded into a stopped RTC at boot
    pub initial: WallTime,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            initial: WallTime::new(12, 0, 0),
        }
    }
}

/// Complete configuration loaded from `watch.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchConfig {
    pub face: FaceConfig,
    pub display: DisplayConfig,
    pub clock: ClockConfig,
}
