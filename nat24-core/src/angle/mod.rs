//! Angle model
//!
//! Converts wall-clock time into fixed-point angular positions.

pub mod time;
pub mod trig;

pub use time::{hour_angle, minute_angle, second_angle, ClockTime, WallTime, LABEL_LEN};
pub use trig::{
    cos_lookup, normalize, sin_lookup, HALF_TURN, QUARTER_TURN, TRIG_MAX_ANGLE, TRIG_MAX_RATIO,
};
