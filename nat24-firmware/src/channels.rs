//! Inter-task communication
//!
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use nat24_core::angle::WallTime;

/// Latest wall time from the clock task (latest value wins)
pub static TIME_SIGNAL: Signal<CriticalSectionRawMutex, WallTime> = Signal::new();
