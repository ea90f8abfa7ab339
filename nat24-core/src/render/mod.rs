//! Face and indicator renderers
//!
//! Renderers are pure functions of the face state; drawing goes through the
//! [`Canvas`](crate::traits::Canvas) seam so hosts decide how pixels land.

pub mod face;
pub mod indicators;
pub mod scale;

#[cfg(test)]
pub(crate) mod recording;

pub use face::{notch, notch_angle, notches, render_face, Notch, NOTCH_COUNT};
pub use indicators::{hour_indicator_angle, render_indicators};
pub use scale::RenderScale;
